use chrono::Locale;
use clap::Parser;
use facturas_runner::{Backend, Error, InvoiceValues, RunOptions, Runner, Session, SessionConfig};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "facturas-runner")]
#[command(about = "Fill out and submit the facturas.ws invoice form")]
#[command(version)]
struct Cli {
    /// Invoice values file (JSON)
    #[arg(default_value = "invoice_values.json")]
    values: PathBuf,

    /// Browser backend; chrome then firefox are tried in order when unset
    #[arg(short, long)]
    browser: Option<Backend>,

    /// WebDriver endpoint override (each backend's default port otherwise)
    #[arg(long, value_name = "URL")]
    webdriver_url: Option<String>,

    /// Target page
    #[arg(long, default_value = facturas_runner::DEFAULT_TARGET_URL)]
    url: String,

    /// Month-name locale for the generated product description
    #[arg(long, default_value = "es_ES")]
    locale: String,

    /// Run the browser headless
    #[arg(long)]
    headless: bool,

    /// Validate the values file without launching a browser
    #[arg(long)]
    check: bool,

    /// Verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (only errors)
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> facturas_runner::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    // Values and locale are validated before any browser work
    let values = InvoiceValues::load(&cli.values)?;
    let locale = Locale::try_from(cli.locale.as_str())
        .map_err(|_| Error::Config(format!("unknown locale '{}'", cli.locale)))?;

    if cli.check {
        println!("Values valid: {}", cli.values.display());
        for (key, value) in values.fields() {
            println!("  {} = {}", key, value);
        }
        return Ok(());
    }

    println!("Running against: {}", cli.url);

    let session_config = SessionConfig {
        backend: cli.browser,
        webdriver_url: cli.webdriver_url.clone(),
        headless: cli.headless,
    };
    let session = Session::connect(&session_config).await?;

    let options = RunOptions {
        target_url: cli.url.clone(),
        locale,
    };
    let runner = Runner::with_options(session, options);

    // The session is quit on both outcomes before the result is inspected
    let outcome = runner.run(&values).await;
    let quit_outcome = runner.quit().await;

    println!();
    match &outcome {
        Ok(result) => {
            println!("✓ Success");
            println!("  Fields set: {}", result.fields_set);
            println!("  Rows removed: {}", result.rows_removed);
            println!("  Duration: {}ms", result.duration_ms);
        }
        Err(error) => {
            println!("✗ Failed");
            println!("  Error: {}", error);
        }
    }

    quit_outcome?;

    if outcome.is_err() {
        std::process::exit(1);
    }

    Ok(())
}
