mod filler;
mod locators;

use crate::config::InvoiceValues;
use crate::session::Session;
use crate::Result;
use chrono::Locale;
use std::time::Instant;
use tracing::info;

/// Default target: the live invoice form.
pub const DEFAULT_TARGET_URL: &str = "https://facturas.ws/";

/// Per-run options.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Page to fill out.
    pub target_url: String,

    /// Locale used for the month name in the generated product
    /// description. Explicit per run, never process-global.
    pub locale: Locale,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            locale: Locale::es_ES,
        }
    }
}

/// Result of one fill pass.
#[derive(Debug)]
pub struct RunResult {
    /// Number of form controls set (inputs, textareas and selects).
    pub fields_set: usize,
    /// Number of extra line-item rows removed.
    pub rows_removed: usize,
    /// Total duration in milliseconds.
    pub duration_ms: u64,
}

/// Drives one browser session through the invoice form.
pub struct Runner {
    session: Session,
    options: RunOptions,
}

impl Runner {
    /// Create a runner with default options.
    pub fn new(session: Session) -> Self {
        Self::with_options(session, RunOptions::default())
    }

    /// Create a runner with explicit options.
    pub fn with_options(session: Session, options: RunOptions) -> Self {
        Self { session, options }
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Perform one full fill-and-submit pass. Any required element that
    /// cannot be located aborts the pass; only ad removal is best-effort.
    pub async fn run(&self, values: &InvoiceValues) -> Result<RunResult> {
        let start = Instant::now();
        info!("Navigating to: {}", self.options.target_url);
        self.session
            .driver()
            .goto(self.options.target_url.as_str())
            .await?;

        let (fields_set, rows_removed) =
            filler::fill(self.session.driver(), values, &self.options).await?;

        Ok(RunResult {
            fields_set,
            rows_removed,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Quit the browser. Must be called on every exit path.
    pub async fn quit(self) -> Result<()> {
        self.session.quit().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RunOptions::default();
        assert_eq!(options.target_url, "https://facturas.ws/");
        assert_eq!(options.locale, Locale::es_ES);
    }
}
