//! # facturas-runner
//!
//! Fills out and submits the facturas.ws invoice form from a JSON values
//! file, driving a real browser over WebDriver.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use facturas_runner::{InvoiceValues, Runner, Session, SessionConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> facturas_runner::Result<()> {
//! let values = InvoiceValues::load("invoice_values.json")?;
//! let session = Session::connect(&SessionConfig::default()).await?;
//! let runner = Runner::new(session);
//! let result = runner.run(&values).await;
//! runner.quit().await?;
//! println!("Fields set: {}", result?.fields_set);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dates;
mod runner;
pub mod session;

pub use config::InvoiceValues;
pub use runner::{RunOptions, RunResult, Runner, DEFAULT_TARGET_URL};
pub use session::{Backend, NoBrowserAvailableError, Session, SessionConfig};

/// Result type for facturas-runner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading values or driving the form.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("webdriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error(transparent)]
    NoBrowserAvailable(#[from] NoBrowserAvailableError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_values_json() -> String {
        r#"{
            "client_name": "Acme S.L.",
            "client_address": "Calle Mayor 1",
            "client_province": "Madrid",
            "client_city": "Madrid",
            "client_country": "ES",
            "my_name": "Jane Roe",
            "my_address": "Gran Via 22",
            "my_city": "Valencia",
            "my_province": "Valencia",
            "my_country": "ES",
            "my_position": "Developer",
            "my_area": "Engineering",
            "fee": "1500.00",
            "vat": "21",
            "currency": "EUR"
        }"#
        .to_string()
    }

    #[test]
    fn test_parse_full_values() {
        let values = InvoiceValues::parse(&full_values_json()).unwrap();
        assert_eq!(values.client_name, "Acme S.L.");
        assert_eq!(values.client_country, "ES");
        assert_eq!(values.my_position, "Developer");
        assert_eq!(values.fee, "1500.00");
        assert_eq!(values.vat, "21");
        assert_eq!(values.currency, "EUR");
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let json = full_values_json().replace("\"client_name\": \"Acme S.L.\",", "");
        let result = InvoiceValues::parse(&json);
        match result {
            Err(Error::Json(e)) => {
                assert!(e.to_string().contains("client_name"));
            }
            other => panic!("Expected Json error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_value_is_fatal() {
        let json = full_values_json().replace("\"21\"", "\"\"");
        let result = InvoiceValues::parse(&json);
        match result {
            Err(Error::Config(msg)) => {
                assert!(msg.contains("vat"), "message should name the key: {}", msg);
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_whitespace_value_is_fatal() {
        let json = full_values_json().replace("\"EUR\"", "\"   \"");
        let result = InvoiceValues::parse(&json);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_malformed_document_is_fatal() {
        let result = InvoiceValues::parse("{ not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let result = InvoiceValues::load("does/not/exist.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_example_values() {
        let values = InvoiceValues::load("configs/invoice_values.json").unwrap();
        assert!(!values.client_name.is_empty());
        assert!(!values.currency.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let json = full_values_json().replace(
            "\"currency\": \"EUR\"",
            "\"currency\": \"EUR\", \"legacy_field\": \"x\"",
        );
        let values = InvoiceValues::parse(&json).unwrap();
        assert_eq!(values.currency, "EUR");
    }
}
