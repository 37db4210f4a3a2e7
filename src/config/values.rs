use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// The invoice values document: one flat JSON object, string keys to string
/// values, loaded once per run. Field names match the keys of
/// `invoice_values.json`; `my_*` fields describe the issuer, `client_*` the
/// recipient. Country codes and the currency are option values on the form's
/// select controls, not display names.
///
/// Every field is required and must be non-empty. There is no defaulting: a
/// missing or blank value is a fatal configuration error raised before any
/// browser is launched.
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceValues {
    pub client_name: String,
    pub client_address: String,
    pub client_province: String,
    pub client_city: String,
    pub client_country: String,

    pub my_name: String,
    pub my_address: String,
    pub my_city: String,
    pub my_province: String,
    pub my_country: String,

    /// Issuer's position, first segment of the generated product description.
    pub my_position: String,
    /// Issuer's area, second segment of the generated product description.
    pub my_area: String,

    pub fee: String,
    pub vat: String,
    pub currency: String,
}

impl InvoiceValues {
    /// Load values from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse values from a JSON string.
    pub fn parse(json: &str) -> Result<Self> {
        let values: InvoiceValues = serde_json::from_str(json)?;
        values.validate()?;
        Ok(values)
    }

    fn validate(&self) -> Result<()> {
        for (key, value) in self.fields() {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("value for '{}' is empty", key)));
            }
        }
        Ok(())
    }

    /// All (key, value) pairs, in form-fill order.
    pub fn fields(&self) -> [(&'static str, &str); 15] {
        [
            ("client_name", &self.client_name),
            ("client_address", &self.client_address),
            ("client_province", &self.client_province),
            ("client_city", &self.client_city),
            ("client_country", &self.client_country),
            ("my_name", &self.my_name),
            ("my_address", &self.my_address),
            ("my_city", &self.my_city),
            ("my_province", &self.my_province),
            ("my_country", &self.my_country),
            ("my_position", &self.my_position),
            ("my_area", &self.my_area),
            ("fee", &self.fee),
            ("vat", &self.vat),
            ("currency", &self.currency),
        ]
    }
}
