//! CSS locators for the facturas.ws form, keyed on semantic attributes
//! (`name`, `id`, `data-*`) rather than structural position, so unrelated
//! markup churn on the page does not break the fill pass.

pub const DUE_DATE: &str = "input[name='date_due']";

pub const CLIENT_NAME: &str = "input[name='client_name']";
pub const CLIENT_ADDRESS: &str = "textarea[name='client_address']";
pub const CLIENT_PROVINCE: &str = "input[name='client_province']";
pub const CLIENT_CITY: &str = "input[name='client_city']";
pub const CLIENT_COUNTRY: &str = "select[name='client_country']";

pub const MY_NAME: &str = "input[name='my_name']";
pub const MY_ADDRESS: &str = "textarea[name='my_address']";
pub const MY_CITY: &str = "input[name='my_city']";
pub const MY_PROVINCE: &str = "input[name='my_province']";
pub const MY_COUNTRY: &str = "select[name='my_country']";

/// Line-item rows inside the items container.
pub const ITEM_ROWS: &str = "#invoice-items > div";
/// Stable row-index attribute; the row carrying [`FIRST_ROW_INDEX`] is kept.
pub const ROW_INDEX_ATTR: &str = "data-divid";
pub const FIRST_ROW_INDEX: &str = "1";
/// Remove control within a row; hidden until forced visible.
pub const ROW_REMOVE: &str = ".remove-row";

pub const ITEM_DESCRIPTION: &str = "textarea[name='description']";
pub const ITEM_FEE: &str = "input[name='fee']";
pub const VAT: &str = "input[name='vat']";
pub const CURRENCY: &str = "select[name='currency']";

pub const SUBMIT: &str = "#download-invoice";

/// Injected ad containers; removal is best-effort.
pub const AD_CONTAINERS: &str = "ins.adsbygoogle, div.publi, iframe[id^='aswift']";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_locators_are_attribute_based() {
        let fields = [
            DUE_DATE,
            CLIENT_NAME,
            CLIENT_ADDRESS,
            CLIENT_PROVINCE,
            CLIENT_CITY,
            CLIENT_COUNTRY,
            MY_NAME,
            MY_ADDRESS,
            MY_CITY,
            MY_PROVINCE,
            MY_COUNTRY,
            ITEM_DESCRIPTION,
            ITEM_FEE,
            VAT,
            CURRENCY,
        ];
        for locator in fields {
            assert!(
                locator.contains("[name="),
                "{} should match on a name attribute",
                locator
            );
        }
    }
}
