//! The fill procedure: one deterministic pass over the loaded invoice form.
//! Steps run in a fixed order; a required element that cannot be located
//! fails the whole pass through the driver's error. Ad removal is the only
//! best-effort step.

use super::locators;
use super::RunOptions;
use crate::config::InvoiceValues;
use crate::dates;
use crate::Result;
use thirtyfour::components::SelectElement;
use thirtyfour::prelude::*;
use tracing::{debug, info};

/// Fill every field and submit. Returns (fields set, extra rows removed).
pub async fn fill(
    driver: &WebDriver,
    values: &InvoiceValues,
    options: &RunOptions,
) -> Result<(usize, usize)> {
    let today = chrono::Local::now().date_naive();
    let mut fields_set = 0;

    info!("Setting due date");
    set_field(driver, locators::DUE_DATE, &dates::due_date(today)).await?;
    fields_set += 1;

    info!("Filling client fields");
    set_field(driver, locators::CLIENT_NAME, &values.client_name).await?;
    set_field(driver, locators::CLIENT_ADDRESS, &values.client_address).await?;
    set_field(driver, locators::CLIENT_PROVINCE, &values.client_province).await?;
    set_field(driver, locators::CLIENT_CITY, &values.client_city).await?;
    select_option(driver, locators::CLIENT_COUNTRY, &values.client_country).await?;
    fields_set += 5;

    info!("Filling issuer fields");
    set_field(driver, locators::MY_NAME, &values.my_name).await?;
    set_field(driver, locators::MY_ADDRESS, &values.my_address).await?;
    set_field(driver, locators::MY_CITY, &values.my_city).await?;
    set_field(driver, locators::MY_PROVINCE, &values.my_province).await?;
    select_option(driver, locators::MY_COUNTRY, &values.my_country).await?;
    fields_set += 5;

    remove_ads(driver).await;

    info!("Pruning line items");
    let rows_removed = prune_line_items(driver).await?;

    info!("Filling line item");
    let description = dates::product_description(
        &values.my_position,
        &values.my_area,
        today,
        options.locale,
    );
    set_field(driver, locators::ITEM_DESCRIPTION, &description).await?;
    set_field(driver, locators::ITEM_FEE, &values.fee).await?;
    set_field(driver, locators::VAT, &values.vat).await?;
    select_option(driver, locators::CURRENCY, &values.currency).await?;
    fields_set += 4;

    info!("Submitting");
    driver.find(By::Css(locators::SUBMIT)).await?.click().await?;

    Ok((fields_set, rows_removed))
}

/// Locate a text control, clear it and type the value.
async fn set_field(driver: &WebDriver, selector: &str, value: &str) -> Result<()> {
    debug!("fill: {} = '{}'", selector, value);
    let field = driver.find(By::Css(selector)).await?;
    field.clear().await?;
    field.send_keys(value).await?;
    Ok(())
}

/// Activate the option whose value attribute matches `value`.
async fn select_option(driver: &WebDriver, selector: &str, value: &str) -> Result<()> {
    debug!("select: {} = '{}'", selector, value);
    let elem = driver.find(By::Css(selector)).await?;
    let select = SelectElement::new(&elem).await?;
    select.select_by_value(value).await?;
    Ok(())
}

/// Delete injected ad containers. Best-effort: absence or script failure is
/// swallowed, never surfaced.
async fn remove_ads(driver: &WebDriver) {
    let js = format!(
        r#"document.querySelectorAll("{}").forEach(el => el.remove())"#,
        locators::AD_CONTAINERS
    );
    if let Err(e) = driver.execute(&js, Vec::new()).await {
        debug!("Ad removal skipped: {}", e);
    }
}

/// Remove every line-item row except the first. Remove controls are hidden
/// until hover, so each is forced visible with a style override before the
/// click. Returns the number of rows removed.
async fn prune_line_items(driver: &WebDriver) -> Result<usize> {
    let rows = driver.find_all(By::Css(locators::ITEM_ROWS)).await?;
    let mut removed = 0;
    for row in rows {
        let index = row.attr(locators::ROW_INDEX_ATTR).await?;
        if index.as_deref() == Some(locators::FIRST_ROW_INDEX) {
            continue;
        }
        debug!("Removing line item row {:?}", index);
        let remove = row.find(By::Css(locators::ROW_REMOVE)).await?;
        driver
            .execute(
                "arguments[0].style='display: block;'",
                vec![remove.to_json()?],
            )
            .await?;
        remove.click().await?;
        removed += 1;
    }
    Ok(removed)
}
