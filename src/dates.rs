//! Computed invoice fields: the due date and the generated product
//! description. Both are pure functions over an injected date and an
//! explicit formatting locale, so runs never depend on process-global
//! locale state.

use chrono::{Datelike, Locale, NaiveDate};

/// Last calendar day of `date`'s month.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let first_of_next = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    match first_of_next.and_then(|d| d.pred_opt()) {
        Some(d) => d,
        // only reachable at the edge of chrono's supported year range
        None => date,
    }
}

/// Invoice due date: last day of the current month, as `MM/DD/YYYY`
/// (the format the form's date field expects).
pub fn due_date(today: NaiveDate) -> String {
    last_day_of_month(today).format("%m/%d/%Y").to_string()
}

/// Product description: position, area and the current "month year" label,
/// joined with hyphens. The month name follows `locale`, e.g. "enero 2024"
/// under `es_ES`.
pub fn product_description(
    position: &str,
    area: &str,
    today: NaiveDate,
    locale: Locale,
) -> String {
    let month_label = today.format_localized("%B %Y", locale);
    format!("{}-{}-{}", position, area, month_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_due_date_thirty_day_month() {
        assert_eq!(due_date(date(2024, 4, 1)), "04/30/2024");
        assert_eq!(due_date(date(2024, 4, 30)), "04/30/2024");
    }

    #[test]
    fn test_due_date_leap_february() {
        assert_eq!(due_date(date(2024, 2, 10)), "02/29/2024");
    }

    #[test]
    fn test_due_date_plain_february() {
        assert_eq!(due_date(date(2023, 2, 10)), "02/28/2023");
    }

    #[test]
    fn test_due_date_december_rollover() {
        assert_eq!(due_date(date(2024, 12, 5)), "12/31/2024");
    }

    #[test]
    fn test_product_description_english() {
        let desc = product_description("Developer", "Engineering", date(2024, 3, 15), Locale::en_US);
        assert_eq!(desc, "Developer-Engineering-March 2024");
    }

    #[test]
    fn test_product_description_spanish() {
        let desc = product_description("Developer", "Engineering", date(2024, 1, 15), Locale::es_ES);
        assert_eq!(desc, "Developer-Engineering-enero 2024");
    }
}
