/// Utilities for date formatting
///
/// Record dates are stamped from the browser's local clock
use chrono::{Local, NaiveDate};

use super::config::AppConfig;

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a record date as DD/MM/YYYY
/// Example: 2023-06-15 -> "15/06/2023"
pub fn format_date(date: NaiveDate) -> String {
    date.format(AppConfig::DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        assert_eq!(format_date(date), "15/06/2023");
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(format_date(date), "01/12/2024");
    }

    #[test]
    fn test_today_is_formattable() {
        assert_eq!(format_date(today()).len(), 10);
    }
}
