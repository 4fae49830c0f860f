/// Date helpers shared by record types
///
/// Record dates stamped by the dashboard are shown the British way.
use chrono::NaiveDate;

/// Display format of "updated" columns, e.g. "15/06/2023"
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Seed-data helper: a fixed calendar date
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        assert_eq!(
            ymd(2023, 6, 15).format(DISPLAY_DATE_FORMAT).to_string(),
            "15/06/2023"
        );
    }

    #[test]
    fn test_invalid_date_falls_back() {
        assert_eq!(ymd(2023, 2, 30), NaiveDate::default());
    }
}
