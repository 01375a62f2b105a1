use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Display format used for record dates, e.g. "3 Jan 2024"
const DISPLAY_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[day padding:none] [month repr:short] [year]");

/// Format a calendar day to the fixed display style.
pub fn format_display_date(date: Date) -> String {
    date.format(&DISPLAY_DATE)
        .expect("display date format is well-formed")
}

/// Parse a display-formatted date back to a calendar day.
///
/// Anything that does not match the display style yields `None`.
pub fn parse_display_date(text: &str) -> Option<Date> {
    Date::parse(text.trim(), DISPLAY_DATE).ok()
}

/// Today's date in the display style.
pub fn today_display() -> String {
    format_display_date(OffsetDateTime::now_utc().date())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date(date!(2024 - 01 - 03)), "3 Jan 2024");
        assert_eq!(format_display_date(date!(2023 - 12 - 21)), "21 Dec 2023");
    }

    #[test]
    fn test_parse_display_date() {
        assert_eq!(parse_display_date("3 Jan 2024"), Some(date!(2024 - 01 - 03)));
        assert_eq!(parse_display_date(" 21 Dec 2023 "), Some(date!(2023 - 12 - 21)));
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert_eq!(parse_display_date("2024-01-03"), None);
        assert_eq!(parse_display_date("not a date"), None);
        assert_eq!(parse_display_date(""), None);
    }

    #[test]
    fn test_round_trip() {
        let day = date!(2025 - 11 - 07);
        assert_eq!(parse_display_date(&format_display_date(day)), Some(day));
    }

    #[test]
    fn test_chronological_order_disagrees_with_lexical() {
        // "9 Jan 2024" precedes "10 Feb 2024" chronologically, while the
        // strings sort the other way round
        let earlier = parse_display_date("9 Jan 2024").unwrap();
        let later = parse_display_date("10 Feb 2024").unwrap();
        assert!(earlier < later);
        assert!("10 Feb 2024" < "9 Jan 2024");
    }
}
