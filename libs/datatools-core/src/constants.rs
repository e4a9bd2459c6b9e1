//! Constants for date parsing and period defaults

use chrono::NaiveDate;

/// Day-first dotted format, tried first when parsing text dates
pub const DATE_FORMAT_DOTTED: &str = "%d.%m.%Y";

/// ISO 8601 calendar date format
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";

/// Text date formats in the order they are attempted
pub const TEXT_DATE_FORMATS: &[&str] = &[DATE_FORMAT_DOTTED, DATE_FORMAT_ISO];

/// Sentinel token for an open-ended period end
pub const INFINITY_TOKEN: &str = "infinity";

/// Year, month and day of the far-future date standing in for "infinity"
pub const INFINITY_YMD: (i32, u32, u32) = (9999, 12, 31);

/// Default start of an unbounded reporting range
pub const DEFAULT_BEGIN_YMD: (i32, u32, u32) = (1970, 1, 1);

/// Default end of an unbounded reporting range
pub const DEFAULT_END_YMD: (i32, u32, u32) = (2070, 12, 31);

/// Quarter labels, indexed by zero-based quarter number
pub const QUARTER_NAMES: [&str; 4] = ["I", "II", "III", "IV"];

/// The far-future date used for open-ended ranges (9999-12-31)
#[must_use]
pub fn far_future_date() -> NaiveDate {
    date_from_ymd(INFINITY_YMD)
}

/// Default start of an unbounded reporting range (1970-01-01)
#[must_use]
pub fn default_begin_date() -> NaiveDate {
    date_from_ymd(DEFAULT_BEGIN_YMD)
}

/// Default end of an unbounded reporting range (2070-12-31)
#[must_use]
pub fn default_end_date() -> NaiveDate {
    date_from_ymd(DEFAULT_END_YMD)
}

// Only called with the valid calendar constants above.
fn date_from_ymd((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_formats_order() {
        assert_eq!(TEXT_DATE_FORMATS.len(), 2);
        assert_eq!(TEXT_DATE_FORMATS[0], "%d.%m.%Y");
        assert_eq!(TEXT_DATE_FORMATS[1], "%Y-%m-%d");
    }

    #[test]
    fn test_infinity_constants() {
        assert_eq!(INFINITY_TOKEN, "infinity");
        assert_eq!(INFINITY_YMD, (9999, 12, 31));
    }

    #[test]
    fn test_default_range_constants() {
        assert_eq!(DEFAULT_BEGIN_YMD, (1970, 1, 1));
        assert_eq!(DEFAULT_END_YMD, (2070, 12, 31));
    }

    #[test]
    fn test_constant_dates() {
        assert_eq!(far_future_date().to_string(), "9999-12-31");
        assert_eq!(default_begin_date().to_string(), "1970-01-01");
        assert_eq!(default_end_date().to_string(), "2070-12-31");
    }

    #[test]
    fn test_quarter_names() {
        assert_eq!(QUARTER_NAMES, ["I", "II", "III", "IV"]);
    }
}
