//! Calendar period boundaries
//!
//! Start and end dates of the month, quarter, half-year and year containing a
//! given date. Every boundary is reached by replacing the day or month field
//! of a date inside the same year, so no function here can step past the
//! representable date range.

use chrono::{Datelike, Duration, NaiveDate};

/// Candidate month lengths, longest first
const MONTH_LENGTHS: [u32; 4] = [31, 30, 29, 28];

/// First day of the month containing `date`
#[must_use]
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Last day of the month containing `date`
#[must_use]
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    // Every month has a 28th, so the search always succeeds.
    MONTH_LENGTHS
        .into_iter()
        .find_map(|day| date.with_day(day))
        .unwrap_or(date)
}

/// First day of the year containing `date`
#[must_use]
pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.ordinal0()))
}

/// December 31st of the year containing `date`
#[must_use]
pub fn end_of_year(date: NaiveDate) -> NaiveDate {
    end_of_span(start_of_year(date), 12)
}

/// First day of the quarter containing `date` (Jan 1, Apr 1, Jul 1 or Oct 1)
#[must_use]
pub fn start_of_quarter(date: NaiveDate) -> NaiveDate {
    start_of_span(date, 3)
}

/// Last day of the quarter containing `date`
#[must_use]
pub fn end_of_quarter(date: NaiveDate) -> NaiveDate {
    end_of_span(start_of_quarter(date), 3)
}

/// First day of the half-year containing `date` (Jan 1 or Jul 1)
#[must_use]
pub fn start_of_half_year(date: NaiveDate) -> NaiveDate {
    start_of_span(date, 6)
}

/// Last day of the half-year containing `date` (Jun 30 or Dec 31)
#[must_use]
pub fn end_of_half_year(date: NaiveDate) -> NaiveDate {
    end_of_span(start_of_half_year(date), 6)
}

/// First day of the month preceding the one containing `date`
///
/// Returns `None` for the first month of the representable range.
#[must_use]
pub fn start_of_prev_month(date: NaiveDate) -> Option<NaiveDate> {
    start_of_month(date).pred_opt().map(start_of_month)
}

/// Whether `date` is the first day of its month
#[must_use]
pub fn is_first_month_day(date: NaiveDate) -> bool {
    date.day() == 1
}

/// Whether `date` is the last day of its month
#[must_use]
pub fn is_last_month_day(date: NaiveDate) -> bool {
    date == end_of_month(date)
}

/// Number of days in the given month, or `None` if the month does not exist
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month, 1).map(|first| end_of_month(first).day())
}

/// Walk back month by month until the month index is a multiple of `span`.
fn start_of_span(date: NaiveDate, span: u32) -> NaiveDate {
    let mut start = start_of_month(date);
    for _ in 0..date.month0() % span {
        start = start_of_month(start - Duration::days(1));
    }
    start
}

/// Last day of the `span`-month period starting at the month-aligned `start`.
fn end_of_span(start: NaiveDate, span: u32) -> NaiveDate {
    // The start is a first day, so moving to a later month of its year is valid.
    start
        .with_month(start.month() + span - 1)
        .map_or(start, end_of_month)
}
