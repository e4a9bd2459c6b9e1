//! Period classification and comparison
//!
//! Predicates that decide whether a [`DateRange`] is exactly one of the fixed
//! period kinds, plus the looser comparisons used to pick between monthly
//! aggregates and raw daily data. Every predicate is total: a range that does
//! not match returns `false`, including ranges whose `begin` is after `end`.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::boundaries::{
    end_of_half_year, end_of_month, end_of_quarter, end_of_year, is_first_month_day,
    is_last_month_day, start_of_half_year, start_of_month, start_of_quarter, start_of_year,
};
use crate::constants::QUARTER_NAMES;
use crate::error::DatatoolsError;
use crate::range::DateRange;

/// Months a quarter may start in
const QUARTER_START_MONTHS: [u32; 4] = [1, 4, 7, 10];

/// Months a half-year may start in
const HALF_YEAR_START_MONTHS: [u32; 2] = [1, 7];

/// Offset used by [`is_eq_two_month`]
const TWO_MONTH_OFFSET_DAYS: i64 = 30;

/// Calendar granularity of a date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Day,
    Week,
    Month,
    Quarter,
    HalfYear,
    Year,
    Other,
}

impl PeriodKind {
    /// All kinds, finest first
    pub const ALL: [Self; 7] = [
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Quarter,
        Self::HalfYear,
        Self::Year,
        Self::Other,
    ];

    /// Classify a range as the finest period kind it matches
    #[must_use]
    pub fn classify(range: &DateRange) -> Self {
        if is_period_day(range) {
            Self::Day
        } else if is_period_week(range) {
            Self::Week
        } else if is_period_month(range) {
            Self::Month
        } else if is_period_quarter(range) {
            Self::Quarter
        } else if is_period_half_year(range) {
            Self::HalfYear
        } else if is_period_year(range) {
            Self::Year
        } else {
            Self::Other
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::HalfYear => "halfyear",
            Self::Year => "year",
            Self::Other => "other",
        }
    }

    /// The period of this kind anchored at `date`
    ///
    /// Days and weeks start at `date` itself; month, quarter, half-year and
    /// year are the calendar periods containing `date`. `Other` has no bounds,
    /// and neither does a week running past the representable date range.
    #[must_use]
    pub fn bounds(self, date: NaiveDate) -> Option<DateRange> {
        let range = match self {
            Self::Day => DateRange::day(date),
            Self::Week => DateRange::new(date, date.checked_add_signed(Duration::days(6))?),
            Self::Month => DateRange::new(start_of_month(date), end_of_month(date)),
            Self::Quarter => DateRange::new(start_of_quarter(date), end_of_quarter(date)),
            Self::HalfYear => DateRange::new(start_of_half_year(date), end_of_half_year(date)),
            Self::Year => DateRange::new(start_of_year(date), end_of_year(date)),
            Self::Other => return None,
        };
        Some(range)
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodKind {
    type Err = DatatoolsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DatatoolsError::invalid_argument(format!("unknown period kind: {s}")))
    }
}

/// The range from the start of the month (or year) containing `date` up to `date`
///
/// Only month and year kinds have a leading boundary; every other kind
/// yields `None`.
#[must_use]
pub fn period_start(date: NaiveDate, kind: PeriodKind) -> Option<DateRange> {
    match kind {
        PeriodKind::Month => Some(DateRange::new(start_of_month(date), date)),
        PeriodKind::Year => Some(DateRange::new(start_of_year(date), date)),
        _ => None,
    }
}

/// Single day: `begin == end`
#[must_use]
pub fn is_period_day(range: &DateRange) -> bool {
    range.begin == range.end
}

/// Less than seven days apart with a non-decreasing weekday (Monday first)
///
/// This is a partial-week alignment check, not an ISO calendar week check.
#[must_use]
pub fn is_period_week(range: &DateRange) -> bool {
    range.end - range.begin < Duration::days(7)
        && range.begin.weekday().num_days_from_monday()
            <= range.end.weekday().num_days_from_monday()
}

/// Exactly one calendar month
#[must_use]
pub fn is_period_month(range: &DateRange) -> bool {
    is_month_aligned(range)
        && range.begin.month() == range.end.month()
        && range.begin.year() == range.end.year()
}

/// Exactly one calendar quarter
#[must_use]
pub fn is_period_quarter(range: &DateRange) -> bool {
    is_month_aligned(range)
        && QUARTER_START_MONTHS.contains(&range.begin.month())
        && range.begin.month() + 2 == range.end.month()
        && range.begin.year() == range.end.year()
}

/// Exactly one calendar half-year
#[must_use]
pub fn is_period_half_year(range: &DateRange) -> bool {
    is_month_aligned(range)
        && HALF_YEAR_START_MONTHS.contains(&range.begin.month())
        && range.begin.month() + 5 == range.end.month()
        && range.begin.year() == range.end.year()
}

/// Exactly one calendar year
#[must_use]
pub fn is_period_year(range: &DateRange) -> bool {
    range.begin == start_of_year(range.begin)
        && range.end == end_of_year(range.end)
        && range.begin.year() == range.end.year()
}

/// Spans at least one day boundary
#[must_use]
pub fn is_period_other(range: &DateRange) -> bool {
    range.end - range.begin >= Duration::days(1)
}

/// Starts on a first day and ends on a last day, in any months
#[must_use]
pub fn is_full_month(range: &DateRange) -> bool {
    start_of_month(range.begin).day() == range.begin.day()
        && end_of_month(range.end).day() == range.end.day()
}

/// Starts on January 1st and ends on December 31st, in any years
#[must_use]
pub fn is_eq_year(range: &DateRange) -> bool {
    range.begin == start_of_year(range.begin) && range.end == end_of_year(range.end)
}

/// Whether the range can be answered from monthly aggregates
///
/// True when the range is exactly one month, when `begin` lies earlier than
/// the start of the end's month by more than the length of the begin's month,
/// or when one edge sits on a month border and the other crosses into a
/// different month.
#[must_use]
pub fn is_eq_month(range: &DateRange) -> bool {
    let DateRange { begin, end } = *range;
    let end_month_start = start_of_month(end);
    let begin_month_end = end_of_month(begin);

    let is_border_period = (begin < end_month_start && is_last_month_day(end))
        || (is_first_month_day(begin) && end > begin_month_end);

    (begin == end_month_start && begin_month_end == end)
        || end_month_start
            .checked_sub_signed(Duration::days(i64::from(begin_month_end.day()) - 1))
            .is_some_and(|threshold| begin < threshold)
        || is_border_period
}

/// Whether `begin + 30 days` is the first day of the end's month
///
/// The fixed 30-day offset does not follow month lengths; callers depend on
/// this exact threshold.
#[must_use]
pub fn is_eq_two_month(range: &DateRange) -> bool {
    range
        .begin
        .checked_add_signed(Duration::days(TWO_MONTH_OFFSET_DAYS))
        .is_some_and(|shifted| shifted == start_of_month(range.end))
}

/// Roman numeral of the quarter containing `date`
#[must_use]
pub fn quarter_name(date: NaiveDate) -> &'static str {
    QUARTER_NAMES[(date.month0() / 3) as usize]
}

fn is_month_aligned(range: &DateRange) -> bool {
    range.begin == start_of_month(range.begin) && range.end == end_of_month(range.end)
}
