//! Aggregate range splitting
//!
//! Reports over long ranges read whole months from monthly pre-aggregated
//! data and only the ragged edges from raw daily data. [`split`] cuts a range
//! into those pieces:
//!
//! - `left`: the partial month at the start of the range
//! - `center`: the whole months in the middle
//! - `right`: the partial month at the end of the range
//!
//! The present parts are contiguous, do not overlap, and together cover the
//! input range exactly.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use datatools_core::{split, DateRange};
//!
//! let date = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
//! let parts = split(&DateRange::new(date(1, 15), date(3, 10)));
//!
//! assert_eq!(parts.left, Some(DateRange::new(date(1, 15), date(1, 31))));
//! assert_eq!(parts.center, Some(DateRange::new(date(2, 1), date(2, 29))));
//! assert_eq!(parts.right, Some(DateRange::new(date(3, 1), date(3, 10))));
//! ```

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::boundaries::{end_of_month, start_of_month};
use crate::period::is_eq_month;
use crate::range::DateRange;

/// Up to three sub-ranges of a split range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateSplit {
    /// Partial leading month, read from raw data
    pub left: Option<DateRange>,
    /// Whole months, read from monthly aggregates
    pub center: Option<DateRange>,
    /// Partial trailing month, read from raw data
    pub right: Option<DateRange>,
}

impl AggregateSplit {
    /// No part is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.center.is_none() && self.right.is_none()
    }

    /// The present parts in calendar order
    pub fn parts(&self) -> impl Iterator<Item = DateRange> {
        [self.left, self.center, self.right].into_iter().flatten()
    }
}

/// Split a range into left, center and right parts
#[must_use]
#[instrument(level = "debug", skip(range), fields(range = %range))]
pub fn split(range: &DateRange) -> AggregateSplit {
    let (left, center_begin) = left_part(range);
    let (center_end, right) = right_part(range, left.map(|part| part.end));

    let center = match (center_begin, center_end) {
        (Some(begin), Some(end)) if begin <= end => Some(DateRange::new(begin, end)),
        _ => None,
    };

    let parts = AggregateSplit {
        left,
        center,
        right,
    };
    debug!(
        left = ?parts.left,
        center = ?parts.center,
        right = ?parts.right,
        "split range for aggregates"
    );
    parts
}

/// Split a range whose endpoints may be missing
///
/// A missing endpoint yields an empty split.
#[must_use]
pub fn split_optional(begin: Option<NaiveDate>, end: Option<NaiveDate>) -> AggregateSplit {
    match (begin, end) {
        (Some(begin), Some(end)) => split(&DateRange::new(begin, end)),
        _ => AggregateSplit::default(),
    }
}

/// Left part of the range and the first day of the center part.
fn left_part(range: &DateRange) -> (Option<DateRange>, Option<NaiveDate>) {
    let DateRange { begin, end } = *range;
    let left_end = end.min(end_of_month(begin));

    if begin != start_of_month(begin) {
        let center_begin = (left_end != end).then(|| left_end + Duration::days(1));
        (Some(DateRange::new(begin, left_end)), center_begin)
    } else if is_eq_month(range) {
        (None, Some(begin))
    } else {
        (None, None)
    }
}

/// Last day of the center part and the right part of the range.
///
/// `left_end` keeps the right part from repeating a left part that already
/// reaches the end of the range.
fn right_part(
    range: &DateRange,
    left_end: Option<NaiveDate>,
) -> (Option<NaiveDate>, Option<DateRange>) {
    let DateRange { begin, end } = *range;
    if left_end == Some(end) {
        return (None, None);
    }

    let right_begin = start_of_month(end);
    if end_of_month(end) != end {
        let center_end = (right_begin != begin).then(|| right_begin - Duration::days(1));
        (center_end, Some(DateRange::new(right_begin, end)))
    } else if is_eq_month(range) {
        (Some(end), None)
    } else {
        (None, None)
    }
}
