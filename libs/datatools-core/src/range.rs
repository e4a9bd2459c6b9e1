//! Date range value type

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DatatoolsError, Result};
use crate::parse::parse_date;

/// An inclusive `[begin, end]` range of calendar dates
///
/// `DateRange::new` does not check the ordering of its endpoints; keeping
/// `begin <= end` is the caller's responsibility. Use [`DateRange::try_new`]
/// where the ordering has to be enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub begin: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    #[must_use]
    pub const fn new(begin: NaiveDate, end: NaiveDate) -> Self {
        Self { begin, end }
    }

    /// Create a range, rejecting `begin > end`
    ///
    /// # Errors
    /// Returns `DatatoolsError::InvalidArgument` if `begin` is after `end`
    pub fn try_new(begin: NaiveDate, end: NaiveDate) -> Result<Self> {
        if begin > end {
            return Err(DatatoolsError::invalid_argument(format!(
                "range begin {begin} is after end {end}"
            )));
        }
        Ok(Self::new(begin, end))
    }

    /// Parse both endpoints with [`parse_date`] and build an ordered range
    ///
    /// # Errors
    /// Returns `DatatoolsError::Parse` if either endpoint is not a date, or
    /// `DatatoolsError::InvalidArgument` if the endpoints are out of order
    pub fn parse(begin: &str, end: &str) -> Result<Self> {
        Self::try_new(parse_date(begin)?, parse_date(end)?)
    }

    /// Single-day range
    #[must_use]
    pub const fn day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.begin <= date && date <= self.end
    }

    /// Number of days covered, both endpoints included
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.begin).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.begin.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

impl From<(NaiveDate, NaiveDate)> for DateRange {
    fn from((begin, end): (NaiveDate, NaiveDate)) -> Self {
        Self::new(begin, end)
    }
}
