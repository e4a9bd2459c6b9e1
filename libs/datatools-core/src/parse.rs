//! Parsing boundary for date inputs
//!
//! All text and integer date representations are converted to
//! [`NaiveDate`] here, before any period arithmetic sees them.
//!
//! Text dates are tried as `DD.MM.YYYY` first and as `YYYY-MM-DD` second.
//! Integer dates use the compact `YYYYMMDD` layout.

use chrono::NaiveDate;
use tracing::trace;

use crate::constants::{far_future_date, DATE_FORMAT_ISO, INFINITY_TOKEN, TEXT_DATE_FORMATS};
use crate::error::{DatatoolsError, Result};

/// A date as supplied by a caller, before it has been normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Already a calendar date
    Date(NaiveDate),
    /// `DD.MM.YYYY` or `YYYY-MM-DD`
    Text(String),
    /// `YYYYMMDD`, e.g. `20240131`
    Compact(i64),
}

impl DateInput {
    /// Convert the input to a calendar date
    ///
    /// # Errors
    /// Returns `DatatoolsError::Parse` if the text or integer does not encode a valid date
    pub fn resolve(&self) -> Result<NaiveDate> {
        match self {
            Self::Date(date) => Ok(*date),
            Self::Text(text) => parse_date(text),
            Self::Compact(value) => parse_compact(*value),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        Self::Compact(value)
    }
}

/// Parse a text date, trying `DD.MM.YYYY` before `YYYY-MM-DD`
///
/// # Errors
/// Returns `DatatoolsError::Parse` if the string matches neither format
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    let mut last_error = None;
    for format in TEXT_DATE_FORMATS {
        match NaiveDate::parse_from_str(date_str, format) {
            Ok(date) => return Ok(date),
            Err(e) => {
                trace!(input = date_str, format, "date format did not match");
                last_error = Some(e);
            }
        }
    }
    Err(DatatoolsError::parse(
        date_str,
        last_error.map_or_else(|| "no date formats configured".to_string(), |e| e.to_string()),
    ))
}

/// Parse a compact `YYYYMMDD` integer date
///
/// # Errors
/// Returns `DatatoolsError::Parse` if the integer is negative or its fields do
/// not form a valid calendar date
pub fn parse_compact(value: i64) -> Result<NaiveDate> {
    if value < 0 {
        return Err(DatatoolsError::parse(value.to_string(), "negative compact date"));
    }
    let year = i32::try_from(value / 10_000)
        .map_err(|_| DatatoolsError::parse(value.to_string(), "year out of range"))?;
    // Both fields are below 100 after the modulo.
    let month = (value / 100 % 100) as u32;
    let day = (value % 100) as u32;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        DatatoolsError::parse(value.to_string(), "fields do not form a calendar date")
    })
}

/// Resolve an open-ended period end
///
/// An absent value or the literal `"infinity"` maps to 9999-12-31; anything
/// else must be a `YYYY-MM-DD` date.
///
/// # Errors
/// Returns `DatatoolsError::Parse` if the value is neither the sentinel nor an ISO date
pub fn infinity_date(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        None => Ok(far_future_date()),
        Some(token) if token == INFINITY_TOKEN => Ok(far_future_date()),
        Some(text) => NaiveDate::parse_from_str(text, DATE_FORMAT_ISO)
            .map_err(|e| DatatoolsError::parse(text, e.to_string())),
    }
}
