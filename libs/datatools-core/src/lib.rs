//! Datatools Core - Calendar period arithmetic for reporting
//!
//! This library computes calendar period boundaries, classifies date ranges
//! against a fixed set of period kinds, and splits arbitrary ranges into the
//! pieces that can be served from monthly aggregates versus raw daily data.
//!
//! # Features
//!
//! - **Period boundaries**: start and end of month, quarter, half-year and year
//! - **Classification**: day, week, month, quarter, half-year, year or other
//! - **Month arithmetic**: day-clamping month shifts and month counting
//! - **Aggregate splitting**: left / center / right sub-ranges for reports
//! - **Parsing boundary**: `DD.MM.YYYY`, `YYYY-MM-DD` and `YYYYMMDD` inputs
//!
//! # Quick Start
//!
//! ```
//! use datatools_core::{split, DateRange, PeriodKind};
//!
//! # fn example() -> Result<(), datatools_core::DatatoolsError> {
//! let range = DateRange::parse("15.01.2024", "2024-03-10")?;
//! assert_eq!(PeriodKind::classify(&range), PeriodKind::Other);
//!
//! let parts = split(&range);
//! for part in parts.parts() {
//!     println!("{part}");
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod aggregate;
pub mod boundaries;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod parse;
pub mod period;
pub mod range;
pub mod shift;

pub use aggregate::{split, split_optional, AggregateSplit};
pub use boundaries::{
    days_in_month, end_of_half_year, end_of_month, end_of_quarter, end_of_year,
    is_first_month_day, is_last_month_day, start_of_half_year, start_of_month,
    start_of_prev_month, start_of_quarter, start_of_year,
};
pub use config::DatatoolsConfig;
pub use error::{DatatoolsError, Result};
pub use logging::init_logging;
pub use parse::{infinity_date, parse_compact, parse_date, DateInput};
pub use period::{
    is_eq_month, is_eq_two_month, is_eq_year, is_full_month, is_period_day, is_period_half_year,
    is_period_month, is_period_other, is_period_quarter, is_period_week, is_period_year,
    period_start, quarter_name, PeriodKind,
};
pub use range::DateRange;
pub use shift::{
    current_dot_position, days_ago, in_current_period, month_shift_delta, months_between,
    previous_period_date, shift_by_months,
};
