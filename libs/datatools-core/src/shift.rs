//! Month shifting and dates relative to other dates

use chrono::{Datelike, Days, Duration, Months, NaiveDate, Utc};

use crate::boundaries::{days_in_month, end_of_month};
use crate::error::{DatatoolsError, Result};
use crate::period::PeriodKind;
use crate::range::DateRange;

/// Shift `date` by whole months, clamping the day to the target month's length
///
/// `2024-01-31` shifted by one month is `2024-02-29`. Returns `None` only if
/// the result falls outside the representable date range.
#[must_use]
pub fn shift_by_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    }
}

/// Count the month-length steps that fit between two dates
///
/// The earlier date is advanced by the length of the *later* date's month,
/// looked up in the cursor's year, and every step that stays on or before the
/// later date counts. The month used for the length never changes during the
/// walk, so the count can differ from plain calendar month subtraction.
#[must_use]
pub fn months_between(a: NaiveDate, b: NaiveDate) -> u32 {
    let (mut cursor, later) = if a > b { (b, a) } else { (a, b) };
    let mut count = 0;
    while let Some(next) = days_in_month(cursor.year(), later.month())
        .and_then(|month_days| cursor.checked_add_days(Days::new(u64::from(month_days))))
        .filter(|next| *next <= later)
    {
        cursor = next;
        count += 1;
    }
    count
}

/// The date `days` days before `date` (after it, for negative `days`)
///
/// Returns `None` if the result leaves the representable date range.
#[must_use]
pub fn days_ago(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let offset = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_sub_days(offset)
    } else {
        date.checked_add_days(offset)
    }
}

/// Days to add to `date` to land on the day before `shift_by_months(date, months)`
#[must_use]
pub fn month_shift_delta(date: NaiveDate, months: i32) -> Option<Duration> {
    shift_by_months(date, months).map(|shifted| shifted - date - Duration::days(1))
}

/// The date one quantum before `date`
///
/// A `Day` quantum steps back one day. Any other quantum steps back by the
/// length of `date`'s month; when that overshoots a short month entirely the
/// result is pulled forward to the same day of the previous month. Returns
/// `None` if the step leaves the representable date range.
#[must_use]
pub fn previous_period_date(date: NaiveDate, quantum: PeriodKind) -> Option<NaiveDate> {
    let step = if quantum == PeriodKind::Day {
        1
    } else {
        end_of_month(date).day()
    };
    let stepped = date.checked_sub_days(Days::new(u64::from(step)))?;

    if i64::from(date.month()) - i64::from(stepped.month()) == 2 {
        shift_by_months(date, -1).or(Some(stepped))
    } else {
        Some(stepped)
    }
}

/// The day in a past period that corresponds to `today`
///
/// The month is offset from `period_begin` by as many months as `today` is
/// past `analysis_begin`; the day is `today`'s day, clamped to that month.
///
/// # Errors
/// Returns `DatatoolsError::InvalidArgument` if the resulting month leaves the
/// year of `period_begin`
pub fn current_dot_position(
    period_begin: NaiveDate,
    analysis_begin: NaiveDate,
    today: NaiveDate,
) -> Result<NaiveDate> {
    let month = i64::from(period_begin.month()) + i64::from(today.month())
        - i64::from(analysis_begin.month());
    let month = u32::try_from(month)
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(|| {
            DatatoolsError::invalid_argument(format!(
                "month offset {month} falls outside the year of {period_begin}"
            ))
        })?;

    let max_day = days_in_month(period_begin.year(), month).ok_or_else(|| {
        DatatoolsError::invalid_argument(format!("no month {month} in {}", period_begin.year()))
    })?;
    NaiveDate::from_ymd_opt(period_begin.year(), month, today.day().min(max_day)).ok_or_else(
        || DatatoolsError::invalid_argument(format!("no dot position in month {month}")),
    )
}

/// Whether today's UTC date falls inside the range
#[must_use]
pub fn in_current_period(range: &DateRange) -> bool {
    range.contains(Utc::now().date_naive())
}
