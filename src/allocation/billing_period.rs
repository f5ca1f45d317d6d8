//! Billing period resolution.
//!
//! Every billing endpoint needs the same month-boundary arithmetic
//! (28-31 day months, leap years, December wraparound). This module is the
//! single place that arithmetic lives, so the rest of the engine only ever
//! sees a validated [`Interval`].

use chrono::NaiveDate;
use chrono::Duration;

use crate::error::{BillingError, BillingResult};
use crate::models::{ChargeRecord, Interval};

/// Resolves a (year, month) selector into the full calendar month.
///
/// # Errors
///
/// Returns `InvalidMonth` if `month` is outside `1..=12`, or `InvalidPeriod`
/// if the year/month combination does not form a valid date.
///
/// # Example
///
/// ```
/// use billing_engine::allocation::resolve_calendar_month;
///
/// let feb = resolve_calendar_month(2024, 2).unwrap();
/// assert_eq!(feb.days(), 29); // leap year
/// ```
pub fn resolve_calendar_month(year: i32, month: u32) -> BillingResult<Interval> {
    if !(1..=12).contains(&month) {
        return Err(BillingError::InvalidMonth { month });
    }

    let first_day =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| BillingError::InvalidPeriod {
            message: format!("no such month: {}-{:02}", year, month),
        })?;

    // Last day = first day of the next month minus one day; December rolls
    // into January of the following year.
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(|| {
        BillingError::InvalidPeriod {
            message: format!("no such month: {}-{:02}", next_year, next_month),
        }
    })? - Duration::days(1);

    Interval::new(first_day, last_day)
}

/// Resolves a (year, month) selector into the *previous* calendar month.
///
/// Utility bills arrive a month after usage, so the monthly pass-through
/// view for month M shows the charge covering month M-1. A January query
/// rolls to December of the prior year.
///
/// # Example
///
/// ```
/// use billing_engine::allocation::resolve_previous_calendar_month;
/// use chrono::NaiveDate;
///
/// let period = resolve_previous_calendar_month(2025, 1).unwrap();
/// assert_eq!(period.start(), NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
/// assert_eq!(period.end(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
/// ```
pub fn resolve_previous_calendar_month(year: i32, month: u32) -> BillingResult<Interval> {
    if !(1..=12).contains(&month) {
        return Err(BillingError::InvalidMonth { month });
    }

    let (prev_year, prev_month) = if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };
    resolve_calendar_month(prev_year, prev_month)
}

/// Resolves a charge's own stored period into a validated interval.
///
/// # Errors
///
/// Returns `InvalidPeriod` if the charge's `period_start` is after its
/// `period_end`.
pub fn resolve_from_charge(charge: &ChargeRecord) -> BillingResult<Interval> {
    Interval::new(charge.period_start, charge.period_end)
}
