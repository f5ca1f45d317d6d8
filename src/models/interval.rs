//! Closed date interval used for billing periods and occupancy stays.
//!
//! This module defines the [`Interval`] type that every other component works
//! in terms of. Both bounds are inclusive, so a single-day interval is valid
//! and counts as one day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{BillingError, BillingResult};

/// A closed date range with inclusive bounds.
///
/// The invariant `start <= end` is enforced at construction; an inverted
/// range is a caller error, never a runtime state inside the engine.
///
/// # Example
///
/// ```
/// use billing_engine::models::Interval;
/// use chrono::NaiveDate;
///
/// let june = Interval::new(
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
/// ).unwrap();
/// assert_eq!(june.days(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// The first day of the interval (inclusive).
    start: NaiveDate,
    /// The last day of the interval (inclusive).
    end: NaiveDate,
}

impl Interval {
    /// Creates an interval, rejecting inverted ranges.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> BillingResult<Self> {
        if start > end {
            return Err(BillingError::InvalidPeriod {
                message: format!("start {} is after end {}", start, end),
            });
        }
        Ok(Self { start, end })
    }

    /// The first day of the interval (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last day of the interval (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// The inclusive day count, always at least 1.
    ///
    /// A single-day interval (`start == end`) counts as one day. This is the
    /// single day-count convention used by every allocation computation.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Returns the intersection of two intervals, or `None` if they do not
    /// overlap.
    ///
    /// No overlap means zero shared days, which is an ordinary outcome, not
    /// an error.
    ///
    /// # Example
    ///
    /// ```
    /// use billing_engine::models::Interval;
    /// use chrono::NaiveDate;
    ///
    /// let date = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
    /// let a = Interval::new(date(1), date(15)).unwrap();
    /// let b = Interval::new(date(10), date(30)).unwrap();
    /// let shared = a.overlap(&b).unwrap();
    /// assert_eq!(shared.start(), date(10));
    /// assert_eq!(shared.end(), date(15));
    /// assert_eq!(shared.days(), 6);
    /// ```
    pub fn overlap(&self, other: &Interval) -> Option<Interval> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start <= end {
            Some(Interval { start, end })
        } else {
            None
        }
    }
}
