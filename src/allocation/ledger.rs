//! Occupancy ledger: clipping resident stays to a billing period.
//!
//! The ledger turns raw [`OccupancyRecord`]s into the effective intervals a
//! resident actually occupied the room during the billing period, handling
//! open-ended "still resident" records and stays that fall entirely outside
//! the period.

use serde::{Deserialize, Serialize};

use crate::error::{BillingError, BillingResult};
use crate::models::{Interval, OccupancyRecord};

/// One occupancy stay clipped to a billing period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClippedStay {
    /// Identifier of the resident the stay belongs to.
    pub resident_id: String,
    /// The portion of the stay that falls inside the billing period.
    pub interval: Interval,
}

/// Computes the portion of a stay that falls inside the billing period.
///
/// A `None` check-out means the resident is still occupying, so the billing
/// period's end date is substituted before clipping. Returns `Ok(None)` when
/// the stay does not intersect the period at all (checked out before it
/// began, or checked in after it ended).
///
/// # Errors
///
/// Returns `InvalidPeriod` if the record's check-out date precedes its
/// check-in date. Inverted records are rejected here, at the boundary, so
/// the overlap and day-count math never sees them.
pub fn effective_interval(
    record: &OccupancyRecord,
    period: &Interval,
) -> BillingResult<Option<Interval>> {
    let end = match record.check_out {
        Some(check_out) => {
            if check_out < record.check_in {
                return Err(BillingError::InvalidPeriod {
                    message: format!(
                        "resident {} checked out {} before checking in {}",
                        record.resident_id, check_out, record.check_in
                    ),
                });
            }
            check_out
        }
        None => {
            // Still resident: checked in after the period ended means no
            // overlap, otherwise the stay runs to the period end.
            if record.check_in > period.end() {
                return Ok(None);
            }
            period.end()
        }
    };

    let stay = Interval::new(record.check_in, end)?;
    Ok(stay.overlap(period))
}

/// Clips every record to the billing period, dropping non-overlapping stays.
///
/// Residents with multiple qualifying stays in the same period (moved out
/// and returned) are deliberately *not* deduplicated: each stay contributes
/// its own day count, and the proration engine sums them per resident. A
/// resident who left and came back within the month pays for both stretches.
pub fn clip_all(
    records: &[OccupancyRecord],
    period: &Interval,
) -> BillingResult<Vec<ClippedStay>> {
    let mut stays = Vec::with_capacity(records.len());
    for record in records {
        if let Some(interval) = effective_interval(record, period)? {
            stays.push(ClippedStay {
                resident_id: record.resident_id.clone(),
                interval,
            });
        }
    }
    Ok(stays)
}
