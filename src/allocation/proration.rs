//! Day-count proration of a charge across a room's residents.
//!
//! This is the algorithmic core: given a charge's total and the room's
//! occupancy history, it computes person-days per resident and splits the
//! total proportionally, with a deterministic remainder correction so the
//! shares always reconcile exactly with the charge total.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::BillingConfig;
use crate::error::{BillingError, BillingResult};
use crate::models::{Allocation, ChargeRecord, ChargeType, Interval, OccupancyRecord};

use super::billing_period::resolve_from_charge;
use super::ledger::clip_all;

/// The result of allocating a single charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeAllocation {
    /// Identifier of the allocated charge.
    pub charge_id: String,
    /// Identifier of the room the charge was issued for.
    pub room_id: String,
    /// The kind of cost the charge represents.
    pub charge_type: ChargeType,
    /// The validated billing period of the charge.
    pub period: Interval,
    /// The charge total that was split.
    pub total_amount: Decimal,
    /// Sum of occupied days over all residents within the period.
    pub total_person_days: i64,
    /// Per-resident shares, sorted by occupied days descending and resident
    /// id ascending. Residents with no overlapping stay are excluded.
    pub allocations: Vec<Allocation>,
    /// True when no recorded occupancy overlapped the period (for instance a
    /// vacant room with a bill still issued). All-zero result, not an error.
    pub no_occupancy: bool,
}

/// The result of allocating all of a room's charges for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAllocation {
    /// Identifier of the room.
    pub room_id: String,
    /// The calendar month the batch covers.
    pub period: Interval,
    /// One allocation result per charge, in input order.
    pub charges: Vec<ChargeAllocation>,
    /// Each resident's combined share across all charges, by resident id
    /// ascending.
    pub resident_totals: Vec<ResidentTotal>,
    /// Sum of all charge totals in the batch.
    pub total_amount: Decimal,
}

/// One resident's combined share across a batch of charges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidentTotal {
    /// Identifier of the resident.
    pub resident_id: String,
    /// Sum of the resident's shares over every charge in the batch.
    pub total_amount: Decimal,
}

/// Splits one charge's total among the residents of its room, proportional
/// to occupied days within the charge's billing period.
///
/// Occupancy records for other rooms are ignored, so callers may hand over
/// an unfiltered residency snapshot. A resident with several qualifying
/// stays (re-entry) is billed for the sum of their day counts.
///
/// Both allocation methods currently prorate by day counts: usage-based
/// apportionment is not yet implemented and falls back to the day-based
/// split rather than inventing a usage model.
///
/// Because each share is rounded independently, the rounded shares can
/// drift from the charge total by a few cents. The residual is assigned to
/// the resident with the most occupied days (ties broken by lowest resident
/// id), so `sum(amount) == total_amount` holds exactly.
///
/// # Errors
///
/// Returns `InvalidPeriod` if the charge period or any occupancy record is
/// inverted. Zero overlapping occupancy is *not* an error; it yields an
/// empty allocation list with [`ChargeAllocation::no_occupancy`] set.
pub fn allocate_charge(
    charge: &ChargeRecord,
    occupancy: &[OccupancyRecord],
    config: &BillingConfig,
) -> BillingResult<ChargeAllocation> {
    let period = resolve_from_charge(charge)?;

    let room_records: Vec<OccupancyRecord> = occupancy
        .iter()
        .filter(|record| record.room_id == charge.room_id)
        .cloned()
        .collect();
    let stays = clip_all(&room_records, &period)?;

    // Person-days per resident; BTreeMap keeps resident ids ordered.
    let mut days_occupied: BTreeMap<String, i64> = BTreeMap::new();
    for stay in &stays {
        *days_occupied.entry(stay.resident_id.clone()).or_default() += stay.interval.days();
    }
    let total_person_days: i64 = days_occupied.values().sum();

    if total_person_days == 0 {
        return Ok(ChargeAllocation {
            charge_id: charge.id.clone(),
            room_id: charge.room_id.clone(),
            charge_type: charge.charge_type,
            period,
            total_amount: charge.total_amount,
            total_person_days: 0,
            allocations: Vec::new(),
            no_occupancy: true,
        });
    }

    let total_days = Decimal::from(total_person_days);
    let mut allocations: Vec<Allocation> = days_occupied
        .into_iter()
        .map(|(resident_id, days)| {
            let ratio = Decimal::from(days) / total_days;
            let amount = (charge.total_amount * ratio).round_dp(config.rounding_scale);
            Allocation {
                resident_id,
                days_occupied: days,
                ratio,
                amount,
            }
        })
        .collect();

    // Days descending; the sort is stable, so equal day counts keep the
    // resident-id order from the BTreeMap.
    allocations.sort_by(|a, b| b.days_occupied.cmp(&a.days_occupied));

    // Reconcile rounding drift: the first entry is the resident with the
    // most days (lowest id on ties).
    let rounded_sum: Decimal = allocations.iter().map(|a| a.amount).sum();
    let residual = charge.total_amount - rounded_sum;
    if !residual.is_zero() {
        allocations[0].amount += residual;
    }

    Ok(ChargeAllocation {
        charge_id: charge.id.clone(),
        room_id: charge.room_id.clone(),
        charge_type: charge.charge_type,
        period,
        total_amount: charge.total_amount,
        total_person_days,
        allocations,
        no_occupancy: false,
    })
}

/// Allocates a batch of charges for one room and one month.
///
/// Each charge is allocated independently over its own billing period, so
/// every charge total is preserved; there is no re-normalization across
/// charges. Residents' shares are then summed across the batch.
///
/// # Errors
///
/// Returns `ChargeNotFound` if a charge in the batch belongs to a different
/// room than the one requested, plus any error `allocate_charge` surfaces.
pub fn allocate_monthly(
    room_id: &str,
    period: Interval,
    charges: &[ChargeRecord],
    occupancy: &[OccupancyRecord],
    config: &BillingConfig,
) -> BillingResult<MonthlyAllocation> {
    let mut results = Vec::with_capacity(charges.len());
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut total_amount = Decimal::ZERO;

    for charge in charges {
        if charge.room_id != room_id {
            return Err(BillingError::ChargeNotFound {
                charge_id: charge.id.clone(),
            });
        }

        let result = allocate_charge(charge, occupancy, config)?;
        for allocation in &result.allocations {
            *totals
                .entry(allocation.resident_id.clone())
                .or_insert(Decimal::ZERO) += allocation.amount;
        }
        total_amount += charge.total_amount;
        results.push(result);
    }

    let resident_totals = totals
        .into_iter()
        .map(|(resident_id, total)| ResidentTotal {
            resident_id,
            total_amount: total,
        })
        .collect();

    Ok(MonthlyAllocation {
        room_id: room_id.to_string(),
        period,
        charges: results,
        resident_totals,
        total_amount,
    })
}
