//! Request types for the allocation engine API.
//!
//! This module defines the JSON request structures for the `/allocate` and
//! `/allocate/monthly` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AllocationMethod, ChargeRecord, ChargeType, OccupancyRecord};

/// Request body for the `/allocate` endpoint.
///
/// Carries one charge and the room's full occupancy history; the engine
/// does its own period clipping, so the history does not need to be
/// pre-filtered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Identifier of the room the allocation is requested for.
    pub room_id: String,
    /// The charge to split.
    pub charge: ChargeRequest,
    /// The room's occupancy history.
    pub occupancy: Vec<OccupancyRequest>,
}

/// Request body for the `/allocate/monthly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyAllocationRequest {
    /// Identifier of the room the allocation is requested for.
    pub room_id: String,
    /// The queried year.
    pub year: i32,
    /// The queried month (1-12).
    pub month: u32,
    /// When true, the batch covers the calendar month before the queried
    /// one — the pass-through convention for utility bills that arrive a
    /// month after usage.
    #[serde(default)]
    pub previous_month: bool,
    /// The room's charges for the month.
    pub charges: Vec<ChargeRequest>,
    /// The room's occupancy history.
    pub occupancy: Vec<OccupancyRequest>,
}

/// Charge information in an allocation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// Unique identifier for the charge.
    pub id: String,
    /// Identifier of the room the charge was issued for.
    pub room_id: String,
    /// The kind of cost this charge represents.
    pub charge_type: ChargeType,
    /// First day the charge covers (inclusive).
    pub period_start: NaiveDate,
    /// Last day the charge covers (inclusive).
    pub period_end: NaiveDate,
    /// The total amount to split among residents.
    pub total_amount: Decimal,
    /// The requested split method; the configured default applies when
    /// omitted.
    #[serde(default)]
    pub method: Option<AllocationMethod>,
}

impl ChargeRequest {
    /// Converts the request into a domain record, filling in the default
    /// split method when the request did not specify one.
    pub fn into_record(self, default_method: AllocationMethod) -> ChargeRecord {
        ChargeRecord {
            id: self.id,
            room_id: self.room_id,
            charge_type: self.charge_type,
            period_start: self.period_start,
            period_end: self.period_end,
            total_amount: self.total_amount,
            method: self.method.unwrap_or(default_method),
        }
    }
}

/// Occupancy information in an allocation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyRequest {
    /// Identifier of the resident this stay belongs to.
    pub resident_id: String,
    /// Identifier of the occupied room.
    pub room_id: String,
    /// The day the resident moved in (inclusive).
    pub check_in: NaiveDate,
    /// The day the resident moved out (inclusive), or `null` while still
    /// occupying.
    #[serde(default)]
    pub check_out: Option<NaiveDate>,
    /// Whether the residency is currently active.
    #[serde(default)]
    pub is_active: bool,
}

impl From<OccupancyRequest> for OccupancyRecord {
    fn from(req: OccupancyRequest) -> Self {
        OccupancyRecord {
            resident_id: req.resident_id,
            room_id: req.room_id,
            check_in: req.check_in,
            check_out: req.check_out,
            is_active: req.is_active,
        }
    }
}
