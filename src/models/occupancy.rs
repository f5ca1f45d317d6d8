//! Occupancy record model.
//!
//! This module defines the [`OccupancyRecord`] read-only input type loaded by
//! the surrounding CRUD layer from the room's residency history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single stay of a resident in a room.
///
/// A resident may have several records for the same room (move-out followed
/// by re-entry), and a room holds several concurrent residents up to its
/// capacity; capacity is enforced elsewhere, not by this engine.
///
/// `check_out = None` means the resident is still occupying the room, so the
/// ledger substitutes the billing period's end date when clipping.
///
/// # Example
///
/// ```
/// use billing_engine::models::OccupancyRecord;
/// use chrono::NaiveDate;
///
/// let record = OccupancyRecord {
///     resident_id: "stu_001".to_string(),
///     room_id: "room_101".to_string(),
///     check_in: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
///     check_out: None,
///     is_active: true,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyRecord {
    /// Identifier of the resident this stay belongs to.
    pub resident_id: String,
    /// Identifier of the occupied room.
    pub room_id: String,
    /// The day the resident moved in (inclusive).
    pub check_in: NaiveDate,
    /// The day the resident moved out (inclusive), or `None` while still
    /// occupying.
    #[serde(default)]
    pub check_out: Option<NaiveDate>,
    /// Whether the residency is currently active.
    #[serde(default)]
    pub is_active: bool,
}
