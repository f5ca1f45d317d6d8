//! Charge record model and related enums.
//!
//! This module defines the [`ChargeRecord`] read-only input type along with
//! the [`ChargeType`] and [`AllocationMethod`] enums.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of cost a charge represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeType {
    /// Electricity utility bill.
    Electricity,
    /// Water utility bill.
    Water,
    /// Gas utility bill.
    Gas,
    /// A shared room charge that is not a metered utility.
    Shared,
}

impl ChargeType {
    /// The snake_case name used in JSON payloads and summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChargeType::Electricity => "electricity",
            ChargeType::Water => "water",
            ChargeType::Gas => "gas",
            ChargeType::Shared => "shared",
        }
    }
}

/// How a charge's total should be split among residents.
///
/// Usage-based apportionment is not yet implemented; a charge requesting it
/// is allocated by day counts, exactly like `DaysBased`. The variant exists
/// so callers can record the intent without the engine inventing a usage
/// model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationMethod {
    /// Split proportional to occupied days (the default).
    #[default]
    DaysBased,
    /// Split proportional to metered usage. Currently falls back to
    /// day-count proration.
    UsageBased,
}

/// A room's utility bill or shared charge for one billing period.
///
/// One charge record maps to exactly one allocation run. The period is
/// stored as raw dates and validated by
/// [`crate::allocation::resolve_from_charge`] at the engine boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeRecord {
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
    /// The requested split method.
    #[serde(default)]
    pub method: AllocationMethod,
}
