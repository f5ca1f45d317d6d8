//! Allocation logic for the Occupancy Cost Allocation Engine.
//!
//! This module contains billing-period resolution, occupancy clipping,
//! the day-count proration engine for single charges and monthly batches,
//! and the report shaping that produces the API response structures.

mod billing_period;
mod ledger;
mod proration;
mod report;

pub use billing_period::{
    resolve_calendar_month, resolve_from_charge, resolve_previous_calendar_month,
};
pub use ledger::{ClippedStay, clip_all, effective_interval};
pub use proration::{
    ChargeAllocation, MonthlyAllocation, ResidentTotal, allocate_charge, allocate_monthly,
};
pub use report::{
    AllocationReport, AllocationRow, MonthlyReport, MonthlySummary, PeriodSummary, ReportSummary,
    ResidentTotalRow,
};
