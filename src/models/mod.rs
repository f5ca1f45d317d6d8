//! Data models for the Occupancy Cost Allocation Engine.
//!
//! All core entities are ephemeral: they are constructed from query results
//! on each request, consumed once, and discarded. Persistence and identity
//! belong to the external storage layer.

mod allocation;
mod charge;
mod interval;
mod occupancy;

pub use allocation::Allocation;
pub use charge::{AllocationMethod, ChargeRecord, ChargeType};
pub use interval::Interval;
pub use occupancy::OccupancyRecord;
