//! Occupancy Cost Allocation Engine for dormitory billing.
//!
//! This crate computes each resident's fair share of a room's utility bill or
//! shared charge, proportional to the number of days the resident actually
//! occupied the room during the billing period.

#![warn(missing_docs)]

pub mod allocation;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
