//! Error types for the Occupancy Cost Allocation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during cost allocation.
//!
//! Note that a billing period with no recorded occupancy is *not* an error:
//! the engine returns a valid all-zero allocation with an explicit flag
//! instead (see [`crate::allocation::ChargeAllocation::no_occupancy`]).

use thiserror::Error;

/// The main error type for the Occupancy Cost Allocation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use billing_engine::error::BillingError;
///
/// let error = BillingError::InvalidMonth { month: 13 };
/// assert_eq!(error.to_string(), "Month must be between 1 and 12, got 13");
/// ```
#[derive(Debug, Error)]
pub enum BillingError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date range was inverted or otherwise malformed.
    #[error("Invalid billing period: {message}")]
    InvalidPeriod {
        /// A description of what made the period invalid.
        message: String,
    },

    /// A month selector was outside the 1-12 range.
    #[error("Month must be between 1 and 12, got {month}")]
    InvalidMonth {
        /// The out-of-range month value.
        month: u32,
    },

    /// The referenced room does not exist in the snapshot handed to the engine.
    #[error("Room not found: {room_id}")]
    RoomNotFound {
        /// The room identifier that was not found.
        room_id: String,
    },

    /// The referenced charge does not exist in the snapshot handed to the engine.
    #[error("Charge not found: {charge_id}")]
    ChargeNotFound {
        /// The charge identifier that was not found.
        charge_id: String,
    },
}

/// A type alias for Results that return BillingError.
pub type BillingResult<T> = Result<T, BillingError>;
