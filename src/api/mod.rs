//! HTTP API for the Occupancy Cost Allocation Engine.
//!
//! This module provides the axum router, request/response types, and
//! application state for serving allocation requests.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AllocationRequest, ChargeRequest, MonthlyAllocationRequest, OccupancyRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
