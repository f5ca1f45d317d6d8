//! HTTP request handlers for the allocation engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::allocation::{
    AllocationReport, MonthlyReport, allocate_charge, allocate_monthly, resolve_calendar_month,
    resolve_previous_calendar_month,
};
use crate::error::BillingError;
use crate::models::{AllocationMethod, ChargeRecord, OccupancyRecord};

use super::request::{AllocationRequest, MonthlyAllocationRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/allocate", post(allocate_handler))
        .route("/allocate/monthly", post(allocate_monthly_handler))
        .with_state(state)
}

/// Handler for POST /allocate.
///
/// Accepts a single charge plus the room's occupancy history and returns
/// the per-resident allocation report.
async fn allocate_handler(
    State(state): State<AppState>,
    payload: Result<Json<AllocationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing allocation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let config = state.config().billing();

    // The charge must belong to the room the allocation was requested for.
    if request.charge.room_id != request.room_id {
        warn!(
            correlation_id = %correlation_id,
            room_id = %request.room_id,
            charge_room_id = %request.charge.room_id,
            "Charge belongs to a different room"
        );
        let api_error: ApiErrorResponse = BillingError::RoomNotFound {
            room_id: request.room_id,
        }
        .into();
        return error_response(api_error);
    }

    let charge: ChargeRecord = request.charge.into_record(config.default_method);
    let occupancy: Vec<OccupancyRecord> =
        request.occupancy.into_iter().map(Into::into).collect();

    if charge.method == AllocationMethod::UsageBased {
        warn!(
            correlation_id = %correlation_id,
            charge_id = %charge.id,
            "Usage-based allocation requested; falling back to day-count proration"
        );
    }

    let start_time = Instant::now();
    match allocate_charge(&charge, &occupancy, config) {
        Ok(result) => {
            let report = AllocationReport::from_allocation(&result, config);
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                room_id = %report.room_id,
                charge_id = %report.charge_id,
                residents = report.summary.total_residents,
                no_occupancy = report.no_occupancy,
                duration_us = duration.as_micros(),
                "Allocation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Allocation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /allocate/monthly.
///
/// Resolves the queried calendar month (or the previous one under the
/// pass-through convention), allocates each charge in the batch, and
/// returns the combined monthly report.
async fn allocate_monthly_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthlyAllocationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly allocation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let config = state.config().billing();

    let period = if request.previous_month {
        resolve_previous_calendar_month(request.year, request.month)
    } else {
        resolve_calendar_month(request.year, request.month)
    };
    let period = match period {
        Ok(period) => period,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                year = request.year,
                month = request.month,
                error = %err,
                "Month selector rejected"
            );
            return error_response(err.into());
        }
    };

    let charges: Vec<ChargeRecord> = request
        .charges
        .into_iter()
        .map(|c| c.into_record(config.default_method))
        .collect();
    let occupancy: Vec<OccupancyRecord> =
        request.occupancy.into_iter().map(Into::into).collect();

    if charges.iter().any(|c| c.method == AllocationMethod::UsageBased) {
        warn!(
            correlation_id = %correlation_id,
            "Usage-based allocation requested; falling back to day-count proration"
        );
    }

    let start_time = Instant::now();
    match allocate_monthly(&request.room_id, period, &charges, &occupancy, config) {
        Ok(result) => {
            let report = MonthlyReport::from_batch(&result, config);
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                room_id = %report.room_id,
                charges = report.summary.total_charges,
                residents = report.summary.total_residents,
                duration_us = duration.as_micros(),
                "Monthly allocation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Monthly allocation failed"
            );
            error_response(err.into())
        }
    }
}

/// Maps a JSON extraction rejection into the error response body.
fn rejection_response(
    rejection: JsonRejection,
    correlation_id: Uuid,
) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Renders a domain error as an HTTP response.
fn error_response(api_error: ApiErrorResponse) -> axum::response::Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
