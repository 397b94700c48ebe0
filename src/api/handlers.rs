//! HTTP request handlers for the calculator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate, validate_input};
use crate::models::{CalculationInput, ReferenceData};

use super::cors::cors_middleware;
use super::request::{CalculationRequest, ReferenceDataQuery};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/oblicz", post(calculate_handler))
        .route("/aktualne_dane_zus", get(reference_data_handler))
        .layer(middleware::from_fn_with_state(state.clone(), cors_middleware))
        .with_state(state)
}

/// Handler for POST /oblicz endpoint.
///
/// Accepts monthly figures and returns the contribution and tax breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return ApiErrorResponse::bad_request(rejection_to_error(rejection, correlation_id))
                .into_response();
        }
    };

    let input: CalculationInput = request.into();

    // Reject bad input before touching the reference source
    if let Err(err) = validate_input(&input) {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid calculation input");
        return ApiErrorResponse::from(err).into_response();
    }

    let reference = state.reference_data().get_reference_data(false).await;

    let start_time = Instant::now();
    match calculate(&input, &reference) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                regime = %input.regime,
                data_year = result.data_year,
                total_burden = %result.total_burden,
                warnings = result.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /aktualne_dane_zus endpoint.
///
/// Returns the current reference data, refreshing it when
/// `force_refresh=true`.
async fn reference_data_handler(
    State(state): State<AppState>,
    Query(query): Query<ReferenceDataQuery>,
) -> Json<ReferenceData> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        force_refresh = query.force_refresh,
        "Processing reference data request"
    );

    let data = state
        .reference_data()
        .get_reference_data(query.force_refresh)
        .await;

    if let Some(message) = data.error_message() {
        warn!(correlation_id = %correlation_id, error = %message, "Reference data unavailable");
    }

    Json(data)
}

/// Converts a JSON extraction failure into an API error body.
fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}
