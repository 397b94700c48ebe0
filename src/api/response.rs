//! Response types for the calculator API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API. The human-readable message travels in `detail`, which
//! is where the calculator frontend looks for it.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub detail: String,
    /// Optional extra context, such as the offending field or value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
            context: None,
        }
    }

    /// Creates a new API error with context.
    pub fn with_context(
        code: impl Into<String>,
        detail: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
            context: Some(context.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(detail: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", detail)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(detail: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", detail)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_context("INVALID_INPUT", message, field),
            },
            EngineError::UnknownRegime { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_context(
                    "INVALID_TAX_REGIME",
                    "Nieprawidłowa forma opodatkowania",
                    value,
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_context(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_context(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::ReferenceFetch { url, message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_context(
                    "REFERENCE_DATA_UNAVAILABLE",
                    message,
                    url,
                ),
            },
        }
    }
}
