//! HTTP API module for the contribution calculator.
//!
//! This module provides the REST API endpoints: `POST /oblicz` for a
//! calculation and `GET /aktualne_dane_zus` for the current reference data.

mod cors;
mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ReferenceDataQuery};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
