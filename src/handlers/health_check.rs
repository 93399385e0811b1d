//! # Health Check Handler
//!
//! Simple health check endpoint for monitoring application availability.
//! Load balancers and deployment tooling poll it to confirm the process is
//! up and answering HTTP requests.

use axum::{Json, http::StatusCode};
use tracing::{debug, instrument};

use crate::models::HealthResponse;

/// Health check endpoint.
///
/// GET /health
///
/// Performs no dependency checks; reaching the handler is the signal.
///
/// # Returns
///
/// Always `200 OK` with `{"status": "ok"}`.
#[instrument]
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    debug!("Health check endpoint accessed");
    (StatusCode::OK, Json(HealthResponse::ok()))
}
