//! # Index Handler
//!
//! Greeting served at the root path.

use axum::Json;
use tracing::{debug, instrument};

use crate::models::MessageResponse;

/// Greeting endpoint.
///
/// GET /
///
/// Returns `200 OK` with `{"message": "Hello from Python App!"}`.
#[instrument(fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn index() -> Json<MessageResponse> {
    debug!("Index endpoint accessed");
    Json(MessageResponse::greeting())
}
