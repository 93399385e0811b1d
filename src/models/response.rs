use serde::Serialize;

use crate::utils::constant::{GREETING_MESSAGE, HEALTH_STATUS_OK};

/// Body of `GET /health`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: HEALTH_STATUS_OK,
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn greeting() -> Self {
        Self {
            message: GREETING_MESSAGE,
        }
    }
}
