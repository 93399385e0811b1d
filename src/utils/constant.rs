//! # Application Constants
//!
//! Response literals and startup defaults used throughout the service.

/// Name reported in structured log records.
pub const APP_NAME: &str = "hello-app";

/// Value of the `status` field returned by `GET /health`.
pub const HEALTH_STATUS_OK: &str = "ok";

/// Value of the `message` field returned by `GET /`.
pub const GREETING_MESSAGE: &str = "Hello from Python App!";

/// Bind address used when `HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Listen port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Tracing filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "hello_app=info,tower_http=info";
