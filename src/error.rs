//! # Centralized Error Handling
//!
//! Request handlers in this service cannot fail, so every error here belongs
//! to process startup: reading configuration, installing the tracing
//! subscriber, binding the listener and running the server loop.

use std::io;

use thiserror::Error;
use tracing_subscriber::util::TryInitError;

/// Errors raised while turning environment variables into [`Settings`].
///
/// [`Settings`]: crate::config::Settings
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port: {value:?}")]
    InvalidPort { value: String },

    #[error("unknown environment: {value:?} (expected `development` or `production`)")]
    InvalidEnvironment { value: String },
}

/// Top-level application error returned from `main`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error")]
    Config(#[from] ConfigError),

    #[error("failed to install tracing subscriber")]
    Telemetry(#[from] TryInitError),

    #[error("failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("server error")]
    Serve(#[source] io::Error),
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
