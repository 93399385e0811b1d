//! # Tracing Setup
//!
//! Production emits bunyan-style JSON lines for log collectors; development
//! gets the human-readable `fmt` output. `RUST_LOG` overrides the default
//! filter in both.

use tracing::debug;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{
    EnvFilter, fmt, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{Environment, Settings};
use crate::error::AppResult;
use crate::utils::constant::{APP_NAME, DEFAULT_LOG_FILTER};

/// Installs the global tracing subscriber for `settings.app_env`, writing to stdout.
///
/// Returns [`AppError::Telemetry`] if a global subscriber is already set.
///
/// [`AppError::Telemetry`]: crate::error::AppError::Telemetry
pub fn init_subscriber(settings: &Settings) -> AppResult<()> {
    init_subscriber_with_writer(settings, std::io::stdout)
}

/// Same as [`init_subscriber`] but sends every log line to `writer`.
pub fn init_subscriber_with_writer<W>(settings: &Settings, writer: W) -> AppResult<()>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let (bunyan, pretty) = match settings.app_env {
        Environment::Production => (
            Some(BunyanFormattingLayer::new(APP_NAME.into(), writer)),
            None,
        ),
        Environment::Development => (None, Some(fmt::layer().with_writer(writer))),
    };
    // Must sit below the bunyan layer so span fields are stored before formatting.
    let storage = bunyan.is_some().then_some(JsonStorageLayer);

    tracing_subscriber::registry()
        .with(filter)
        .with(storage)
        .with(bunyan)
        .with(pretty)
        .try_init()?;

    debug!(env = %settings.app_env, "Tracing subscriber installed");
    Ok(())
}
