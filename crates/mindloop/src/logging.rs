//! Global tracing subscriber setup.
//!
//! Library code only emits `tracing` events (and the odd `log` record); the
//! host application decides whether and how to install a subscriber.

use thiserror::Error;
use tracing_log::AsLog;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use crate::config::schema::LoggingConfig;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },

    #[error("A global logger is already installed: {0}")]
    AlreadyInitialized(String),
}

/// `RUST_LOG` when set and non-empty, otherwise the configured directive.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    let directive = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => config.filter.clone(),
    };

    EnvFilter::try_new(&directive).map_err(|e| LoggingError::InvalidFilter {
        filter: directive,
        message: e.to_string(),
    })
}

/// Installs the global subscriber and the `log` bridge. A second call
/// returns [`LoggingError::AlreadyInitialized`] and leaves the first
/// installation in place.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = build_filter(config)?;
    let max_level = filter
        .max_level_hint()
        .map(|level| level.as_log())
        .unwrap_or(log::LevelFilter::Trace);

    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = if config.json {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer().with_target(true).boxed()
    };

    let subscriber = Registry::default().with(fmt_layer).with(filter);

    tracing_log::LogTracer::builder()
        .with_max_level(max_level)
        .init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    tracing::debug!(json = config.json, filter = %config.filter, "Logging initialized");
    Ok(())
}
