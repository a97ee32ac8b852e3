//! Building the logging sink the adapter writes to.
//!
//! The adapter takes its sink as a [`Dispatch`]. This module turns a
//! small [`LoggingConfig`] into one, using `tracing-subscriber`'s `fmt`
//! layer and an [`EnvFilter`].
//!
//! Filter resolution: explicit `filter` > `RUST_LOG` > `"info"`.
//!
//! ```rust,ignore
//! // Embedded in a host application's config file:
//! // [logging]
//! // filter = "info,hostlift=debug"
//! // format = "json"
//! let sink = hostlift::logging::build_sink(&app_config.logging)?;
//! ```

use serde::Deserialize;
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

use crate::AdapterError;

/// Filter used when neither the config nor `RUST_LOG` sets one.
pub const DEFAULT_FILTER: &str = "info";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line records.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

/// How the adapter's logging sink is built.
///
/// `Default` leaves the filter to `RUST_LOG` and writes text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, e.g. `"info,hostlift=debug"`.
    pub filter: Option<String>,

    /// Output format.
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Resolves the filter for this config.
    ///
    /// # Errors
    /// [`AdapterError::InvalidLogFilter`] if `filter` is set but does not
    /// parse. A malformed `RUST_LOG` falls back to [`DEFAULT_FILTER`].
    pub fn env_filter(&self) -> Result<EnvFilter, AdapterError> {
        match &self.filter {
            Some(directives) => EnvFilter::try_new(directives).map_err(|source| {
                AdapterError::InvalidLogFilter {
                    directives: directives.clone(),
                    source,
                }
            }),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
        }
    }
}

/// Builds a sink from `config` without installing it anywhere.
pub fn build_sink(config: &LoggingConfig) -> Result<Dispatch, AdapterError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_ansi(false);

    let sink = match config.format {
        LogFormat::Text => Dispatch::new(builder.finish()),
        LogFormat::Json => Dispatch::new(builder.json().finish()),
    };
    Ok(sink)
}

/// Builds a sink from `config` and makes it the process-wide default.
///
/// Returns the sink so it can also be handed to
/// [`HostingAdapter::new`](crate::HostingAdapter::new).
///
/// # Errors
/// [`AdapterError::GlobalSinkAlreadySet`] if this process already has a
/// global default.
pub fn install_global_sink(config: &LoggingConfig) -> Result<Dispatch, AdapterError> {
    let sink = build_sink(config)?;
    tracing::dispatcher::set_global_default(sink.clone())?;
    Ok(sink)
}
