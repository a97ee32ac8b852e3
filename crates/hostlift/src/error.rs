//! Adapter-local configuration errors.
//!
//! Hosting calls never produce these. Their errors belong to the hosting
//! client and pass through unchanged; only setting up the adapter and its
//! logging sink can fail here.

use tracing::dispatcher::SetGlobalDefaultError;
use tracing_subscriber::filter::ParseError;

/// Errors raised while wiring up the adapter.
///
/// All of them are fatal for the process that constructs the adapter.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// The adapter was handed a sink that discards everything.
    #[error("hosting adapter requires a logging sink, got a no-op dispatcher")]
    MissingLogSink,

    /// The configured filter directives could not be parsed.
    #[error("invalid log filter {directives:?}: {source}")]
    InvalidLogFilter {
        directives: String,
        #[source]
        source: ParseError,
    },

    /// Another global logging sink was installed first.
    #[error("global logging sink already installed")]
    GlobalSinkAlreadySet(#[from] SetGlobalDefaultError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_log_sink_message() {
        let err = AdapterError::MissingLogSink;
        assert!(err.to_string().contains("logging sink"));
    }

    #[test]
    fn test_invalid_log_filter_names_directives() {
        let source = tracing_subscriber::EnvFilter::try_new("hostlift=loud")
            .expect_err("`loud` is not a level");
        let err = AdapterError::InvalidLogFilter {
            directives: "hostlift=loud".into(),
            source,
        };
        assert!(err.to_string().contains("hostlift=loud"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
