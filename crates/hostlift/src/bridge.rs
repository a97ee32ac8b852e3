//! Routes the hosting client's own log lines into the adapter's sink.

use hostlift_sdk::{SdkLogLevel, SdkLogger};
use tracing::Dispatch;

/// [`SdkLogger`] that re-emits client log lines as `tracing` events.
///
/// Events go to the sink the bridge was built with, under the
/// `hostlift::sdk` target, so client output and adapter output land in
/// the same place and can be filtered separately.
#[derive(Debug, Clone)]
pub struct TracingLogBridge {
    sink: Dispatch,
}

impl TracingLogBridge {
    /// Creates a bridge that writes to `sink`.
    pub fn new(sink: Dispatch) -> Self {
        Self { sink }
    }
}

impl SdkLogger for TracingLogBridge {
    fn log(&self, level: SdkLogLevel, message: &str) {
        tracing::dispatcher::with_default(&self.sink, || match level {
            SdkLogLevel::Debug => tracing::debug!(target: "hostlift::sdk", "{message}"),
            SdkLogLevel::Info => tracing::info!(target: "hostlift::sdk", "{message}"),
            SdkLogLevel::Warn => tracing::warn!(target: "hostlift::sdk", "{message}"),
            SdkLogLevel::Error => tracing::error!(target: "hostlift::sdk", "{message}"),
        });
    }
}
