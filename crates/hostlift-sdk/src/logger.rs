//! Hook for receiving the hosting client's own log lines.

use std::fmt;

/// Severity of a line emitted by the hosting client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SdkLogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for SdkLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SdkLogLevel::Debug => "debug",
            SdkLogLevel::Info => "info",
            SdkLogLevel::Warn => "warn",
            SdkLogLevel::Error => "error",
        };
        f.write_str(name)
    }
}

/// Receives log lines from a hosting client.
///
/// Clients that support a pluggable logger accept one through
/// [`HostingClient::set_logger`](crate::HostingClient::set_logger).
/// The logger is shared with whatever threads the client runs on, hence
/// `Send + Sync`.
pub trait SdkLogger: Send + Sync {
    /// Records one line at `level`.
    fn log(&self, level: SdkLogLevel, message: &str);
}
