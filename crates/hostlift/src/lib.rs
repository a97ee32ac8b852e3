//! # hostlift
//!
//! Instrumented adapter over a game-server hosting SDK.
//!
//! Game-server code talks to the [`HostingSdk`] surface. The
//! [`HostingAdapter`] behind it writes one debug event per call to an
//! injected logging sink, with secrets masked, and then hands the call to
//! the external [`HostingClient`] untouched. Retries, heartbeats and the
//! network protocol all stay inside the client.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hostlift::prelude::*;
//!
//! let sink = hostlift::logging::install_global_sink(&LoggingConfig::default())?;
//! let sdk = HostingAdapter::new(my_client, sink)?;
//! let ctx = CallContext::new();
//!
//! sdk.initialize_from_environment(&ctx).await?;
//! sdk.signal_ready(&ctx, ProcessParameters { port: 7777, ..Default::default() }).await?;
//! ```

mod adapter;
mod bridge;
mod error;
pub mod logging;

pub use adapter::{HostingAdapter, HostingSdk};
pub use bridge::TracingLogBridge;
pub use error::AdapterError;

/// Re-exports everything a game server needs to drive the adapter.
pub mod prelude {
    pub use crate::logging::{LogFormat, LoggingConfig};
    pub use crate::{AdapterError, HostingAdapter, HostingSdk, TracingLogBridge};
    pub use hostlift_sdk::{
        CallContext, HostingClient, LogParameters, ProcessParameters, REDACTED, Redact,
        RoleCredentials, RoleCredentialsRequest, RoleCredentialsResponse, SdkLogLevel, SdkLogger,
        ServerParameters,
    };
}
