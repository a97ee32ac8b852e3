//! Contract for the external game-server hosting client.
//!
//! This crate does not talk to any hosting service. It describes the
//! collaborator that does:
//!
//! 1. **Records** — the parameters passed in and the credentials passed
//!    back ([`ServerParameters`], [`ProcessParameters`],
//!    [`RoleCredentialsRequest`], [`RoleCredentialsResponse`])
//! 2. **Capabilities** — what a hosting client can do ([`HostingClient`])
//! 3. **Logging hook** — how a client hands its own log lines to the
//!    host application ([`SdkLogger`])
//! 4. **Redaction** — how secret-bearing records are masked before they
//!    are logged ([`Redact`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Game server code  ← calls the HostingSdk surface
//!     ↕
//! hostlift (adapter)  ← logs redacted context, then delegates
//!     ↕
//! hostlift-sdk (this crate)  ← HostingClient trait + records
//!     ↕
//! Hosting client implementation  ← protocol, retries, network IO
//! ```

mod client;
mod context;
mod logger;
mod redact;
mod types;

pub use client::HostingClient;
pub use context::CallContext;
pub use logger::{SdkLogLevel, SdkLogger};
pub use redact::{REDACTED, Redact};
pub use types::{
    LogParameters, ProcessParameters, RoleCredentials, RoleCredentialsRequest,
    RoleCredentialsResponse, ServerParameters,
};
