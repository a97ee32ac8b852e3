//! The capability set of an external hosting client.
//!
//! The hosting client owns everything protocol-related: the connection to
//! the hosting service, heartbeats, retries and credential refresh. This
//! trait only names what it can be asked to do, so the adapter can run
//! against a real SDK binding in production and a recording stub in
//! tests.

use std::future::Future;
use std::sync::Arc;

use crate::{
    CallContext, ProcessParameters, RoleCredentialsRequest, RoleCredentialsResponse,
    SdkLogger, ServerParameters,
};

/// An external game-server hosting client.
///
/// # Trait bounds
///
/// - `Send + Sync` → one client is shared by every task in the process.
/// - `'static` → the client lives as long as the hosting session.
///
/// Every call takes the caller's [`CallContext`]. Errors are the client's
/// own type; callers see them exactly as the client produced them.
pub trait HostingClient: Send + Sync + 'static {
    /// Error returned by every hosting call.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Initializes the client with explicit connection parameters.
    fn init_sdk(
        &self,
        ctx: &CallContext,
        params: ServerParameters,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Initializes the client from the process environment.
    fn init_sdk_from_environment(
        &self,
        ctx: &CallContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Tells the hosting service this process can host game sessions.
    fn process_ready(
        &self,
        ctx: &CallContext,
        params: ProcessParameters,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Tells the hosting service this process is shutting down.
    fn process_ending(
        &self,
        ctx: &CallContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Tells the hosting service the current game session accepts players.
    fn activate_game_session(
        &self,
        ctx: &CallContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Fetches temporary credentials for a cloud role.
    fn fleet_role_credentials(
        &self,
        ctx: &CallContext,
        request: RoleCredentialsRequest,
    ) -> impl Future<Output = Result<RoleCredentialsResponse, Self::Error>> + Send;

    /// Releases everything the client holds.
    fn destroy(
        &self,
        ctx: &CallContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Routes the client's own log lines to `logger`.
    ///
    /// Defaults to doing nothing, for clients without a pluggable logger.
    fn set_logger(&self, logger: Arc<dyn SdkLogger>) {
        let _ = logger;
    }
}
