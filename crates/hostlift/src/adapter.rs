//! The hosting surface game servers call, and the adapter behind it.
//!
//! Every adapter call does the same three things, in order:
//!
//! 1. build a log-safe view of its inputs (masking secrets with
//!    [`Redact`])
//! 2. emit one debug event to the injected sink
//! 3. delegate the ORIGINAL inputs to the hosting client, exactly once,
//!    and return whatever it returns
//!
//! There is no retry, no error mapping and no state beyond the sink.

use std::future::Future;
use std::sync::Arc;

use hostlift_sdk::{
    CallContext, HostingClient, ProcessParameters, Redact, RoleCredentials,
    RoleCredentialsRequest, ServerParameters,
};
use tracing::Dispatch;
use tracing::subscriber::NoSubscriber;

use crate::{AdapterError, TracingLogBridge};

// ---------------------------------------------------------------------------
// HostingSdk
// ---------------------------------------------------------------------------

/// The hosting operations available to game-server code.
///
/// Code written against this trait can run on a [`HostingAdapter`] in
/// production and on a stub in tests.
pub trait HostingSdk: Send + Sync {
    /// Error produced by the hosting client, passed through unchanged.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Initializes the hosting client with explicit parameters.
    fn initialize(
        &self,
        ctx: &CallContext,
        params: ServerParameters,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Initializes the hosting client from the process environment.
    fn initialize_from_environment(
        &self,
        ctx: &CallContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Signals that this process is ready to host game sessions.
    fn signal_ready(
        &self,
        ctx: &CallContext,
        params: ProcessParameters,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Signals that this process is shutting down.
    fn signal_ending(
        &self,
        ctx: &CallContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Signals that the current game session accepts players.
    fn activate_session(
        &self,
        ctx: &CallContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Fetches temporary credentials for `role_arn`.
    ///
    /// # Returns
    /// - `Ok(RoleCredentials)` — the client's values, unmodified
    /// - `Err(_)` — the client's error; no partial credentials
    fn fetch_role_credentials(
        &self,
        ctx: &CallContext,
        role_arn: &str,
        role_session_name: &str,
    ) -> impl Future<Output = Result<RoleCredentials, Self::Error>> + Send;

    /// Tears down the hosting client and releases its resources.
    fn shutdown(&self, ctx: &CallContext) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

// ---------------------------------------------------------------------------
// HostingAdapter
// ---------------------------------------------------------------------------

/// Logs every hosting call to an injected sink, then delegates it.
///
/// The sink is fixed at construction. The adapter never falls back to the
/// process-global logger, so tests can hand it a capturing sink and
/// production code can route it wherever the host application wants.
///
/// `HostingAdapter<C>` is `Send + Sync` whenever `C` is, and adds no
/// locking of its own.
pub struct HostingAdapter<C: HostingClient> {
    client: C,
    sink: Dispatch,
}

impl<C: HostingClient> HostingAdapter<C> {
    /// Wraps `client`, logging to `sink`.
    ///
    /// Also installs a [`TracingLogBridge`] on the client so its own log
    /// lines reach the same sink.
    ///
    /// # Errors
    /// [`AdapterError::MissingLogSink`] if `sink` is the no-op dispatcher.
    pub fn new(client: C, sink: Dispatch) -> Result<Self, AdapterError> {
        if sink.is::<NoSubscriber>() {
            return Err(AdapterError::MissingLogSink);
        }

        client.set_logger(Arc::new(TracingLogBridge::new(sink.clone())));

        Ok(Self { client, sink })
    }

    /// Wraps `client`, logging to the dispatcher current at the call site.
    ///
    /// # Errors
    /// [`AdapterError::MissingLogSink`] if no dispatcher is set.
    pub fn with_current_sink(client: C) -> Result<Self, AdapterError> {
        let sink = tracing::dispatcher::get_default(Dispatch::clone);
        Self::new(client, sink)
    }

    /// Returns the wrapped hosting client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Returns the sink this adapter logs to.
    pub fn sink(&self) -> &Dispatch {
        &self.sink
    }

    /// Runs `emit` with the adapter's sink as the current dispatcher.
    fn log<T>(&self, emit: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.sink, emit)
    }
}

impl<C: HostingClient> HostingSdk for HostingAdapter<C> {
    type Error = C::Error;

    async fn initialize(&self, ctx: &CallContext, params: ServerParameters) -> Result<(), C::Error> {
        let redacted = params.redacted();
        self.log(|| {
            tracing::debug!(
                correlation_id = ctx.correlation_id(),
                params = ?redacted,
                "InitSDK called"
            )
        });
        self.client.init_sdk(ctx, params).await
    }

    async fn initialize_from_environment(&self, ctx: &CallContext) -> Result<(), C::Error> {
        self.log(|| {
            tracing::debug!(
                correlation_id = ctx.correlation_id(),
                "InitSDKFromEnvironment called"
            )
        });
        self.client.init_sdk_from_environment(ctx).await
    }

    async fn signal_ready(
        &self,
        ctx: &CallContext,
        params: ProcessParameters,
    ) -> Result<(), C::Error> {
        self.log(|| {
            tracing::debug!(
                correlation_id = ctx.correlation_id(),
                port = params.port,
                log_parameters = ?params.log_parameters,
                "ProcessReady called"
            )
        });
        self.client.process_ready(ctx, params).await
    }

    async fn signal_ending(&self, ctx: &CallContext) -> Result<(), C::Error> {
        self.log(|| {
            tracing::debug!(correlation_id = ctx.correlation_id(), "ProcessEnding called")
        });
        self.client.process_ending(ctx).await
    }

    async fn activate_session(&self, ctx: &CallContext) -> Result<(), C::Error> {
        self.log(|| {
            tracing::debug!(
                correlation_id = ctx.correlation_id(),
                "ActivateGameSession called"
            )
        });
        self.client.activate_game_session(ctx).await
    }

    async fn fetch_role_credentials(
        &self,
        ctx: &CallContext,
        role_arn: &str,
        role_session_name: &str,
    ) -> Result<RoleCredentials, C::Error> {
        self.log(|| {
            tracing::debug!(
                correlation_id = ctx.correlation_id(),
                role_arn,
                role_session_name,
                "GetFleetRoleCredentials called"
            )
        });
        let request = RoleCredentialsRequest::new(role_arn, role_session_name);
        let response = self.client.fleet_role_credentials(ctx, request).await?;
        Ok(RoleCredentials::from(response))
    }

    async fn shutdown(&self, ctx: &CallContext) -> Result<(), C::Error> {
        self.log(|| tracing::debug!(correlation_id = ctx.correlation_id(), "Destroy called"));
        self.client.destroy(ctx).await
    }
}
