//! Integration tests for installing the process-wide logging sink.
//!
//! Kept in their own test binary: a global default can only be set once
//! per process, and the adapter tests rely on there being none.

use hostlift::logging::{LogFormat, LoggingConfig, install_global_sink};
use hostlift::prelude::*;

#[derive(Debug, thiserror::Error)]
#[error("unreachable")]
struct NeverFails;

struct IdleClient;

impl HostingClient for IdleClient {
    type Error = NeverFails;

    async fn init_sdk(&self, _: &CallContext, _: ServerParameters) -> Result<(), NeverFails> {
        Ok(())
    }

    async fn init_sdk_from_environment(&self, _: &CallContext) -> Result<(), NeverFails> {
        Ok(())
    }

    async fn process_ready(&self, _: &CallContext, _: ProcessParameters) -> Result<(), NeverFails> {
        Ok(())
    }

    async fn process_ending(&self, _: &CallContext) -> Result<(), NeverFails> {
        Ok(())
    }

    async fn activate_game_session(&self, _: &CallContext) -> Result<(), NeverFails> {
        Ok(())
    }

    async fn fleet_role_credentials(
        &self,
        _: &CallContext,
        _: RoleCredentialsRequest,
    ) -> Result<RoleCredentialsResponse, NeverFails> {
        Ok(RoleCredentialsResponse::default())
    }

    async fn destroy(&self, _: &CallContext) -> Result<(), NeverFails> {
        Ok(())
    }
}

#[tokio::test]
async fn test_install_global_sink_once() {
    let config = LoggingConfig {
        filter: Some("debug".into()),
        format: LogFormat::Json,
    };

    let sink = install_global_sink(&config).expect("first install succeeds");

    // The global default is now what `with_current_sink` picks up.
    let adapter = HostingAdapter::with_current_sink(IdleClient).expect("global sink is set");
    adapter
        .initialize_from_environment(&CallContext::new())
        .await
        .expect("idle client succeeds");
    let _explicit = HostingAdapter::new(IdleClient, sink).expect("returned sink is usable");

    let second = install_global_sink(&config);
    assert!(matches!(second, Err(AdapterError::GlobalSinkAlreadySet(_))));
}
