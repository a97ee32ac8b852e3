//! Parameter and result records exchanged with the hosting client.
//!
//! None of these are owned by the adapter. They are built by the caller
//! (or by the client, for responses) and passed straight through.

use std::fmt;
use std::time::SystemTime;

use crate::REDACTED;

// ---------------------------------------------------------------------------
// ServerParameters
// ---------------------------------------------------------------------------

/// Connection parameters for initializing the hosting client.
///
/// Four fields are secrets: `auth_token`, `access_key`, `secret_key` and
/// `session_token`. Log this record only through
/// [`Redact::redacted`](crate::Redact::redacted).
///
/// Fields left empty are filled in by the client from its own
/// environment where it supports that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerParameters {
    /// WebSocket endpoint of the hosting service.
    pub web_socket_url: String,

    /// Unique identifier of this server process.
    pub process_id: String,

    /// Identifier of the compute host running this process.
    pub host_id: String,

    /// Identifier of the fleet the host belongs to.
    pub fleet_id: String,

    /// Token that authenticates this process with the hosting service.
    pub auth_token: String,

    /// Cloud region the fleet runs in.
    pub aws_region: String,

    /// Access key used to sign requests when no auth token is issued.
    pub access_key: String,

    /// Secret half of `access_key`.
    pub secret_key: String,

    /// Session token accompanying temporary `access_key`/`secret_key`.
    pub session_token: String,
}

// ---------------------------------------------------------------------------
// ProcessParameters
// ---------------------------------------------------------------------------

/// Log files the hosting service uploads once a game session ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogParameters {
    /// Paths of the files to collect.
    pub log_paths: Vec<String>,
}

/// Describes a server process that is ready to host game sessions.
///
/// Nothing in here is sensitive; it is logged as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessParameters {
    /// Port players connect to.
    pub port: u16,

    /// Files to collect after each session.
    pub log_parameters: LogParameters,
}

// ---------------------------------------------------------------------------
// Role credentials
// ---------------------------------------------------------------------------

/// Request for temporary credentials tied to a cloud role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleCredentialsRequest {
    /// Identifier (ARN) of the role to assume.
    pub role_arn: String,

    /// Caller-chosen name for the assumed-role session.
    pub role_session_name: String,
}

impl RoleCredentialsRequest {
    /// Creates a request for the given role and session name.
    pub fn new(role_arn: impl Into<String>, role_session_name: impl Into<String>) -> Self {
        Self {
            role_arn: role_arn.into(),
            role_session_name: role_session_name.into(),
        }
    }
}

/// Everything the hosting client returns for a credentials request.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RoleCredentialsResponse {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,

    /// ARN of the assumed-role user the credentials belong to.
    pub assumed_role_user_arn: String,

    /// Identifier of the assumed role.
    pub assumed_role_id: String,

    /// When the credentials stop working, if the service said.
    pub expiration: Option<SystemTime>,
}

impl fmt::Debug for RoleCredentialsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoleCredentialsResponse")
            .field("access_key_id", &REDACTED)
            .field("secret_access_key", &REDACTED)
            .field("session_token", &REDACTED)
            .field("assumed_role_user_arn", &self.assumed_role_user_arn)
            .field("assumed_role_id", &self.assumed_role_id)
            .field("expiration", &self.expiration)
            .finish()
    }
}

/// Temporary credentials handed back to the caller.
///
/// The three values are copied unmodified from the client's
/// [`RoleCredentialsResponse`]. `Debug` never prints them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RoleCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
}

impl From<RoleCredentialsResponse> for RoleCredentials {
    fn from(response: RoleCredentialsResponse) -> Self {
        Self {
            access_key_id: response.access_key_id,
            secret_access_key: response.secret_access_key,
            session_token: response.session_token,
        }
    }
}

impl fmt::Debug for RoleCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoleCredentials")
            .field("access_key_id", &REDACTED)
            .field("secret_access_key", &REDACTED)
            .field("session_token", &REDACTED)
            .finish()
    }
}
