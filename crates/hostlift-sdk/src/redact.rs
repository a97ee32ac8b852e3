//! Masking secrets before a record reaches a log sink.
//!
//! Redaction is copy-on-log: [`Redact::redacted`] returns a new value and
//! leaves the original alone, so the hosting client always receives the
//! real parameters while the log only ever sees the masked copy.
//!
//! Any record that carries a secret and gets logged implements [`Redact`]
//! and is logged only through `redacted()`.

use crate::ServerParameters;

/// Placeholder written in place of a secret value.
pub const REDACTED: &str = "<REDACTED>";

/// Produces a copy of `self` that is safe to log.
pub trait Redact {
    /// Returns a copy with every sensitive field replaced by [`REDACTED`].
    fn redacted(&self) -> Self;
}

impl Redact for ServerParameters {
    fn redacted(&self) -> Self {
        Self {
            auth_token: REDACTED.to_string(),
            access_key: REDACTED.to_string(),
            secret_key: REDACTED.to_string(),
            session_token: REDACTED.to_string(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ServerParameters {
        ServerParameters {
            web_socket_url: "wss://us-west-2.api.example.com".into(),
            process_id: "proc-1".into(),
            host_id: "host-1".into(),
            fleet_id: "fleet-1".into(),
            auth_token: "secret1".into(),
            aws_region: "us-west-2".into(),
            access_key: "AKIAEXAMPLE".into(),
            secret_key: "xyz".into(),
            session_token: "tok".into(),
        }
    }

    #[test]
    fn test_redacted_masks_all_secrets() {
        let masked = params().redacted();
        assert_eq!(masked.auth_token, REDACTED);
        assert_eq!(masked.access_key, REDACTED);
        assert_eq!(masked.secret_key, REDACTED);
        assert_eq!(masked.session_token, REDACTED);
    }

    #[test]
    fn test_redacted_keeps_connection_fields() {
        let original = params();
        let masked = original.redacted();
        assert_eq!(masked.web_socket_url, original.web_socket_url);
        assert_eq!(masked.process_id, original.process_id);
        assert_eq!(masked.host_id, original.host_id);
        assert_eq!(masked.fleet_id, original.fleet_id);
        assert_eq!(masked.aws_region, original.aws_region);
    }

    #[test]
    fn test_redacted_leaves_original_untouched() {
        let original = params();
        let _ = original.redacted();
        assert_eq!(original, params());
    }

    #[test]
    fn test_redacted_masks_empty_secrets_too() {
        // Empty secrets are masked too.
        let masked = ServerParameters::default().redacted();
        assert_eq!(masked.auth_token, REDACTED);
        assert_eq!(masked.session_token, REDACTED);
        assert!(masked.fleet_id.is_empty());
    }

    #[test]
    fn test_redacted_debug_output_has_no_secrets() {
        let debug = format!("{:?}", params().redacted());
        for secret in ["secret1", "AKIAEXAMPLE", "xyz", "\"tok\""] {
            assert!(!debug.contains(secret), "{secret} leaked: {debug}");
        }
        assert!(debug.contains("fleet-1"));
    }
}
