//! Per-call context threaded from the caller through to the client.

use tokio_util::sync::CancellationToken;

/// Context accompanying every hosting call.
///
/// The adapter reads the correlation id when logging and hands the whole
/// context to the client unchanged. It never cancels anything itself:
/// a client that supports cancellation watches
/// [`cancellation()`](Self::cancellation), and callers can always drop
/// the call's future.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    cancellation: CancellationToken,
    correlation_id: Option<String>,
}

impl CallContext {
    /// Creates a context with a fresh cancellation token and no
    /// correlation id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags every log event for this call with `id`.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Uses `token` as this call's cancellation signal.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Returns the correlation id, if one was set.
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    /// Returns the cancellation token for this call.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// Returns `true` once the caller has cancelled this call.
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_has_no_correlation_id() {
        let ctx = CallContext::new();
        assert_eq!(ctx.correlation_id(), None);
        assert!(!ctx.is_cancelled());
    }

    #[test]
    fn test_with_correlation_id() {
        let ctx = CallContext::new().with_correlation_id("req-42");
        assert_eq!(ctx.correlation_id(), Some("req-42"));
    }

    #[test]
    fn test_cancellation_is_shared_with_caller_token() {
        let token = CancellationToken::new();
        let ctx = CallContext::new().with_cancellation(token.clone());
        token.cancel();
        assert!(ctx.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_future_resolves_after_cancel() {
        let ctx = CallContext::new();
        let token = ctx.cancellation().clone();
        let waiter = tokio::spawn(async move { ctx.cancellation().cancelled().await });
        token.cancel();
        waiter.await.expect("waiter should finish");
    }
}
