//! The outbound delivery port.

use async_trait::async_trait;

use crate::{EventPayload, RelayError, WebhookEndpoint, WebhookResponse};

/// Delivers a payload to the configured webhook endpoint.
///
/// Implementations hold one long-lived, connection-pooled HTTP client and an
/// immutable endpoint, so a single instance is shared (behind an `Arc`) by all
/// concurrent invocations without further synchronisation.
///
/// ## Contract
///
/// - No endpoint configured: return `Ok(None)` without any network traffic.
/// - Otherwise make exactly one POST attempt with `Content-Type:
///   application/json` and return the response, whatever its status.
/// - Failures before a response arrives surface as [`RelayError::Transport`].
#[async_trait]
pub trait WebhookPoster: Send + Sync {
    /// The destination endpoint, or `None` if delivery is disabled.
    fn endpoint(&self) -> Option<&WebhookEndpoint>;

    /// Posts `payload` to the endpoint.
    async fn post(&self, payload: EventPayload) -> Result<Option<WebhookResponse>, RelayError>;
}
