//! The Event Grid trigger handler.
//!
//! Invoked once per inbound event by the hosting layer. The handler extracts
//! the event's `data`, hands its textual form to the [`WebhookPoster`], and
//! reports the outcome through logs only.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{EventGridEvent, EventPayload, FunctionName, RelayError, WebhookPoster, WebhookResponse};

/// Forwards the data of each Event Grid event to the webhook endpoint.
///
/// Cheap to share: the handler holds only an `Arc` to the poster and keeps no
/// per-invocation state, so concurrent invocations never contend.
#[derive(Clone)]
pub struct EventGridTrigger {
    name: FunctionName,
    poster: Arc<dyn WebhookPoster>,
}

impl EventGridTrigger {
    /// The name the trigger is registered under by default.
    pub const DEFAULT_NAME: &'static str = "EventGridTrigger";

    /// Creates a trigger registered under [`Self::DEFAULT_NAME`].
    pub fn new(poster: Arc<dyn WebhookPoster>) -> Self {
        Self {
            name: FunctionName(Self::DEFAULT_NAME.to_string()),
            poster,
        }
    }

    /// Creates a trigger registered under a custom function name.
    pub fn with_name(name: FunctionName, poster: Arc<dyn WebhookPoster>) -> Self {
        Self { name, poster }
    }

    /// The function name this trigger answers to.
    pub fn name(&self) -> &FunctionName {
        &self.name
    }

    /// Relays one event.
    ///
    /// Returns the webhook's response, or `None` when no endpoint is
    /// configured. Serialisation and transport failures propagate unchanged.
    #[instrument(
        name = "event_grid_trigger",
        skip_all,
        fields(function = %self.name, event_id = %event.id, event_type = %event.event_type)
    )]
    pub async fn handle(
        &self,
        event: &EventGridEvent,
    ) -> Result<Option<WebhookResponse>, RelayError> {
        let payload = EventPayload::textual(&event.data);
        info!(event_data = %payload, "Event received");

        let response = self.poster.post(payload).await?;
        match &response {
            None => info!("No webhook endpoint is configured; event not forwarded"),
            Some(r) if !r.is_success() => {
                warn!(status = r.status, "Webhook endpoint answered with a non-success status")
            }
            Some(r) => info!(status = r.status, "Event forwarded"),
        }

        Ok(response)
    }
}

impl std::fmt::Debug for EventGridTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventGridTrigger")
            .field("name", &self.name)
            .field("endpoint", &self.poster.endpoint())
            .finish()
    }
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod tests;
