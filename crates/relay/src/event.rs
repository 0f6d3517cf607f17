//! The Event Grid event envelope.
//!
//! Only `data` matters to the relay; the remaining fields are carried for
//! logging and span context. Every field is optional on the wire so a sparse
//! test delivery (e.g. `{"data": "x"}`) still parses, and a malformed metadata
//! field never stops `data` from being forwarded.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::Timestamp;

/// Event type of the handshake Event Grid sends when a subscription is created.
pub const SUBSCRIPTION_VALIDATION_EVENT_TYPE: &str =
    "Microsoft.EventGrid.SubscriptionValidationEvent";

/// A single event in the Event Grid event schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventGridEvent {
    /// Publisher-assigned unique identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    /// Full resource path of the event source. Set by Event Grid, not the publisher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// Publisher-defined path to the event subject.
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,

    /// Registered event type (e.g. `"Microsoft.Storage.BlobCreated"`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_type: String,

    /// Time the event was generated, in the provider's UTC clock.
    ///
    /// `None` when absent or not an RFC 3339 string.
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_time: Option<Timestamp>,

    /// The event payload. Opaque to the relay; `null` when absent.
    #[serde(default)]
    pub data: Value,

    /// Schema version of `data`, defined by the publisher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_version: Option<String>,

    /// Schema version of the envelope metadata, set by Event Grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_version: Option<String>,
}

impl EventGridEvent {
    /// Creates an event with the given id, type and data and no other metadata.
    pub fn new(id: impl Into<String>, event_type: impl Into<String>, data: Value) -> Self {
        Self {
            id: id.into(),
            topic: None,
            subject: String::new(),
            event_type: event_type.into(),
            event_time: None,
            data,
            data_version: None,
            metadata_version: None,
        }
    }

    /// Returns `true` if this is the subscription validation handshake.
    pub fn is_subscription_validation(&self) -> bool {
        self.event_type == SUBSCRIPTION_VALIDATION_EVENT_TYPE
    }

    /// Returns the handshake code Event Grid expects to be echoed back, if present.
    pub fn validation_code(&self) -> Option<&str> {
        self.data.get("validationCode").and_then(Value::as_str)
    }
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(Timestamp::parse_rfc3339))
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
