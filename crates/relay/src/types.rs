//! Value types for the relay domain.
//!
//! Unlike the identifiers in [`crate::identifiers`], these types carry values
//! with invariants (an endpoint is always an absolute `http`/`https` URL, a
//! payload always has a well-defined request body) and take part in delivery.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::RelayError;

// ---------------------------------------------------------------------------
// Destination
// ---------------------------------------------------------------------------

/// The webhook URL that every event payload is posted to.
///
/// Read once at startup and immutable afterwards. The absence of an endpoint
/// is modelled as `Option<WebhookEndpoint>` rather than an empty URL, so a
/// constructed [`WebhookEndpoint`] is always deliverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEndpoint(Url);

impl WebhookEndpoint {
    /// Parses a configured endpoint value.
    ///
    /// Returns `Ok(None)` for a blank value (delivery disabled), and an
    /// [`RelayError::InvalidEndpoint`] if the value is not an absolute
    /// `http` or `https` URL.
    pub fn parse(value: &str) -> Result<Option<Self>, RelayError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let url = Url::parse(trimmed).map_err(|e| RelayError::InvalidEndpoint {
            value: trimmed.to_string(),
            message: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(Some(Self(url))),
            other => Err(RelayError::InvalidEndpoint {
                value: trimmed.to_string(),
                message: format!("unsupported scheme '{other}'"),
            }),
        }
    }

    /// Returns the endpoint as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the parsed [`Url`].
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl std::fmt::Display for WebhookEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// The data forwarded to the webhook endpoint.
///
/// Text is sent verbatim; anything else is serialised to JSON. A payload that
/// is already a JSON document in string form therefore reaches the endpoint
/// without being quoted a second time.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    /// A textual payload, used as the request body unchanged.
    Text(String),
    /// A structured payload, serialised to compact JSON for the request body.
    Json(Value),
}

impl EventPayload {
    /// Builds the textual representation of an event's `data` field.
    ///
    /// A JSON string yields its raw contents; any other value yields its
    /// compact JSON text.
    pub fn textual(data: &Value) -> Self {
        match data {
            Value::String(s) => Self::Text(s.clone()),
            other => Self::Text(other.to_string()),
        }
    }

    /// Consumes the payload and returns the HTTP request body.
    pub fn into_body(self) -> Result<String, RelayError> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Json(value) => serde_json::to_string(&value).map_err(RelayError::serialization),
        }
    }
}

impl From<String> for EventPayload {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for EventPayload {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Value> for EventPayload {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl std::fmt::Display for EventPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Json(value) => write!(f, "{value}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// What the webhook endpoint answered.
///
/// Any status code is a completed delivery from the relay's point of view;
/// callers may inspect [`WebhookResponse::is_success`] for logging but the
/// relay never turns a non-success status into an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookResponse {
    /// HTTP status code returned by the endpoint.
    pub status: u16,
    /// Response body as text (empty if the endpoint returned none).
    pub body: String,
}

impl WebhookResponse {
    /// Creates a new [`WebhookResponse`].
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for a `2xx` status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp, displayed as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Parses an RFC 3339 string with any offset, normalised to UTC.
    ///
    /// Returns `None` if `value` is not RFC 3339.
    pub fn parse_rfc3339(value: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| Self(dt.with_timezone(&Utc)))
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
