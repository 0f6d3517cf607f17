//! Error type for the relay domain.
//!
//! Configuration absence is deliberately *not* represented here: a missing
//! webhook endpoint is a normal outcome (`Ok(None)` from
//! [`crate::WebhookPoster::post`]), not a failure.

use thiserror::Error;

/// Errors raised while relaying an event to the webhook endpoint.
///
/// Every variant propagates to the hosting layer unhandled; the relay never
/// retries or recovers locally. The host decides whether to report the
/// invocation as failed (and thereby let the event source retry).
#[derive(Debug, Error)]
pub enum RelayError {
    /// The payload could not be converted to JSON.
    #[error("Payload serialization failed: {message}")]
    Serialization {
        /// Description of the serializer failure.
        message: String,
    },

    /// The HTTP request to the webhook endpoint failed before a response arrived
    /// (DNS failure, connection refused, connection reset, ...).
    ///
    /// A response with a non-success status code is **not** a transport failure.
    #[error("Webhook transport failure for '{endpoint}': {message}")]
    Transport {
        /// The endpoint the request was addressed to.
        endpoint: String,
        /// Description of the transport failure.
        message: String,
    },

    /// A non-blank endpoint value is not an absolute `http`/`https` URL.
    ///
    /// Produced at startup; the relay never starts with an invalid endpoint.
    #[error("Invalid webhook endpoint '{value}': {message}")]
    InvalidEndpoint {
        /// The rejected configuration value.
        value: String,
        /// Why the value was rejected.
        message: String,
    },

    /// The shared HTTP client could not be constructed from its builder.
    #[error("HTTP client configuration error: {message}")]
    HttpClient {
        /// Description of the builder failure.
        message: String,
    },
}

impl RelayError {
    pub(crate) fn serialization(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}
