//! Listener error types and their HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use relay::RelayError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Errors raised while hosting the trigger.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The Event Grid delivery URL carried no `functionName` query parameter.
    #[error("Missing functionName query parameter")]
    MissingFunctionName,

    /// No trigger is registered under the requested name.
    #[error("Unknown function '{name}'")]
    UnknownFunction { name: String },

    /// The request body is not a valid delivery.
    #[error("Malformed delivery: {message}")]
    MalformedPayload { message: String },

    /// A subscription validation event carried no `validationCode`.
    #[error("Subscription validation event carries no validation code")]
    MissingValidationCode,

    /// The trigger handler failed; reported to the caller as an invocation failure.
    #[error("Function invocation failed: {0}")]
    Invocation(#[from] RelayError),

    /// The listening socket could not be bound.
    #[error("Failed to bind listener on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server failed while running.
    #[error("Listener I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ListenerError {
    /// HTTP status reported to the caller for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFunctionName | Self::MalformedPayload { .. } | Self::MissingValidationCode => {
                StatusCode::BAD_REQUEST
            }
            Self::UnknownFunction { .. } => StatusCode::NOT_FOUND,
            Self::Invocation(_) | Self::Bind { .. } | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub(crate) fn malformed(err: serde_json::Error) -> Self {
        Self::MalformedPayload {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ListenerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Invocation failed");
        } else {
            warn!(error = %self, status = status.as_u16(), "Rejected delivery");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
