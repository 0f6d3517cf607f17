//! Functions custom-handler invocations.
//!
//! When the relay runs as a custom handler, the Functions host performs the
//! Event Grid plumbing itself and forwards each trigger invocation as
//! `POST /{functionName}` with the event under the trigger binding's name.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use relay::{EventGridEvent, FunctionName, InvocationId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info_span, Instrument};

use crate::{FunctionRegistry, ListenerError};

/// Binding name used by the default `function.json`.
const EVENT_BINDING: &str = "eventGridEvent";

/// Invocation request sent by the Functions host.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvocationRequest {
    /// Trigger and input binding values keyed by binding name.
    #[serde(default)]
    pub data: Map<String, Value>,
    /// Trigger metadata; not used by the relay.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl InvocationRequest {
    /// Extracts the Event Grid event from the trigger binding.
    ///
    /// Prefers the `eventGridEvent` binding; otherwise the request must carry
    /// exactly one binding. The host may deliver the event either as an object
    /// or as a JSON-encoded string.
    pub fn event(&self) -> Result<EventGridEvent, ListenerError> {
        let binding = match self.data.get(EVENT_BINDING) {
            Some(value) => value,
            None if self.data.len() == 1 => self.data.values().next().unwrap_or(&Value::Null),
            None => {
                return Err(ListenerError::MalformedPayload {
                    message: format!(
                        "expected a '{EVENT_BINDING}' binding or exactly one binding, found {}",
                        self.data.len()
                    ),
                })
            }
        };

        let event = match binding {
            Value::String(raw) => serde_json::from_str(raw),
            other => serde_json::from_value(other.clone()),
        };
        event.map_err(ListenerError::malformed)
    }
}

/// Invocation response returned to the Functions host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvocationResponse {
    /// Output binding values; the relay has none.
    pub outputs: Map<String, Value>,
    /// Lines the host appends to the invocation log.
    pub logs: Vec<String>,
    /// Function return value; always `null`.
    pub return_value: Option<Value>,
}

/// `POST /{functionName}`
pub async fn invoke(
    State(functions): State<Arc<FunctionRegistry>>,
    Path(function_name): Path<String>,
    body: Bytes,
) -> Result<Json<InvocationResponse>, ListenerError> {
    let name = FunctionName::new(function_name.clone())
        .ok_or(ListenerError::UnknownFunction { name: function_name })?;
    let trigger = functions
        .get(&name)
        .ok_or_else(|| ListenerError::UnknownFunction {
            name: name.to_string(),
        })?;

    let request: InvocationRequest =
        serde_json::from_slice(&body).map_err(ListenerError::malformed)?;
    let event = request.event()?;

    let span = info_span!(
        "custom_handler_invocation",
        invocation_id = %InvocationId::new_random(),
        function = %name,
    );

    let response = trigger.handle(&event).instrument(span).await?;

    let log = match response {
        None => "No webhook endpoint is configured; event not forwarded".to_string(),
        Some(r) => format!("Event '{}' forwarded; webhook answered {}", event.id, r.status),
    };

    Ok(Json(InvocationResponse {
        logs: vec![log],
        ..InvocationResponse::default()
    }))
}

#[cfg(test)]
#[path = "custom_handler_tests.rs"]
mod tests;
