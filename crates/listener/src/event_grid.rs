//! Direct Event Grid webhook deliveries.
//!
//! Event Grid posts a JSON array of events. The first delivery to a new
//! subscription is a validation handshake whose code must be echoed back
//! before any notification is sent.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use relay::{EventGridEvent, FunctionName, InvocationId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, info_span, Instrument};

use crate::{FunctionRegistry, ListenerError};

/// Header Event Grid uses to mark the delivery kind.
const EVENT_TYPE_HEADER: &str = "aeg-event-type";
const VALIDATION_HEADER_VALUE: &str = "SubscriptionValidation";

/// Query string of the delivery URL.
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryQuery {
    /// The function the delivery is addressed to.
    #[serde(rename = "functionName")]
    pub function_name: Option<String>,
}

/// Answer to the subscription validation handshake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionValidationResponse {
    /// The `validationCode` from the handshake event.
    pub validation_response: String,
}

/// Parses a delivery body into its events.
///
/// Event Grid always sends an array; a bare object is accepted for manual
/// testing. The shape is chosen from the top-level JSON value so a bad event
/// reports its own error.
fn parse_delivery(body: &[u8]) -> Result<Vec<EventGridEvent>, ListenerError> {
    let value: Value = serde_json::from_slice(body).map_err(ListenerError::malformed)?;
    let events: Result<Vec<EventGridEvent>, _> = match value {
        Value::Array(_) => serde_json::from_value(value),
        other => serde_json::from_value::<EventGridEvent>(other).map(|event| vec![event]),
    };
    events.map_err(ListenerError::malformed)
}

/// `POST /runtime/webhooks/EventGrid?functionName={name}`
pub async fn receive(
    State(functions): State<Arc<FunctionRegistry>>,
    Query(query): Query<DeliveryQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ListenerError> {
    let name = query
        .function_name
        .and_then(FunctionName::new)
        .ok_or(ListenerError::MissingFunctionName)?;
    let trigger = functions
        .get(&name)
        .ok_or_else(|| ListenerError::UnknownFunction {
            name: name.to_string(),
        })?;

    let events = parse_delivery(&body)?;

    let span = info_span!(
        "event_grid_delivery",
        invocation_id = %InvocationId::new_random(),
        function = %name,
        events = events.len(),
    );

    async move {
        if is_validation(&headers, &events) {
            return answer_validation(&events);
        }

        for event in &events {
            trigger.handle(event).await?;
        }

        debug!("Delivery processed");
        Ok(StatusCode::OK.into_response())
    }
    .instrument(span)
    .await
}

fn is_validation(headers: &HeaderMap, events: &[EventGridEvent]) -> bool {
    let by_header = headers
        .get(EVENT_TYPE_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case(VALIDATION_HEADER_VALUE));

    by_header || events.iter().any(EventGridEvent::is_subscription_validation)
}

fn answer_validation(events: &[EventGridEvent]) -> Result<Response, ListenerError> {
    let code = events
        .iter()
        .find_map(EventGridEvent::validation_code)
        .ok_or(ListenerError::MissingValidationCode)?;

    info!("Answering subscription validation handshake");
    let body = SubscriptionValidationResponse {
        validation_response: code.to_string(),
    };
    Ok(Json(body).into_response())
}

#[cfg(test)]
#[path = "event_grid_tests.rs"]
mod tests;
