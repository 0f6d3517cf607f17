//! Shared fixtures for listener tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use relay::{
    EventGridTrigger, EventPayload, RelayError, WebhookEndpoint, WebhookPoster, WebhookResponse,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::{router, FunctionRegistry};

/// A [`WebhookPoster`] that records payloads instead of sending them.
pub struct RecordingPoster {
    endpoint: Option<WebhookEndpoint>,
    status: u16,
    fail: bool,
    posted: Mutex<Vec<EventPayload>>,
}

impl RecordingPoster {
    /// Delivery enabled; every post answers `status`.
    pub fn answering(status: u16) -> Self {
        Self {
            endpoint: WebhookEndpoint::parse("https://example.com/hook").unwrap(),
            status,
            fail: false,
            posted: Mutex::new(Vec::new()),
        }
    }

    /// No endpoint configured.
    pub fn disabled() -> Self {
        Self {
            endpoint: None,
            ..Self::answering(200)
        }
    }

    /// Every post fails with a transport error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::answering(200)
        }
    }

    /// Request bodies of every recorded post, in order.
    pub fn bodies(&self) -> Vec<String> {
        self.posted
            .lock()
            .unwrap()
            .iter()
            .cloned()
            .map(|p| p.into_body().unwrap())
            .collect()
    }
}

#[async_trait]
impl WebhookPoster for RecordingPoster {
    fn endpoint(&self) -> Option<&WebhookEndpoint> {
        self.endpoint.as_ref()
    }

    async fn post(&self, payload: EventPayload) -> Result<Option<WebhookResponse>, RelayError> {
        let Some(endpoint) = &self.endpoint else {
            return Ok(None);
        };
        self.posted.lock().unwrap().push(payload);
        if self.fail {
            return Err(RelayError::Transport {
                endpoint: endpoint.to_string(),
                message: "connection refused".to_string(),
            });
        }
        Ok(Some(WebhookResponse::new(self.status, "")))
    }
}

/// Router with the default trigger registered over `poster`.
pub fn test_router(poster: Arc<RecordingPoster>) -> Router {
    let mut registry = FunctionRegistry::new();
    registry.register(EventGridTrigger::new(poster));
    router(Arc::new(registry))
}

/// Sends a JSON POST through the router and returns the status and parsed body.
pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    post_with_headers(app, uri, &[], body).await
}

/// Like [`post_json`], with extra request headers.
pub async fn post_with_headers(
    app: Router,
    uri: &str,
    headers: &[(&str, &str)],
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }

    let response = app
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
