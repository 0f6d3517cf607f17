//! Route table.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::{custom_handler, event_grid, FunctionRegistry};

/// Builds the listener's router over a shared function registry.
pub fn router(functions: Arc<FunctionRegistry>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/runtime/webhooks/EventGrid", post(event_grid::receive))
        .route("/{function_name}", post(custom_handler::invoke))
        .with_state(functions)
}

/// `GET /health`
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
