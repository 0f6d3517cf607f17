//! Event relay trigger host.
//!
//! Binds an HTTP server that stands in for the Functions host's Event Grid
//! trigger and dispatches each received event to the registered
//! [`relay::EventGridTrigger`].
//!
//! ## Endpoints
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `POST /runtime/webhooks/EventGrid?functionName={name}` | Direct Event Grid webhook delivery, including the subscription validation handshake |
//! | `POST /{name}` | Functions custom-handler invocation (`{"Data": {...}, "Metadata": {...}}`) |
//! | `GET /health` | Liveness probe |
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** HTTP framing, delivery parsing and status mapping live
//! here. The [`relay`] crate sees only [`relay::EventGridEvent`].
//!
//! ## Failure Reporting
//!
//! A handler error answers `500`, which Event Grid treats as a failed delivery
//! and retries according to its own policy. The relay itself never retries.

mod custom_handler;
mod error;
mod event_grid;
mod registry;
mod routes;
mod server;

#[cfg(test)]
mod test_support;

pub use custom_handler::{InvocationRequest, InvocationResponse};
pub use error::ListenerError;
pub use event_grid::{DeliveryQuery, SubscriptionValidationResponse};
pub use registry::FunctionRegistry;
pub use routes::router;
pub use server::{BoundListener, EventListener, ListenerConfig};
