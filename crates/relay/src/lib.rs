//! Core domain for the event relay.
//!
//! This crate contains every domain concept used by the relay: the inbound
//! Event Grid envelope, the payload forwarded to the webhook, the configured
//! destination endpoint, and the trigger handler that ties them together.
//! Infrastructure crates implement the [`WebhookPoster`] port defined here;
//! they never add relay rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is delivered; the `webhook` crate defines *how*.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`FunctionName`, `InvocationId`) |
//! | [`types`] | Value types (`WebhookEndpoint`, `EventPayload`, `WebhookResponse`, `Timestamp`) |
//! | [`event`] | The Event Grid event envelope |
//! | [`poster`] | The [`WebhookPoster`] port |
//! | [`trigger`] | The [`EventGridTrigger`] handler |
//! | [`errors`] | The [`RelayError`] type |

pub mod errors;
pub mod event;
pub mod identifiers;
pub mod poster;
pub mod trigger;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::RelayError;
pub use event::{EventGridEvent, SUBSCRIPTION_VALIDATION_EVENT_TYPE};
pub use identifiers::{FunctionName, InvocationId};
pub use poster::WebhookPoster;
pub use trigger::EventGridTrigger;
pub use types::{EventPayload, Timestamp, WebhookEndpoint, WebhookResponse};
