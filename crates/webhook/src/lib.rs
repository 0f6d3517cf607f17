//! Event relay webhook delivery adapter.
//!
//! Implements the [`relay::WebhookPoster`] trait with a single shared
//! [`reqwest::Client`].
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** HTTP transport, header handling and response capture
//! live here. The [`relay`] crate sees only [`relay::WebhookPoster`].
//!
//! ## Connection Reuse
//!
//! `reqwest::Client` pools connections internally and is safe to share across
//! tasks. One [`WebhookClient`] is built at startup, optionally customised via
//! [`WebhookClient::configure_http`], then wrapped in an `Arc` and shared by
//! every invocation.

mod client;

pub use client::WebhookClient;
