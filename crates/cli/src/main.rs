//! Event relay entry point.
//!
//! This binary is the composition root for the entire system:
//!
//! 1. **Read configuration** from the environment and validate it.
//! 2. **Wire observability** via [`telemetry::init`].
//! 3. **Construct infrastructure**: one shared `WebhookClient`, the
//!    `EventGridTrigger` over it, and the `EventListener` hosting the trigger.
//! 4. **Serve** until SIGINT/SIGTERM, then drain and flush spans.

mod config;
mod telemetry;

use std::sync::Arc;

use anyhow::Context;
use listener::{EventListener, FunctionRegistry};
use relay::EventGridTrigger;
use tracing::{info, warn};
use webhook::WebhookClient;

use crate::config::RelayConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = RelayConfig::from_env().context("invalid configuration")?;
    let telemetry = telemetry::init(&config)?;

    let result = run(config).await;
    if let Err(err) = &result {
        tracing::error!(error = %err, "Event relay terminated with an error");
    }

    telemetry.shutdown();
    result
}

async fn run(config: RelayConfig) -> anyhow::Result<()> {
    match &config.webhook_endpoint {
        Some(endpoint) => info!(%endpoint, "Relaying events to webhook endpoint"),
        None => warn!("No webhook endpoint configured; events will be logged and dropped"),
    }

    let poster = Arc::new(
        WebhookClient::new(config.webhook_endpoint).context("failed to build HTTP client")?,
    );

    let mut functions = FunctionRegistry::new();
    functions.register(EventGridTrigger::new(poster));

    let bound = EventListener::new(config.listener, functions)
        .bind()
        .await
        .context("failed to start listener")?;

    bound
        .serve(shutdown_signal())
        .await
        .context("listener failed")?;

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
