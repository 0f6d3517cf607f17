//! Listener server.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::{router, FunctionRegistry, ListenerError};

/// Listener configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerConfig {
    /// Host name or IP address to bind.
    pub host: String,
    /// TCP port to bind; `0` picks a free port.
    pub port: u16,
}

impl ListenerConfig {
    /// Creates a configuration for `host:port`.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// The `host:port` address to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    /// `127.0.0.1:7071`, the Functions host's local default.
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7071,
        }
    }
}

/// The trigger host: a function registry plus the address to serve it on.
pub struct EventListener {
    config: ListenerConfig,
    functions: Arc<FunctionRegistry>,
}

impl EventListener {
    /// Creates a listener serving `functions`. Nothing is bound until [`Self::bind`].
    pub fn new(config: ListenerConfig, functions: FunctionRegistry) -> Self {
        Self {
            config,
            functions: Arc::new(functions),
        }
    }

    /// The router this listener serves.
    pub fn router(&self) -> Router {
        router(Arc::clone(&self.functions))
    }

    /// Binds the listening socket without accepting connections yet.
    pub async fn bind(self) -> Result<BoundListener, ListenerError> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(addr.as_str())
            .await
            .map_err(|source| ListenerError::Bind {
                addr: addr.clone(),
                source,
            })?;

        Ok(BoundListener {
            router: self.router(),
            listener,
        })
    }
}

/// A listener whose socket is bound and ready to serve.
pub struct BoundListener {
    listener: TcpListener,
    router: Router,
}

impl BoundListener {
    /// The actual bound address (useful when binding port `0`).
    pub fn local_addr(&self) -> Result<SocketAddr, ListenerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves deliveries until `shutdown` resolves, then drains in-flight requests.
    pub async fn serve<F>(self, shutdown: F) -> Result<(), ListenerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        info!(%addr, "Listening for Event Grid deliveries");

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Listener stopped");
        Ok(())
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
