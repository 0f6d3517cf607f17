use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder};
use tracing::{debug, info};

use relay::{EventPayload, RelayError, WebhookEndpoint, WebhookPoster, WebhookResponse};

const USER_AGENT: &str = concat!("eventrelay/", env!("CARGO_PKG_VERSION"));

/// Posts event payloads to one fixed webhook endpoint.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    endpoint: Option<WebhookEndpoint>,
    http: Client,
}

impl WebhookClient {
    /// Creates a client for `endpoint`; `None` disables delivery.
    ///
    /// The HTTP client uses transport defaults: no request timeout is set.
    pub fn new(endpoint: Option<WebhookEndpoint>) -> Result<Self, RelayError> {
        let http = base_builder().build().map_err(client_error)?;
        Ok(Self { endpoint, http })
    }

    /// Rebuilds the shared HTTP client from a builder customised by `configure`
    /// (default headers, timeout, proxy, ...).
    ///
    /// The builder starts from this crate's defaults, so repeated calls do not
    /// accumulate; the last configuration wins. Takes `&mut self` so it can
    /// only run during setup, before the client is shared.
    pub fn configure_http<F>(&mut self, configure: F) -> Result<(), RelayError>
    where
        F: FnOnce(ClientBuilder) -> ClientBuilder,
    {
        self.http = configure(base_builder()).build().map_err(client_error)?;
        Ok(())
    }
}

#[async_trait]
impl WebhookPoster for WebhookClient {
    fn endpoint(&self) -> Option<&WebhookEndpoint> {
        self.endpoint.as_ref()
    }

    async fn post(&self, payload: EventPayload) -> Result<Option<WebhookResponse>, RelayError> {
        let Some(endpoint) = &self.endpoint else {
            info!("No webhook endpoint defined; skipping delivery");
            return Ok(None);
        };

        let body = payload.into_body()?;

        info!(endpoint = %endpoint, "Posting payload to webhook endpoint");
        let response = self
            .http
            .post(endpoint.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| transport_error(endpoint, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(endpoint, e))?;

        debug!(status, "Webhook endpoint responded");
        Ok(Some(WebhookResponse::new(status, body)))
    }
}

fn base_builder() -> ClientBuilder {
    Client::builder().user_agent(USER_AGENT)
}

fn client_error(err: reqwest::Error) -> RelayError {
    RelayError::HttpClient {
        message: err.to_string(),
    }
}

fn transport_error(endpoint: &WebhookEndpoint, err: reqwest::Error) -> RelayError {
    RelayError::Transport {
        endpoint: endpoint.to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
