//! Startup configuration.
//!
//! Read once from the process environment into an immutable [`RelayConfig`].
//! [`RelayConfig::from_lookup`] takes the variable source as a function so
//! tests never touch the real environment.

use std::num::ParseIntError;

use listener::ListenerConfig;
use relay::{RelayError, WebhookEndpoint};
use thiserror::Error;

/// Destination URL for every relayed payload. Blank or unset disables delivery.
pub const WEBHOOK_ENDPOINT_VAR: &str = "WebhookEndpointUrl";
/// Port assigned by the Functions host to a custom handler.
pub const PORT_VAR: &str = "FUNCTIONS_CUSTOMHANDLER_PORT";
/// Address the listener binds; defaults to loopback.
pub const HOST_VAR: &str = "EVENTRELAY_HOST";
/// Log output format, `json` or `pretty`.
pub const LOG_FORMAT_VAR: &str = "EVENTRELAY_LOG_FORMAT";
/// Standard OpenTelemetry variable; span export is enabled only when set.
pub const OTLP_ENDPOINT_VAR: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

/// Configuration errors. Any of these stops startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a port number, got '{value}': {source}")]
    InvalidPort {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{var} must be 'json' or 'pretty', got '{value}'")]
    UnknownLogFormat { var: &'static str, value: String },

    #[error(transparent)]
    Endpoint(#[from] RelayError),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event, for log collectors.
    #[default]
    Json,
    /// Multi-line human-readable output, for local development.
    Pretty,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(ConfigError::UnknownLogFormat {
                var: LOG_FORMAT_VAR,
                value: s.to_string(),
            }),
        }
    }
}

/// Process configuration, read once at startup and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Destination of every event payload. `None` when delivery is disabled.
    pub webhook_endpoint: Option<WebhookEndpoint>,
    /// Address the inbound HTTP listener binds.
    pub listener: ListenerConfig,
    /// Format of the log lines written to stdout.
    pub log_format: LogFormat,
    /// OTLP collector endpoint. Span export is off when `None`.
    pub otlp_endpoint: Option<String>,
}

impl RelayConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let webhook_endpoint = match lookup(WEBHOOK_ENDPOINT_VAR) {
            Some(value) => WebhookEndpoint::parse(&value)?,
            None => None,
        };

        let defaults = ListenerConfig::default();
        let port = match non_blank(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort {
                    var: PORT_VAR,
                    value,
                    source,
                })?,
            None => defaults.port,
        };
        let host = non_blank(HOST_VAR).unwrap_or(defaults.host);

        let log_format = match non_blank(LOG_FORMAT_VAR) {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            webhook_endpoint,
            listener: ListenerConfig::new(host, port),
            log_format,
            otlp_endpoint: non_blank(OTLP_ENDPOINT_VAR),
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
