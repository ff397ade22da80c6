//! Backend connection config.
//!
//! The server publishes `config.json` next to the front end. Fetching it tells
//! the editor where the REST API and the Xtext WebSocket service live; any
//! field the server leaves out is derived from the page origin.

mod schema;

pub use schema::*;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::Result;

/// Name of the config document, relative to the base URL.
pub const ENDPOINT: &str = "config.json";

/// Base URL used when none was set at build time.
pub const DEFAULT_BASE_URL: &str = "/";

/// Base URL baked in at compile time through `REFINERY_BASE_URL`.
pub fn build_base_url() -> &'static str {
    option_env!("REFINERY_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// Where the front end is served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnvironment {
    origin: String,
    base_url: String,
}

impl HostEnvironment {
    /// `origin` is scheme, host and port, e.g. `http://localhost:1312`.
    pub fn new(origin: impl Into<String>, base_url: impl Into<String>) -> Self {
        let origin = origin.into();
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            base_url: base_url.into(),
        }
    }

    /// Use the compile-time base URL.
    pub fn from_build(origin: impl Into<String>) -> Self {
        Self::new(origin, build_base_url())
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base><endpoint>` resolved against the origin.
    pub fn config_url(&self) -> Result<Url> {
        let origin = Url::parse(&self.origin)?;
        Ok(origin.join(&format!("{}{}", self.base_url, ENDPOINT))?)
    }
}

/// Backend config with every field filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfigWithDefaults {
    #[serde(rename = "apiBase")]
    pub api_base: String,
    #[serde(rename = "webSocketURL")]
    pub web_socket_url: String,
}

impl BackendConfig {
    pub fn with_defaults(self, origin: &str) -> BackendConfigWithDefaults {
        BackendConfigWithDefaults {
            api_base: self
                .api_base
                .unwrap_or_else(|| default_api_base(origin)),
            web_socket_url: self
                .web_socket_url
                .unwrap_or_else(|| default_web_socket_url(origin)),
        }
    }
}

pub fn default_api_base(origin: &str) -> String {
    format!("{origin}/api/v1")
}

/// The origin with a leading `http` swapped for `ws`, plus the service path.
///
/// Only a literal leading `http` is replaced, so `https` becomes `wss` and an
/// origin without that prefix is kept as is.
pub fn default_web_socket_url(origin: &str) -> String {
    let origin = match origin.strip_prefix("http") {
        Some(rest) => format!("ws{rest}"),
        None => origin.to_string(),
    };
    format!("{origin}/xtext-service")
}

/// Fetch, validate and complete the backend config.
///
/// Issues exactly one request. The status code is not inspected: whatever the
/// server returned must parse as a valid config. Nothing is retried or cached.
pub async fn fetch_backend_config(
    client: &reqwest::Client,
    env: &HostEnvironment,
) -> Result<BackendConfigWithDefaults> {
    let url = env.config_url()?;
    tracing::debug!("Fetching backend config from {}", url);

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        tracing::warn!("Backend config request returned {}", status);
    }

    let body = response.bytes().await?;
    let raw: serde_json::Value = serde_json::from_slice(&body)?;
    let config = BackendConfig::validate(&raw)?.with_defaults(env.origin());

    tracing::info!(
        "Backend config loaded: api={} websocket={}",
        config.api_base,
        config.web_socket_url
    );
    Ok(config)
}
