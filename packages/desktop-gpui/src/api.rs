//! Backend connection state
//!
//! Owns the HTTP client and the Tokio runtime that backend requests run on.

use editor_core::{fetch_backend_config, BackendConfigWithDefaults, HostEnvironment};
use gpui::*;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Outcome of the last backend config fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigStatus {
    Loading,
    Loaded(BackendConfigWithDefaults),
    Failed(String),
}

/// Global backend state with Tokio runtime for HTTP operations
pub struct BackendState {
    pub client: reqwest::Client,
    pub env: HostEnvironment,
    pub config: ConfigStatus,
    /// Tokio runtime handle for HTTP operations
    pub runtime: Arc<Runtime>,
}

impl BackendState {
    fn new(env: HostEnvironment) -> Self {
        // Create a dedicated Tokio runtime for HTTP operations
        let runtime = Runtime::new().expect("Failed to create Tokio runtime");

        // Create the reqwest client within the Tokio runtime context
        let client = runtime.block_on(async { reqwest::Client::new() });

        Self {
            client,
            env,
            config: ConfigStatus::Loading,
            runtime: Arc::new(runtime),
        }
    }
}

impl Global for BackendState {}

/// Initialize the backend client from the current settings
pub fn init(cx: &mut App) {
    let env = crate::settings::current(cx).host_environment();
    tracing::debug!("Backend client initialized for {}", env.origin());
    cx.set_global(BackendState::new(env));
}

/// Fetch the backend config on the Tokio runtime.
///
/// Every call issues a fresh request; the outcome is flattened into a
/// [`ConfigStatus`] for display.
pub async fn fetch_config(
    client: reqwest::Client,
    env: HostEnvironment,
    runtime: Arc<Runtime>,
) -> ConfigStatus {
    let fetched = runtime
        .spawn(async move { fetch_backend_config(&client, &env).await })
        .await;

    match fetched {
        Ok(Ok(config)) => ConfigStatus::Loaded(config),
        Ok(Err(err)) => {
            tracing::warn!("Failed to load backend config: {}", err);
            ConfigStatus::Failed(err.to_string())
        }
        Err(err) => {
            tracing::warn!("Failed to spawn config fetch: {}", err);
            ConfigStatus::Failed(format!("spawn failed: {err}"))
        }
    }
}
