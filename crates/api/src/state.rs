use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::upstream::backend::BackendClient;
use crate::upstream::build_http_client;
use crate::upstream::gemini::GeminiClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Forwarding client for the item backend.
    pub backend: Arc<BackendClient>,
    /// Summary client; `None` when `GEMINI_API_KEY` is not configured.
    pub gemini: Option<Arc<GeminiClient>>,
}

impl AppState {
    /// Build state from configuration, sharing one pooled HTTP client between
    /// the backend and Gemini clients.
    pub fn from_config(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = build_http_client(Duration::from_secs(config.upstream_timeout_secs))?;

        let backend = BackendClient::new(http.clone(), config.backend_url.clone());
        let gemini = GeminiClient::from_config(http, &config.gemini).map(Arc::new);

        Ok(Self {
            config: Arc::new(config),
            backend: Arc::new(backend),
            gemini,
        })
    }
}
