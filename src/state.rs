use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::constants::GEMINI_MODEL;
use crate::config::models::{BackendType, Config};
use crate::providers::{GeminiProvider, Provider};

/// Constructed once at startup and shared read-only across requests; all
/// per-request translation work is stateless.
pub struct AppState {
    pub config: Config,
    pub backend_type: BackendType,
    pub backend: Option<Arc<dyn Provider>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let backend_type = resolve_backend_type(&config);

        let backend: Option<Arc<dyn Provider>> = match &config.gemini_api_key {
            Some(api_key) => {
                info!(
                    "[Gemini] Client initialized successfully with model: {}",
                    GEMINI_MODEL
                );
                Some(Arc::new(GeminiProvider::new(
                    api_key.clone(),
                    config.base_url.clone(),
                )))
            }
            None => {
                warn!("[Gemini] No GEMINI_API_KEY found in environment");
                None
            }
        };

        Self {
            config,
            backend_type,
            backend,
        }
    }

    /// Inject a specific backend, bypassing environment-driven selection.
    /// Used by tests to exercise the local and unloaded paths.
    pub fn with_backend(
        config: Config,
        backend_type: BackendType,
        backend: Option<Arc<dyn Provider>>,
    ) -> Self {
        Self {
            config,
            backend_type,
            backend,
        }
    }

    pub fn model_loaded(&self) -> bool {
        self.backend.is_some()
    }
}

/// A configured MODEL_PATH is acknowledged but never activates local
/// inference; the service falls back to the Gemini API every time.
fn resolve_backend_type(config: &Config) -> BackendType {
    if let Some(path) = &config.model_path {
        if Path::new(path).exists() {
            info!("[FunctionGemma] Local model path configured: {}", path);
            info!("[FunctionGemma] Local model support not yet implemented, using Gemini API");
        }
    }
    BackendType::Gemini
}
