use std::env;

use serde::{Deserialize, Serialize};

use super::constants::{GEMINI_API_BASE_URL, default_port};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackendType {
    Local,
    Gemini,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Gates Gemini client initialization; without it the backend stays
    /// unloaded and the endpoint reports a server error.
    pub gemini_api_key: Option<String>,
    /// Read and logged, but local inference never activates; the service
    /// falls back to the Gemini API.
    pub model_path: Option<String>,
    pub base_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            model_path: env::var("MODEL_PATH").ok().filter(|p| !p.is_empty()),
            base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| GEMINI_API_BASE_URL.to_string()),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_reads_key_and_port() {
        temp_env::with_vars(
            [
                ("GEMINI_API_KEY", Some("test-key")),
                ("PORT", Some("9001")),
                ("MODEL_PATH", None),
                ("GEMINI_BASE_URL", None),
            ],
            || {
                let config = Config::from_env();
                assert_eq!(config.gemini_api_key.as_deref(), Some("test-key"));
                assert_eq!(config.port, 9001);
                assert_eq!(config.base_url, GEMINI_API_BASE_URL);
                assert!(config.model_path.is_none());
            },
        );
    }

    #[test]
    fn empty_key_counts_as_unset() {
        temp_env::with_vars([("GEMINI_API_KEY", Some("")), ("PORT", None)], || {
            let config = Config::from_env();
            assert!(config.gemini_api_key.is_none());
            assert_eq!(config.port, 8000);
        });
    }

    #[test]
    fn backend_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(BackendType::Gemini).unwrap(),
            serde_json::json!("gemini")
        );
        assert_eq!(
            serde_json::to_value(BackendType::Local).unwrap(),
            serde_json::json!("local")
        );
    }
}
