use async_trait::async_trait;
use reqwest::Client;
use tracing::error;

use super::models::{GeminiGenerateRequest, GeminiGenerateResponse};
use crate::config::constants::GEMINI_MODEL;
use crate::errors::ApiError;
use crate::models::chat::{ChatCompletion, ChatCompletionRequest};
use crate::providers::provider::Provider;

pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    http_client: Client,
}

impl GeminiProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http_client: Client::new(),
        }
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn r#type(&self) -> &'static str {
        "gemini"
    }

    async fn chat_completions(
        &self,
        payload: ChatCompletionRequest,
    ) -> Result<ChatCompletion, ApiError> {
        let request = GeminiGenerateRequest::from_openai(&payload)
            .map_err(|e| ApiError::Inference(e.to_string()))?;

        // The request's model field names this service's facade, not a
        // Gemini model; inference always targets the configured one.
        let url = format!("{}/models/{}:generateContent", self.base_url, GEMINI_MODEL);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("[Gemini] API request error: {}", e);
                ApiError::Inference(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("[Gemini] API call failed: {}", error_text);
            return Err(ApiError::Inference(error_text));
        }

        let gemini_response: GeminiGenerateResponse = response.json().await.map_err(|e| {
            error!("[Gemini] Failed to parse response: {}", e);
            ApiError::Inference(e.to_string())
        })?;

        Ok(gemini_response.to_openai(GEMINI_MODEL.to_string()))
    }
}
