use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::chat::{ChatCompletion, ChatCompletionRequest};
use crate::providers::provider::Provider;

/// Extension point for on-device FunctionGemma inference. No translation
/// happens here; every call fails until local loading lands.
#[derive(Default)]
pub struct LocalProvider;

impl LocalProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Provider for LocalProvider {
    fn r#type(&self) -> &'static str {
        "local"
    }

    async fn chat_completions(
        &self,
        _payload: ChatCompletionRequest,
    ) -> Result<ChatCompletion, ApiError> {
        Err(ApiError::LocalNotImplemented)
    }
}
