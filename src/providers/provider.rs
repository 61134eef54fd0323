use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::chat::{ChatCompletion, ChatCompletionRequest};

#[async_trait]
pub trait Provider: Send + Sync {
    fn r#type(&self) -> &'static str;

    async fn chat_completions(
        &self,
        payload: ChatCompletionRequest,
    ) -> Result<ChatCompletion, ApiError>;
}
