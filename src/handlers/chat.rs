use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::info;

use crate::errors::ApiError;
use crate::models::chat::{ChatCompletion, ChatCompletionRequest};
use crate::state::AppState;

/// OpenAI-compatible chat completions endpoint: validate, translate,
/// call the backend, translate back. Failures surface synchronously as a
/// `{"detail": ...}` envelope; there are no retries and no partial
/// responses.
pub async fn completions(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatCompletionRequest>,
) -> Result<Json<ChatCompletion>, ApiError> {
    if payload.messages.is_empty() {
        return Err(ApiError::EmptyMessages);
    }

    let backend = state.backend.clone().ok_or(ApiError::ModelNotLoaded)?;

    // Metadata only; message bodies stay out of the logs.
    info!(
        "[Request] messages={}, tools={}",
        payload.messages.len(),
        payload.tools.as_ref().map_or(0, |tools| tools.len())
    );

    if payload.tools.is_some() && payload.tool_choice.is_none() {
        // The translator applies the same default; this log mirrors it.
        info!("[Request] Auto-setting tool_choice='auto' since tools provided");
    }

    let response = backend.chat_completions(payload).await?;

    if let Some(choice) = response.choices.first() {
        info!(
            "[Response] finish_reason={}, has_tool_calls={}",
            choice.finish_reason,
            choice.message.tool_calls.is_some()
        );
    }

    Ok(Json(response))
}
