use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Failure taxonomy for the completions surface. Client-input errors map
/// to 422; everything else signals an unavailable or failing backend and
/// maps to 500 with the message passed through verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Messages array cannot be empty")]
    EmptyMessages,
    #[error("Model not loaded")]
    ModelNotLoaded,
    #[error("Local model inference not yet implemented")]
    LocalNotImplemented,
    #[error("{0}")]
    Inference(String),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::EmptyMessages => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ModelNotLoaded | ApiError::LocalNotImplemented | ApiError::Inference(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
