use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::config::models::BackendType;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
    pub backend_type: BackendType,
}

/// Health check endpoint for process management.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        model_loaded: state.model_loaded(),
        backend_type: state.backend_type,
    })
}
