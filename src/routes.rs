use crate::{handlers, state::AppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<AppState>) -> Router {
    let v1_routes = Router::new().route("/chat/completions", post(handlers::chat::completions));

    Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/v1", v1_routes)
        .layer(TraceLayer::new_for_http())
        // The desktop client runs on a different origin and sends
        // credentials.
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}
