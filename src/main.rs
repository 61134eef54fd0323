use functiongemma::{config::models::Config, routes, state::AppState};
use std::sync::Arc;
use tracing::{Level, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Starting FunctionGemma backend...");

    let config = Config::from_env();
    let port = config.port;
    let app_state = Arc::new(AppState::new(config));

    let router = routes::create_router(app_state);

    // Localhost only; the desktop app is the sole intended caller.
    let addr = format!("127.0.0.1:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    info!("Server is running on {}", addr);
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}
