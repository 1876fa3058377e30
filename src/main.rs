use console_lib::{config, routes, state::AppState};
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{Level, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Starting Groq console gateway...");

    let config = config::load_config()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;
    let port = config.port;

    let app_state = Arc::new(AppState::new(config));
    let app = routes::create_router(app_state).layer(
        TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::new().level(Level::INFO)),
    );

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", port, e))?;

    info!("Server is running on port {}", port);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
