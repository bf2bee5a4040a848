// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use aquaenv_dashboard::application::env_service::EnvService;
use aquaenv_dashboard::infrastructure::config::load_app_config;
use aquaenv_dashboard::infrastructure::graphql_repository::GraphqlRepository;
use aquaenv_dashboard::infrastructure::mjpeg_source::MjpegUpstream;
use aquaenv_dashboard::presentation::app_state::AppState;
use aquaenv_dashboard::presentation::handlers::{
    env_window, graphql_passthrough, health_check, relay_stream,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let app_config = load_app_config()?;

    // Create upstream adapters (infrastructure layer)
    let repository = Arc::new(GraphqlRepository::new(
        app_config.upstream.graphql_url.clone(),
    ));
    let stream_source = Arc::new(MjpegUpstream::new(app_config.upstream.mjpeg_url.clone()));

    // Create services (application layer)
    let env_service = EnvService::new(repository);

    // Create application state
    let state = Arc::new(AppState {
        env_service,
        stream_source,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/env", get(env_window))
        .route("/graphql", post(graphql_passthrough))
        .route("/stream", get(relay_stream))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = app_config.server.listen_addr.parse()?;
    println!("Starting aquaenv-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
