use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use darshan_api::config::Config;
use darshan_api::rail::RailClient;
use darshan_api::routes::build_router;
use darshan_api::state::AppState;
use gemini_client::GeminiClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting darshan-api v{}", env!("CARGO_PKG_VERSION"));

    // Initialize Gemini client
    let gemini = GeminiClient::with_base_url(
        config.gemini_base_url.clone(),
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    );
    info!("Gemini client initialized (model: {})", gemini.model());

    // Initialize train schedule client
    let rail = RailClient::with_base_url(
        config.rail_base_url.clone(),
        config.rail_api_key.clone(),
    );
    info!("Rail client initialized");

    let state = AppState { gemini, rail };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
