use anyhow::Context;
use axum::http;
use database::Database;
use std::sync::Arc;
use supportbot_api::config::Config;
use supportbot_api::services::openai::OpenAiClient;
use supportbot_api::state::AppState;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load Config
    let config = Config::from_env().context("Invalid configuration")?;

    // Connect to Database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // One client serves both remote endpoints
    let openai = Arc::new(OpenAiClient::new(&config.openai)?);

    let app_state = AppState {
        store: db,
        embedder: openai.clone(),
        completer: openai,
    };

    // Setup CORS for the browser chat widget
    let cors = CorsLayer::new()
        .allow_methods([http::Method::GET, http::Method::POST])
        .allow_headers([http::header::CONTENT_TYPE, http::header::ACCEPT]);
    let cors = match &config.cors_allow_origin {
        Some(origin) => cors.allow_origin(
            origin
                .parse::<http::HeaderValue>()
                .with_context(|| format!("Invalid CORS_ALLOW_ORIGIN '{}'", origin))?,
        ),
        None => cors.allow_origin(Any),
    };

    let app = supportbot_api::app(app_state).layer(cors);

    // Start Server
    tracing::info!("SupportBot API listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
