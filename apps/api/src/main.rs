mod ai_client;
mod catalog;
mod config;
mod errors;
mod guidance;
mod models;
mod profile;
mod quiz;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ai_client::GeminiClient;
use crate::catalog::careers::CareerCatalog;
use crate::config::Config;
use crate::profile::store::{ProfileStore, RedisProfileStore};
use crate::routes::build_router;
use crate::state::{AppState, Session};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting FutureNav API v{}", env!("CARGO_PKG_VERSION"));

    // Load the embedded career catalog
    let catalog = Arc::new(CareerCatalog::load_embedded()?);
    info!("Career catalog loaded ({} careers)", catalog.len());

    // Initialize the Redis-backed profile store
    let redis = redis::Client::open(config.redis_url.clone())?;
    let store: Arc<dyn ProfileStore> = Arc::new(RedisProfileStore::new(redis));
    info!("Profile store initialized");

    // Initialize AI client
    let ai = GeminiClient::new(config.gemini_api_key.clone());
    info!("AI client initialized (model: {})", ai_client::MODEL);

    // Restore the previous session's profile if one was persisted
    let session = Session {
        profile: store.load().await.unwrap_or_default(),
        ..Session::default()
    };

    // Build app state
    let state = AppState {
        catalog,
        session: Arc::new(RwLock::new(session)),
        store,
        ai,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
