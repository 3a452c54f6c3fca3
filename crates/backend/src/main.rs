//! SteamGuessr Proxy Server
//!
//! Provides:
//! - Review highlights for a game (Steam store reviews)
//! - App details (title, header image)
//! - Top owned games listing (SteamSpy)
//! - Guess checking

mod config;
mod error;
mod routes;
mod steam_api;
mod steamspy;

use axum::{routing::get, Router};
use config::ServerConfig;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub struct AppState {
    pub config: ServerConfig,
    /// Shared upstream client (pooled, cheap to clone)
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .user_agent("SteamGuessr/1.0")
            .build()?;
        Ok(Self { config, http })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Steam store proxy
        .route("/api/reviews/{appid}", get(routes::get_reviews))
        .route("/api/appdetails/{appid}", get(routes::get_app_details))
        // SteamSpy proxy
        .route("/api/top500appids", get(routes::get_top_appids))
        // Guess checks
        .route("/api/check-appid/{appid}", get(routes::check_appid))
        .route("/api/guess/{appid}", get(routes::guess_title))
        .with_state(state)
        .layer(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "steamguessr_backend=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(
        store = %config.steam_store_url,
        steamspy = %config.steamspy_url,
        "Upstreams configured"
    );

    let addr = config.bind_address.clone();
    let state = Arc::new(AppState::new(config).expect("Failed to create HTTP client"));
    let app = router(state);

    tracing::info!("Proxy server running on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
