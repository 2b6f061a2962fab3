//! Mastofeed server
//!
//! Republishes a Mastodon home timeline as RSS and HTML feeds, and proxies
//! like/boost/reply actions from the HTML feed back to the origin instance.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::MastodonClientImpl;
use app::{ActionService, TimelineService};
use config::Config;
use domain::ports::MastodonClient;

/// Headroom on top of the outbound timeout for rendering and writing
const RESPONSE_GRACE: Duration = Duration::from_secs(5);

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub timeline_service: Arc<TimelineService<dyn MastodonClient>>,
    pub action_service: Arc<ActionService<dyn MastodonClient>>,
    /// Origin instance base URL, used as the RSS channel link
    pub instance_url: String,
    pub home_instance: String,
}

impl AppState {
    pub fn new(mastodon: Arc<dyn MastodonClient>, instance_url: String, home_instance: String) -> Self {
        Self {
            timeline_service: Arc::new(TimelineService::new(
                mastodon.clone(),
                home_instance.clone(),
            )),
            action_service: Arc::new(ActionService::new(mastodon)),
            instance_url,
            home_instance,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Feeds
        .route("/feed.rss", get(handlers::get_rss_feed))
        .route("/feed.html", get(handlers::get_html_feed))
        .route("/debug", get(handlers::get_debug))
        // Action proxy
        .route("/api/like/", post(handlers::missing_post_id))
        .route("/api/like/:post_id", post(handlers::post_like))
        .route("/api/boost/", post(handlers::missing_post_id))
        .route("/api/boost/:post_id", post(handlers::post_boost))
        .route("/api/reply/", post(handlers::missing_post_id))
        .route("/api/reply/:post_id", post(handlers::post_reply))
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mastofeed=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Mastofeed...");

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            tracing::error!(
                "Required: MASTODON_INSTANCE (e.g. https://fosstodon.org) and MASTODON_TOKEN. \
                 Optional: HOME_INSTANCE (e.g. mastodon.social), PORT, HTTP_TIMEOUT_SECS"
            );
            return Err(e).context("Invalid configuration");
        }
    };
    tracing::debug!(?config, "Configuration loaded");
    tracing::info!("Using home instance: {}", config.home_instance);

    let mastodon: Arc<dyn MastodonClient> = Arc::new(
        MastodonClientImpl::new(
            config.mastodon_url.clone(),
            config.mastodon_token.clone(),
            config.http_timeout,
        )
        .context("Failed to build HTTP client")?,
    );

    let state = AppState::new(
        mastodon,
        config.mastodon_url.clone(),
        config.home_instance.clone(),
    );
    let app = build_router(state, config.http_timeout + RESPONSE_GRACE);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Serving feeds on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
