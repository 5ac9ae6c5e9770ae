pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use redpen_core::Aligner;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub aligner: Arc<Aligner>,
    pub max_text_chars: usize,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            aligner: Arc::new(Aligner::new(config.aligner.clone())),
            max_text_chars: config.max_text_chars,
        }
    }
}

/// Build the router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/compare", post(routes::compare::compare))
        .route("/api/config", get(routes::config::show))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        lookahead = config.aligner.lookahead,
        max_text_chars = config.max_text_chars,
        "Loaded aligner configuration"
    );

    let state = AppState::from_config(&config);

    let router = app(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
