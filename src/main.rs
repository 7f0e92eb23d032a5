//! FabricAI Web
//!
//! Web client for the external fabric classification service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 FABRICAI WEB                 │
//! ├──────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────┐  ┌──────────┐  │
//! │  │  Router   │  │   Page    │  │ Renderer │  │
//! │  │  (Axum)   │─▶│   State   │─▶│ (Jinja)  │  │
//! │  └─────┬─────┘  └───────────┘  └──────────┘  │
//! │        ▼                                     │
//! │  ┌───────────────────┐                       │
//! │  │ ClassifierClient  │                       │
//! │  └─────────┬─────────┘                       │
//! └────────────┼─────────────────────────────────┘
//!              ▼  GET /info, POST /predict
//!     ┌───────────────────────┐
//!     │ Classification service│
//!     └───────────────────────┘
//! ```

mod classifier;
mod config;
mod error;
mod handlers;
mod models;
mod page;

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use std::net::SocketAddr;

use classifier::ClassifierClient;
use page::Renderer;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fabricai_web=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("FabricAI Web starting...");
    tracing::info!("Classification service: {}", config.classifier_url);

    // Build application state
    let state = AppState::new(config.clone())?;

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub classifier: ClassifierClient,
    pub renderer: Renderer,
}

impl AppState {
    pub fn new(config: config::Config) -> anyhow::Result<Self> {
        let classifier = ClassifierClient::from_config(&config)
            .context("failed to create classification service client")?;
        let renderer = Renderer::new().context("failed to compile templates")?;

        Ok(Self {
            config,
            classifier,
            renderer,
        })
    }
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::index))
        .route(
            "/klasifikasi",
            get(handlers::klasifikasi::show).post(handlers::klasifikasi::submit),
        )
        .route("/health", get(handlers::health::check))
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
