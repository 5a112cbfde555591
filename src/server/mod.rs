//! HTTP host: an upload form and a conversion endpoint around [`Converter`].

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::Converter;

mod config;
pub use self::config::{CalendarConfig, LoggingConfig, ServerConfig, Settings};

mod error;
pub use error::UploadError;

pub mod routes;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    converter: Arc<Converter>,
}

impl AppState {
    pub fn new(converter: Converter) -> Self {
        Self {
            converter: Arc::new(converter),
        }
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }
}

pub fn router(settings: &Settings) -> Router {
    let state = AppState::new(Converter::new(settings.calendar.converter_options()));

    Router::new()
        .route("/", get(routes::index))
        .route("/upload", post(routes::upload))
        .layer(DefaultBodyLimit::max(settings.server.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Install the global `tracing` subscriber. `RUST_LOG` takes precedence over
/// the configured level.
pub fn init_tracing(logging: &LoggingConfig) {
    let (filter, invalid_level) = match EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
    {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new("info"), true),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();

    if invalid_level {
        tracing::warn!(level = %logging.level, "Invalid log level in config, using info");
    }
}

/// Bind the configured address and serve until interrupted.
///
/// ## Errors
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(settings: Settings) -> anyhow::Result<()> {
    let addr = settings.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("icsfix listening on http://{addr}");

    axum::serve(listener, router(&settings))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
