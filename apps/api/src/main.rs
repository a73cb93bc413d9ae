mod config;
mod display;
mod errors;
mod listing;
mod models;
mod routes;
mod session;
mod state;
mod storage;
mod tracker;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StorageBackend};
use crate::models::TrackerState;
use crate::routes::build_router;
use crate::session::ManagerSession;
use crate::state::AppState;
use crate::storage::{FileStore, KeyValueStore, MemoryStore, PersistentSlot};
use crate::tracker::JobTracker;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so RUST_LOG from .env is visible
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting job tracker v{}", env!("CARGO_PKG_VERSION"));

    // Storage slot
    let store: Arc<dyn KeyValueStore> = match config.storage_backend {
        StorageBackend::File => {
            let store = FileStore::new(&config.data_dir);
            info!("Persisting to {}", store.dir().display());
            Arc::new(store)
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage; state will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };
    let slot = PersistentSlot::new(store, config.storage_key.clone());

    let tracker = JobTracker::load(
        slot,
        TrackerState::with_target(config.default_target_job_count),
    );
    let state = AppState::new(ManagerSession::new(tracker));

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
