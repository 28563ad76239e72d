//! API Server Application

use anyhow::Result;
use proeventos_api::{create_router, AppState};
use proeventos_core::{EventoStore, MemoryEventoStore};
use proeventos_persistence::SqliteEventoStore;
use proeventos_utils::AppConfig;
use std::net::SocketAddr;
use std::sync::Arc;

/// `DATABASE_URL` value that selects the in-memory store
const MEMORY_STORE: &str = "memory";

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load();

    // Initialize logger
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter())
    ).init();

    let store: Arc<dyn EventoStore> = if config.database_url == MEMORY_STORE {
        log::warn!("Using in-memory store, data is lost on exit");
        Arc::new(MemoryEventoStore::new())
    } else {
        Arc::new(SqliteEventoStore::connect(&config.database_url).await?)
    };

    let app = create_router(AppState::new(store));

    let addr: SocketAddr = config.bind_address().parse()?;
    log::info!("🚀 {} starting at http://{}", config.app_name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
