//! Oficina Server — application entry point.

use std::sync::Arc;

use oficina_core::clock::SystemClock;
use oficina_db::{MemoryBackend, RedbBackend, SharedBackend};
use oficina_server::{AppContext, ServerConfig, ServerError, StorageKind, build_router};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("oficina=info"));
    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    let config = ServerConfig::from_env()?;

    let backend: SharedBackend = match &config.storage {
        StorageKind::Memory => {
            tracing::warn!("using in-memory storage, data is lost on restart");
            Arc::new(MemoryBackend::new())
        }
        StorageKind::Redb(path) => {
            tracing::info!(path = %path.display(), "opening redb storage");
            Arc::new(RedbBackend::open(path)?)
        }
    };

    let state = AppContext::new(backend, config.auth, Arc::new(SystemClock)).into_state();
    let app = build_router(state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "Oficina server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    tracing::info!("Oficina server stopped.");
    Ok(())
}
