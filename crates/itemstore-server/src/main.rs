//! itemstore server
//!
//! CRUD over a key-value store:
//! - `POST /items`, `GET|PUT|DELETE /items/:id`
//! - `/metrics` in Prometheus text format, `/healthz`, `/readyz`
//! - Graceful shutdown on SIGINT/SIGTERM

use itemstore_core::error::Result;
use itemstore_server::{app_state::AppState, config, infra, obs, router};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!(error = %e, "itemstore-server failed");
        eprintln!("itemstore-server: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = std::env::var(config::CONFIG_PATH_ENV)
        .unwrap_or_else(|_| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_or_default(&path)?;
    obs::logging::init(&cfg.logging);
    tracing::info!(config = %path, "config loaded");

    let listen = cfg.server.listen_addr()?;
    let backend = infra::connect(&cfg.backend).await?;
    let state = AppState::new(cfg, backend)?;
    let app = router::build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| itemstore_core::ItemStoreError::Internal(format!("bind {listen}: {e}")))?;
    tracing::info!(%listen, "itemstore-server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| itemstore_core::ItemStoreError::Internal(format!("server: {e}")))?;

    tracing::info!("itemstore-server stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    state.set_draining();
    tracing::info!("signal received, starting graceful shutdown");
}
