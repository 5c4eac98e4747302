//! Shared application state for the item service.
//!
//! Built once at startup in a fixed order: config, backend, metrics registry
//! and instruments, logger. Handlers receive it through axum's `State`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use itemstore_core::error::Result;
use itemstore_core::{ItemBackend, ItemService};

use crate::config::AppConfig;
use crate::obs::logging::AppLogger;
use crate::obs::metrics::HttpMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: AppConfig,
    items: ItemService,
    metrics: HttpMetrics,
    logger: AppLogger,
    draining: AtomicBool,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: AppConfig, backend: Arc<dyn ItemBackend>) -> Result<Self> {
        let metrics = HttpMetrics::new(&cfg.metrics)?;
        let logger = AppLogger::new(&cfg.logging);

        tracing::info!(
            backend = backend.kind(),
            route_label = ?cfg.metrics.route_label,
            labels = logger.labels(),
            "app state ready"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                items: ItemService::new(backend),
                cfg,
                metrics,
                logger,
                draining: AtomicBool::new(false),
            }),
        })
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.inner.cfg
    }

    pub fn items(&self) -> &ItemService {
        &self.inner.items
    }

    pub fn metrics(&self) -> &HttpMetrics {
        &self.inner.metrics
    }

    pub fn logger(&self) -> &AppLogger {
        &self.inner.logger
    }

    /// Mark draining state (readiness turns 503).
    pub fn set_draining(&self) {
        self.inner.draining.store(true, Ordering::Relaxed);
    }

    pub fn is_draining(&self) -> bool {
        self.inner.draining.load(Ordering::Relaxed)
    }
}
