//! Structured logging.
//!
//! `init` installs the process-wide `tracing` subscriber once at startup.
//! `AppLogger` carries the static label set from config and is handed to
//! handlers through `AppState`.

use std::fmt::Write;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, LoggingSection};

/// Install the global subscriber. `RUST_LOG` wins over `cfg.filter`.
pub fn init(cfg: &LoggingSection) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.filter));
    let builder = fmt().with_env_filter(filter);
    let installed = match cfg.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if let Err(e) = installed {
        tracing::warn!(error = %e, "tracing subscriber already installed");
    }
}

/// Application logger with static labels rendered once as `k=v,k=v`.
#[derive(Debug, Clone)]
pub struct AppLogger {
    labels: String,
}

impl AppLogger {
    pub fn new(cfg: &LoggingSection) -> Self {
        let mut labels = String::new();
        for (k, v) in &cfg.labels {
            if !labels.is_empty() {
                labels.push(',');
            }
            let _ = write!(labels, "{k}={v}");
        }
        Self { labels }
    }

    pub fn labels(&self) -> &str {
        &self.labels
    }

    /// Informational line for a request on `route`.
    pub fn request(&self, route: &str, message: &str) {
        tracing::info!(target: "itemstore::access", labels = %self.labels, route, "{message}");
    }
}
