use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;
use itemstore_core::error::{ItemStoreError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub backend: BackendSection,

    #[serde(default)]
    pub metrics: MetricsSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            backend: BackendSection::default(),
            metrics: MetricsSection::default(),
            logging: LoggingSection::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ItemStoreError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.backend.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Artificial delay of `GET /slow`.
    #[serde(default = "default_slow_delay_ms")]
    pub slow_delay_ms: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            slow_delay_ms: default_slow_delay_ms(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if self.slow_delay_ms > 60_000 {
            return Err(ItemStoreError::Config(
                "server.slow_delay_ms must be at most 60000".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            ItemStoreError::Config(format!(
                "server.listen must be a valid SocketAddr ({}): {e}",
                self.listen
            ))
        })
    }

    pub fn slow_delay(&self) -> Duration {
        Duration::from_millis(self.slow_delay_ms)
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_slow_delay_ms() -> u64 {
    5000
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    Redis,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendSection {
    #[serde(default = "default_backend_kind")]
    pub kind: BackendKind,

    #[serde(default = "default_redis_url")]
    pub url: String,
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            kind: default_backend_kind(),
            url: default_redis_url(),
        }
    }
}

impl BackendSection {
    pub fn validate(&self) -> Result<()> {
        if self.kind == BackendKind::Redis && self.url.trim().is_empty() {
            return Err(ItemStoreError::Config(
                "backend.url must not be empty for the redis backend".into(),
            ));
        }
        Ok(())
    }
}

fn default_backend_kind() -> BackendKind {
    BackendKind::Redis
}
fn default_redis_url() -> String {
    "redis://127.0.0.1:6379".into()
}

/// How the `route` label of the latency histogram is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteLabel {
    /// Matched route pattern, e.g. `/items/:id`.
    #[default]
    Matched,
    /// Raw request path. Label cardinality grows with distinct ids.
    Raw,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    #[serde(default)]
    pub route_label: RouteLabel,

    /// Register the process collector (CPU, memory, fds). Linux only.
    #[serde(default = "default_true")]
    pub process: bool,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            route_label: RouteLabel::default(),
            process: default_true(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    #[serde(default)]
    pub format: LogFormat,

    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Static labels attached to application log lines.
    #[serde(default = "default_labels")]
    pub labels: BTreeMap<String, String>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: default_filter(),
            labels: default_labels(),
        }
    }
}

impl LoggingSection {
    pub fn validate(&self) -> Result<()> {
        if self.labels.keys().any(|k| k.trim().is_empty()) {
            return Err(ItemStoreError::Config(
                "logging.labels keys must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_filter() -> String {
    "info".into()
}
fn default_labels() -> BTreeMap<String, String> {
    BTreeMap::from([("app_name".to_string(), "itemstore".to_string())])
}
fn default_true() -> bool {
    true
}
