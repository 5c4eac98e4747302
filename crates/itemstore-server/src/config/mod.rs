//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use itemstore_core::error::{ItemStoreError, Result};

pub use schema::{
    AppConfig, BackendKind, BackendSection, LogFormat, LoggingSection, MetricsSection, RouteLabel,
    ServerSection,
};

/// Env var naming the config file path.
pub const CONFIG_PATH_ENV: &str = "ITEMSTORE_CONFIG";
/// Config file used when the env var is unset.
pub const DEFAULT_CONFIG_PATH: &str = "itemstore.yaml";

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ItemStoreError::Config(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<AppConfig> {
    let cfg: AppConfig = serde_yaml::from_str(s)
        .map_err(|e| ItemStoreError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` if it exists, otherwise fall back to built-in defaults.
/// A file that exists but fails to parse or validate is still an error.
pub fn load_or_default(path: &str) -> Result<AppConfig> {
    if Path::new(path).exists() {
        load_from_file(path)
    } else {
        let cfg = AppConfig::default();
        cfg.validate()?;
        Ok(cfg)
    }
}
