//! Network backends.

pub mod redis;

use std::sync::Arc;

use itemstore_core::error::Result;
use itemstore_core::{ItemBackend, MemoryBackend};

use crate::config::{BackendKind, BackendSection};

pub use self::redis::RedisBackend;

/// Build the backend selected by config.
pub async fn connect(cfg: &BackendSection) -> Result<Arc<dyn ItemBackend>> {
    match cfg.kind {
        BackendKind::Redis => Ok(Arc::new(RedisBackend::connect(&cfg.url).await?)),
        BackendKind::Memory => {
            tracing::warn!("using in-memory backend; data is lost on restart");
            Ok(Arc::new(MemoryBackend::new()))
        }
    }
}
