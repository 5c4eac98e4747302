//! Key-value backend capability.
//!
//! The CRUD service depends on this trait rather than a concrete network
//! client. Each method maps to one store command; implementations own
//! connectivity and must be safe to share across concurrent requests.

mod memory;

use async_trait::async_trait;

use crate::error::Result;

pub use memory::MemoryBackend;

#[async_trait]
pub trait ItemBackend: Send + Sync {
    /// Short name used in logs (e.g. "redis", "memory").
    fn kind(&self) -> &'static str;

    /// Value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    async fn exists(&self, key: &str) -> Result<bool>;

    /// Remove `key`. Returns the number of keys removed (0 or 1).
    async fn delete(&self, key: &str) -> Result<u64>;
}
