use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::Result;

use super::ItemBackend;

/// In-process backend for local runs and tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: DashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Direct read bypassing the trait, for assertions.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|e| e.value().clone())
    }
}

#[async_trait]
impl ItemBackend for MemoryBackend {
    fn kind(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.peek(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.entries.contains_key(key))
    }

    async fn delete(&self, key: &str) -> Result<u64> {
        Ok(u64::from(self.entries.remove(key).is_some()))
    }
}
