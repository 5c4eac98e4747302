//! Redis-backed [`ItemBackend`].
//!
//! Uses a single multiplexed `ConnectionManager`: clones share one connection,
//! commands from concurrent handlers are pipelined on it, and the manager
//! reconnects on its own after transient failures.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, RedisError};

use itemstore_core::error::{ItemStoreError, Result};
use itemstore_core::ItemBackend;

#[derive(Clone)]
pub struct RedisBackend {
    conn: ConnectionManager,
}

impl RedisBackend {
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(backend_error)?;
        let conn = ConnectionManager::new(client).await.map_err(backend_error)?;
        tracing::info!(url = %redact_url(url), "connected to redis");
        Ok(Self { conn })
    }
}

/// Drop the userinfo part (`user:password@`) of a connection URL.
pub fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_owned();
    };
    let authority_end = rest.find('/').unwrap_or(rest.len());
    let (authority, path) = rest.split_at(authority_end);
    match authority.rsplit_once('@') {
        Some((_, host)) => format!("{scheme}://{host}{path}"),
        None => url.to_owned(),
    }
}

fn backend_error(e: RedisError) -> ItemStoreError {
    ItemStoreError::Backend(e.to_string())
}

#[async_trait]
impl ItemBackend for RedisBackend {
    fn kind(&self) -> &'static str {
        "redis"
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await.map_err(backend_error)?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.set(key, value).await.map_err(backend_error)?;
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        let found: bool = conn.exists(key).await.map_err(backend_error)?;
        Ok(found)
    }

    async fn delete(&self, key: &str) -> Result<u64> {
        let mut conn = self.conn.clone();
        let removed: u64 = conn.del(key).await.map_err(backend_error)?;
        Ok(removed)
    }
}
