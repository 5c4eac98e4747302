//! Shared harness: runs the real router on an ephemeral port.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;

use itemstore_core::{ItemBackend, ItemStoreError, MemoryBackend, Result};
use itemstore_server::{app_state::AppState, config::AppConfig, router};

pub struct TestServer {
    pub addr: SocketAddr,
    pub state: AppState,
    pub client: reqwest::Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Memory backend, process collector off, short slow delay.
    pub async fn spawn() -> (Self, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new());
        let server = Self::spawn_with(test_config(), backend.clone()).await;
        (server, backend)
    }

    pub async fn spawn_with(cfg: AppConfig, backend: Arc<dyn ItemBackend>) -> Self {
        let state = AppState::new(cfg, backend).expect("state");
        let app = router::build_router(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self {
            addr,
            state,
            client: reqwest::Client::new(),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client.delete(self.url(path)).send().await.unwrap()
    }

    pub async fn post_json(&self, path: &str, body: serde_json::Value) -> reqwest::Response {
        self.client.post(self.url(path)).json(&body).send().await.unwrap()
    }

    pub async fn put_json(&self, path: &str, body: serde_json::Value) -> reqwest::Response {
        self.client.put(self.url(path)).json(&body).send().await.unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn test_config() -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.metrics.process = false;
    cfg.server.slow_delay_ms = 50;
    cfg
}

/// Backend whose every command fails, as if the store were unreachable.
pub struct UnreachableBackend;

#[async_trait]
impl ItemBackend for UnreachableBackend {
    fn kind(&self) -> &'static str {
        "unreachable"
    }
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(ItemStoreError::Backend("connection refused".into()))
    }
    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(ItemStoreError::Backend("connection refused".into()))
    }
    async fn exists(&self, _key: &str) -> Result<bool> {
        Err(ItemStoreError::Backend("connection refused".into()))
    }
    async fn delete(&self, _key: &str) -> Result<u64> {
        Err(ItemStoreError::Backend("connection refused".into()))
    }
}
