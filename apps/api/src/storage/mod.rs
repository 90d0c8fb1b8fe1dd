//! Key-value persistence.
//!
//! The service only ever needs `get`/`set` on whole string values. Repositories own the
//! key layout and the JSON encoding; backends know nothing about either.

pub mod memory;
pub mod redis_store;

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{Config, StorageBackend};

pub use memory::InMemoryStore;
pub use redis_store::RedisStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Blocking-style string store. Last writer wins; callers serialize their own
/// read-modify-write cycles.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Builds the backend selected in config.
pub async fn build_store(config: &Config) -> Result<Arc<dyn KvStore>> {
    match &config.storage_backend {
        StorageBackend::Memory => {
            info!("Using in-memory store (data is lost on restart)");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StorageBackend::Redis { url } => {
            let store = RedisStore::connect(url)
                .await
                .context("Failed to connect to Redis")?;
            info!("Redis store connected");
            Ok(Arc::new(store))
        }
    }
}

/// Reads and decodes a JSON document. Missing keys and unparseable values both come
/// back as `None`; the latter is logged and otherwise treated as absent.
pub async fn load_json<T: DeserializeOwned>(
    store: &dyn KvStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!("Ignoring unparseable value under '{key}': {e}");
            Ok(None)
        }
    }
}

pub async fn save_json<T: Serialize + ?Sized>(
    store: &dyn KvStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, raw).await
}
