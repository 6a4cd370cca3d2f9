use std::sync::Arc;

use async_trait::async_trait;
use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::MediBookError;

pub mod in_memory;
pub mod keys;

/// Raw durable key-value substrate. Values are opaque JSON strings; typed
/// access goes through [`Store`].
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<String>, MediBookError>;
    async fn write(&self, key: &str, raw: String) -> Result<(), MediBookError>;
    async fn remove(&self, key: &str) -> Result<(), MediBookError>;
}

/// Typed handle over a shared [`KeyValueStore`].
///
/// Collections are stored as whole snapshots: callers read the full
/// collection, mutate a copy and write it back. Clones share the same
/// backend, so two handles model two concurrent sessions over one store
/// (last full-collection write wins).
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn KeyValueStore>,
}

impl Store {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Store {
            backend: Arc::new(backend),
        }
    }

    /// Reads and decodes the value under `key`. An absent key, a backend
    /// failure or an undecodable value all degrade to `default`; this
    /// accessor never fails.
    pub async fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.read(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                warn!("Read of key `{}` failed, falling back to default: {}", key, e);
                return default;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(
                    "Malformed value under key `{}`, falling back to default: {}",
                    key, e
                );
                default
            }
        }
    }

    /// Fully overwrites the value under `key`; no partial-merge semantics.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), MediBookError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| MediBookError::SerializationError(e.to_string()))?;
        self.backend.write(key, raw).await
    }

    pub async fn remove(&self, key: &str) -> Result<(), MediBookError> {
        self.backend.remove(key).await
    }

    pub async fn contains(&self, key: &str) -> Result<bool, MediBookError> {
        Ok(self.backend.read(key).await?.is_some())
    }
}
