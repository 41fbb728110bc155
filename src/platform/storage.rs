// src/platform/storage.rs

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;

#[cfg(not(target_arch = "wasm32"))]
pub type DynStorage = dyn StorageProvider + Send + Sync;

#[cfg(target_arch = "wasm32")]
pub type DynStorage = dyn StorageProvider + Sync;

pub type StorageArc = Arc<DynStorage>;

/// Storage operations (key-value). Deleting a missing key is not an error.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait StorageProvider: StorageBounds {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;
    async fn delete(&self, key: &str) -> Result<()>;
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>>;
    async fn clear(&self) -> Result<()>;
}

#[cfg(not(target_arch = "wasm32"))]
pub trait StorageBounds: Send + Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync> StorageBounds for T {}

#[cfg(target_arch = "wasm32")]
pub trait StorageBounds: Sync {}

#[cfg(target_arch = "wasm32")]
impl<T: Sync> StorageBounds for T {}

/// Process-local storage; nothing survives a restart
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl StorageProvider for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self
            .entries
            .read()
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }

    async fn clear(&self) -> Result<()> {
        self.entries.write().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("auth_token").await.unwrap(), None);

        storage.set("auth_token", b"secret").await.unwrap();
        storage.set("ui.theme", b"dark").await.unwrap();
        assert_eq!(
            storage.get("auth_token").await.unwrap().as_deref(),
            Some(&b"secret"[..])
        );
        assert_eq!(storage.list_keys("ui.").await.unwrap(), vec!["ui.theme"]);

        storage.delete("auth_token").await.unwrap();
        storage.delete("auth_token").await.unwrap();
        assert_eq!(storage.get("auth_token").await.unwrap(), None);

        storage.clear().await.unwrap();
        assert!(storage.list_keys("").await.unwrap().is_empty());
    }
}
