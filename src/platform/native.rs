// src/platform/native.rs - Native platform implementations

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::fs;

use crate::error::{Error, Result};
use crate::platform::network::{HttpMethod, NetworkProvider, NetworkRequest, NetworkResponse};
use crate::platform::storage::StorageProvider;
use crate::platform::Providers;

/// Directory name under the OS data dir
const APP_DIR: &str = "order-dashboard";

/// Creates native platform providers
pub fn create_providers() -> Result<Providers> {
    Ok(Providers {
        network: Arc::new(NativeNetwork::new()),
        storage: Arc::new(NativeStorage::new()),
    })
}

/// HTTP transport on top of `reqwest`
#[derive(Debug, Clone, Default)]
pub struct NativeNetwork {
    client: reqwest::Client,
}

impl NativeNetwork {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl NetworkProvider for NativeNetwork {
    async fn request(&self, request: NetworkRequest) -> Result<NetworkResponse> {
        let mut req = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            req = req.body(body.clone());
        }

        if let Some(timeout_ms) = request.timeout_ms {
            req = req.timeout(Duration::from_millis(timeout_ms));
        }

        let response = req.send().await.map_err(|e| {
            let error = if e.is_timeout() {
                Error::timeout(format!("Request to {} timed out", request.url))
            } else {
                Error::network(&request.url, format!("HTTP request failed: {}", e))
            };
            request.failed(error.source("native_network"))
        })?;

        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or("").to_string()))
            .collect::<HashMap<_, _>>();

        let body = response
            .bytes()
            .await
            .map_err(|e| {
                request.failed(
                    Error::network(&request.url, format!("Failed to read response body: {}", e))
                        .source("native_network"),
                )
            })?
            .to_vec();

        Ok(NetworkResponse {
            status_code: status.as_u16(),
            status_text: status.canonical_reason().map(str::to_string),
            headers,
            body,
        })
    }
}

/// File-per-key storage under the user's data directory
#[derive(Debug, Clone)]
pub struct NativeStorage {
    storage_path: PathBuf,
}

impl NativeStorage {
    pub fn new() -> Self {
        let storage_path = dirs::data_dir()
            .or_else(|| std::env::current_dir().ok().map(|d| d.join("data")))
            .unwrap_or_else(|| PathBuf::from("data"))
            .join(APP_DIR)
            .join("storage");

        Self { storage_path }
    }

    /// Storage rooted at an explicit directory
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self {
            storage_path: root.as_ref().to_path_buf(),
        }
    }

    fn key_to_path(&self, key: &str) -> PathBuf {
        let safe_key = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
        self.storage_path.join(format!("{}.bin", safe_key))
    }
}

impl Default for NativeStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageProvider for NativeStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.key_to_path(key);
        match fs::read(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::storage(key, format!("Failed to read key {}: {}", key, e))),
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.key_to_path(key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                Error::storage(key, format!("Failed to create storage directory: {}", e))
            })?;
        }

        fs::write(&path, value)
            .await
            .map_err(|e| Error::storage(key, format!("Failed to write key {}: {}", key, e)))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let path = self.key_to_path(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::storage(key, format!("Failed to delete key {}: {}", key, e))),
        }
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        let mut entries = match fs::read_dir(&self.storage_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::storage(
                    prefix,
                    format!("Failed to read storage directory: {}", e),
                ))
            }
        };

        let mut keys = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            Error::storage(prefix, format!("Failed to read storage entry: {}", e))
        })? {
            if let Some(name) = entry.file_name().to_str() {
                if let Some(key) = name.strip_suffix(".bin") {
                    if key.starts_with(prefix) {
                        keys.push(key.to_string());
                    }
                }
            }
        }

        keys.sort();
        Ok(keys)
    }

    async fn clear(&self) -> Result<()> {
        if fs::try_exists(&self.storage_path).await.unwrap_or(false) {
            fs::remove_dir_all(&self.storage_path).await.map_err(|e| {
                Error::storage("*", format!("Failed to clear storage: {}", e))
            })?;
        }

        fs::create_dir_all(&self.storage_path).await.map_err(|e| {
            Error::storage("*", format!("Failed to recreate storage directory: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn native_storage_persists_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let storage = NativeStorage::with_root(dir.path().join("storage"));

        assert_eq!(storage.get("auth_token").await.unwrap(), None);
        assert!(storage.list_keys("").await.unwrap().is_empty());

        storage.set("auth_token", b"token-123").await.unwrap();
        storage.set("ui.sidebar_collapsed", b"true").await.unwrap();

        // A second instance over the same directory sees the data
        let reopened = NativeStorage::with_root(dir.path().join("storage"));
        assert_eq!(
            reopened.get("auth_token").await.unwrap().as_deref(),
            Some(&b"token-123"[..])
        );
        assert_eq!(
            reopened.list_keys("ui.").await.unwrap(),
            vec!["ui.sidebar_collapsed"]
        );

        reopened.delete("auth_token").await.unwrap();
        reopened.delete("auth_token").await.unwrap();
        assert_eq!(storage.get("auth_token").await.unwrap(), None);

        storage.clear().await.unwrap();
        assert!(storage.list_keys("").await.unwrap().is_empty());
    }

    #[test]
    fn unsafe_key_characters_are_replaced() {
        let storage = NativeStorage::with_root("/tmp/x");
        let path = storage.key_to_path("a/b:c");
        assert_eq!(path.file_name().unwrap(), "a_b_c.bin");
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let network = NativeNetwork::new();
        let mut request = NetworkRequest::new(HttpMethod::Get, "http://127.0.0.1:9/health");
        request.timeout_ms = Some(2_000);

        let err = network.request(request).await.unwrap_err();
        assert!(matches!(
            err.kind,
            crate::error::ErrorKind::Network { .. } | crate::error::ErrorKind::Timeout
        ));
    }
}
