// src/platform/web.rs - Web/WASM platform implementations

use async_trait::async_trait;
use futures::future::{self, Either};
use std::collections::HashMap;
use std::sync::Arc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, Storage};

use crate::error::{Error, Result};
use crate::platform::network::{NetworkProvider, NetworkRequest, NetworkResponse};
use crate::platform::storage::StorageProvider;
use crate::platform::Providers;

/// Creates web platform providers
pub fn create_providers() -> Result<Providers> {
    Ok(Providers {
        network: Arc::new(FetchNetwork::new()),
        storage: Arc::new(WebStorage::new()),
    })
}

/// HTTP transport on top of the browser Fetch API
#[derive(Debug, Clone, Default)]
pub struct FetchNetwork;

impl FetchNetwork {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl NetworkProvider for FetchNetwork {
    async fn request(&self, request: NetworkRequest) -> Result<NetworkResponse> {
        let window = web_sys::window()
            .ok_or_else(|| Error::platform("web", "network", "window is not available"))?;

        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());

        if let Some(body) = &request.body {
            let body_value: JsValue = js_sys::Uint8Array::from(&body[..]).into();
            opts.set_body(&body_value);
        }

        let req = Request::new_with_str_and_init(&request.url, &opts).map_err(|e| {
            Error::platform("web", "network", format!("Failed to create request: {:?}", e))
        })?;

        for (key, value) in &request.headers {
            req.headers().set(key, value).map_err(|e| {
                Error::platform("web", "network", format!("Failed to set header: {:?}", e))
            })?;
        }

        let fetch = Box::pin(JsFuture::from(window.fetch_with_request(&req)));
        let response_value = match request.timeout_ms {
            Some(timeout_ms) => {
                let timer = Box::pin(gloo_timers::future::TimeoutFuture::new(timeout_ms as u32));
                match future::select(fetch, timer).await {
                    Either::Left((result, _)) => result,
                    Either::Right(_) => {
                        return Err(request.failed(
                            Error::timeout(format!("Request to {} timed out", request.url))
                                .source("fetch_network"),
                        ))
                    }
                }
            }
            None => fetch.await,
        }
        .map_err(|e| {
            request.failed(
                Error::network(&request.url, format!("Fetch failed: {:?}", e)).source("fetch_network"),
            )
        })?;

        let response: Response = response_value.dyn_into().map_err(|_| {
            Error::platform("web", "network", "fetch resolved to a non-Response value")
        })?;

        let mut headers = HashMap::new();
        if let Ok(Some(entries)) = js_sys::try_iter(&response.headers()) {
            for entry in entries.flatten() {
                let pair: js_sys::Array = entry.unchecked_into();
                if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                    headers.insert(name, value);
                }
            }
        }

        let buffer = response.array_buffer().map_err(|e| {
            request.failed(
                Error::network(&request.url, format!("Failed to read response body: {:?}", e))
                    .source("fetch_network"),
            )
        })?;
        let body = JsFuture::from(buffer).await.map_err(|e| {
            request.failed(
                Error::network(&request.url, format!("Failed to read response body: {:?}", e))
                    .source("fetch_network"),
            )
        })?;

        let status_text = response.status_text();
        Ok(NetworkResponse {
            status_code: response.status(),
            status_text: if status_text.is_empty() {
                None
            } else {
                Some(status_text)
            },
            headers,
            body: js_sys::Uint8Array::new(&body).to_vec(),
        })
    }
}

/// `window.localStorage` backed storage; values are stored as UTF-8 text
#[derive(Debug, Clone, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }

    fn get_storage(&self) -> Result<Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| Error::platform("web", "storage", "localStorage not available"))
    }
}

#[async_trait(?Send)]
impl StorageProvider for WebStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let storage = self.get_storage()?;
        storage
            .get_item(key)
            .map(|value| value.map(String::into_bytes))
            .map_err(|e| Error::storage(key, format!("Failed to get item: {:?}", e)))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let storage = self.get_storage()?;
        let value_str = String::from_utf8_lossy(value);
        storage
            .set_item(key, &value_str)
            .map_err(|e| Error::storage(key, format!("Failed to set item: {:?}", e)))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let storage = self.get_storage()?;
        storage
            .remove_item(key)
            .map_err(|e| Error::storage(key, format!("Failed to delete item: {:?}", e)))
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        let storage = self.get_storage()?;
        let length = storage
            .length()
            .map_err(|e| Error::storage(prefix, format!("Failed to get storage length: {:?}", e)))?;

        let mut keys = Vec::new();
        for i in 0..length {
            if let Ok(Some(key)) = storage.key(i) {
                if key.starts_with(prefix) {
                    keys.push(key);
                }
            }
        }

        keys.sort();
        Ok(keys)
    }

    async fn clear(&self) -> Result<()> {
        let storage = self.get_storage()?;
        storage
            .clear()
            .map_err(|e| Error::storage("*", format!("Failed to clear storage: {:?}", e)))
    }
}
