// src/platform/network.rs

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Request header carrying the per-request correlation id
pub const CORRELATION_HEADER: &str = "X-Correlation-ID";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Network request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
    pub timeout_ms: Option<u64>,
}

impl NetworkRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
            timeout_ms: None,
        }
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.header(CORRELATION_HEADER)
    }

    /// Ties a transport failure to this request's correlation id
    pub fn failed(&self, error: Error) -> Error {
        match self.correlation_id() {
            Some(id) => error.correlation_id(id),
            None => error,
        }
    }
}

/// Network response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkResponse {
    pub status_code: u16,
    /// Reason phrase when the transport exposes one (`Not Found`)
    pub status_text: Option<String>,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl NetworkResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

#[cfg(not(target_arch = "wasm32"))]
pub type DynNetwork = dyn NetworkProvider + Send + Sync;

#[cfg(target_arch = "wasm32")]
pub type DynNetwork = dyn NetworkProvider + Sync;

pub type NetworkArc = Arc<DynNetwork>;

/// HTTP transport used by the API client.
///
/// Implementations return `Ok` for every response that arrived, whatever its
/// status; `Err` means no response was received (connection failure, timeout).
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait NetworkProvider: NetworkBounds {
    async fn request(&self, request: NetworkRequest) -> Result<NetworkResponse>;
}

#[cfg(not(target_arch = "wasm32"))]
pub trait NetworkBounds: Send + Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync> NetworkBounds for T {}

#[cfg(target_arch = "wasm32")]
pub trait NetworkBounds: Sync {}

#[cfg(target_arch = "wasm32")]
impl<T: Sync> NetworkBounds for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_ignores_case() {
        let mut response = NetworkResponse {
            status_code: 200,
            status_text: None,
            headers: HashMap::new(),
            body: Vec::new(),
        };
        response
            .headers
            .insert("X-Correlation-ID".to_string(), "abc".to_string());

        assert_eq!(response.header("x-correlation-id"), Some("abc"));
        assert!(response.is_success());
    }

    #[test]
    fn transport_failure_carries_the_correlation_id() {
        let mut request = NetworkRequest {
            method: HttpMethod::Get,
            url: "http://localhost:8080/api/orders".to_string(),
            headers: HashMap::new(),
            body: None,
            timeout_ms: None,
        };
        let error = request.failed(Error::timeout("timed out"));
        assert!(error.correlation_id.is_none());

        request.set_header("x-correlation-id", "req-42");
        assert_eq!(request.correlation_id(), Some("req-42"));

        let error = request.failed(Error::network(&request.url, "refused").source("native_network"));
        assert_eq!(error.correlation_id.as_deref(), Some("req-42"));
        assert_eq!(error.source, "native_network");
    }

    #[test]
    fn method_names() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        let request = NetworkRequest::new(HttpMethod::Get, "http://localhost/health");
        assert!(request.body.is_none());
        assert!(request.header("authorization").is_none());
    }
}
