// src/api/interceptor.rs - Request/response hooks run by the API client

use std::fmt::Debug;
use std::sync::Arc;

use crate::error::Result;
use crate::platform::{NetworkRequest, NetworkResponse};
use crate::session::SessionStore;
use crate::types::new_correlation_id;

pub use crate::platform::CORRELATION_HEADER;
pub const AUTHORIZATION_HEADER: &str = "Authorization";

#[cfg(not(target_arch = "wasm32"))]
pub trait InterceptorBounds: Send + Sync + Debug {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync + Debug> InterceptorBounds for T {}

#[cfg(target_arch = "wasm32")]
pub trait InterceptorBounds: Debug {}
#[cfg(target_arch = "wasm32")]
impl<T: Debug> InterceptorBounds for T {}

/// Runs before a request is handed to the transport, in registration order.
/// An error aborts the request.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RequestInterceptor: InterceptorBounds {
    fn name(&self) -> &str;

    async fn on_request(&self, request: &mut NetworkRequest) -> Result<()>;
}

/// What came back from the transport
#[derive(Debug, Clone, Copy)]
pub enum Outcome<'a> {
    Response(&'a NetworkResponse),
    /// No response was received
    Failed(&'a crate::error::Error),
}

/// Runs once per completed request, in registration order
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ResponseInterceptor: InterceptorBounds {
    fn name(&self) -> &str;

    async fn on_response(&self, request: &NetworkRequest, outcome: Outcome<'_>);
}

/// Side effect for a 401: the UI navigates to its login route
pub trait UnauthorizedHandler: InterceptorBounds {
    fn on_unauthorized(&self);
}

/// Stamps a fresh `X-Correlation-ID` on every request
#[derive(Debug, Default)]
pub struct CorrelationIdInterceptor;

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RequestInterceptor for CorrelationIdInterceptor {
    fn name(&self) -> &str {
        "correlation_id"
    }

    async fn on_request(&self, request: &mut NetworkRequest) -> Result<()> {
        request.set_header(CORRELATION_HEADER, new_correlation_id());
        Ok(())
    }
}

/// Adds `Authorization: Bearer <token>` when a token is stored
#[derive(Debug, Clone)]
pub struct AuthInterceptor {
    session: SessionStore,
}

impl AuthInterceptor {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RequestInterceptor for AuthInterceptor {
    fn name(&self) -> &str {
        "auth"
    }

    async fn on_request(&self, request: &mut NetworkRequest) -> Result<()> {
        if let Some(token) = self.session.token() {
            request.set_header(AUTHORIZATION_HEADER, format!("Bearer {}", token));
        }
        Ok(())
    }
}

/// Logs requests and responses with their correlation ids
#[derive(Debug, Default)]
pub struct LoggingInterceptor;

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RequestInterceptor for LoggingInterceptor {
    fn name(&self) -> &str {
        "logging"
    }

    async fn on_request(&self, request: &mut NetworkRequest) -> Result<()> {
        tracing::info!(
            method = %request.method,
            url = %request.url,
            correlation_id = request.header(CORRELATION_HEADER).unwrap_or(""),
            has_body = request.body.is_some(),
            "API request"
        );
        Ok(())
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl ResponseInterceptor for LoggingInterceptor {
    fn name(&self) -> &str {
        "logging"
    }

    async fn on_response(&self, request: &NetworkRequest, outcome: Outcome<'_>) {
        let correlation_id = request.correlation_id().unwrap_or("");

        match outcome {
            Outcome::Response(response) if response.is_success() => {
                tracing::info!(
                    method = %request.method,
                    url = %request.url,
                    status = response.status_code,
                    correlation_id,
                    echoed_correlation_id = response.header("x-correlation-id").unwrap_or(""),
                    "API response"
                );
            }
            Outcome::Response(response) => {
                tracing::warn!(
                    method = %request.method,
                    url = %request.url,
                    status = response.status_code,
                    status_text = response.status_text.as_deref().unwrap_or(""),
                    correlation_id,
                    echoed_correlation_id = response.header("x-correlation-id").unwrap_or(""),
                    "API response error"
                );
            }
            Outcome::Failed(error) => {
                tracing::error!(
                    method = %request.method,
                    url = %request.url,
                    correlation_id = error.correlation_id.as_deref().unwrap_or(correlation_id),
                    source = %error.source,
                    error = %error.message,
                    "API request failed"
                );
            }
        }
    }
}

/// On a 401 clears the stored token, then notifies the handler. Runs once per
/// response; the caller still gets the error back.
#[derive(Debug, Clone)]
pub struct UnauthorizedInterceptor {
    session: SessionStore,
    handler: Arc<dyn UnauthorizedHandler>,
}

impl UnauthorizedInterceptor {
    pub fn new(session: SessionStore, handler: Arc<dyn UnauthorizedHandler>) -> Self {
        Self { session, handler }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl ResponseInterceptor for UnauthorizedInterceptor {
    fn name(&self) -> &str {
        "unauthorized"
    }

    async fn on_response(&self, request: &NetworkRequest, outcome: Outcome<'_>) {
        let Outcome::Response(response) = outcome else {
            return;
        };
        if response.status_code != 401 {
            return;
        }

        tracing::warn!(url = %request.url, "Session rejected by the backend, signing out");
        if let Err(e) = self.session.clear_token().await {
            tracing::error!(error = %e, "Failed to clear stored token");
        }
        self.handler.on_unauthorized();
    }
}

/// Handler that does nothing beyond the token clearing; used by the CLI
#[derive(Debug, Default)]
pub struct IgnoreUnauthorized;

impl UnauthorizedHandler for IgnoreUnauthorized {
    fn on_unauthorized(&self) {}
}

/// Forwards 401 notifications over a channel to whoever owns navigation
#[derive(Debug, Clone)]
pub struct ChannelUnauthorizedHandler {
    sender: futures::channel::mpsc::UnboundedSender<()>,
}

impl ChannelUnauthorizedHandler {
    pub fn new(sender: futures::channel::mpsc::UnboundedSender<()>) -> Self {
        Self { sender }
    }
}

impl UnauthorizedHandler for ChannelUnauthorizedHandler {
    fn on_unauthorized(&self) {
        if self.sender.unbounded_send(()).is_err() {
            tracing::debug!("No listener for unauthorized notifications");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{HttpMethod, MemoryStorage, StorageArc};

    #[tokio::test]
    async fn correlation_ids_are_fresh_per_request() {
        let interceptor = CorrelationIdInterceptor;
        let mut first = NetworkRequest::new(HttpMethod::Get, "http://x/api/orders");
        let mut second = first.clone();

        interceptor.on_request(&mut first).await.unwrap();
        interceptor.on_request(&mut second).await.unwrap();

        let a = first.header(CORRELATION_HEADER).unwrap();
        let b = second.header(CORRELATION_HEADER).unwrap();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(a).is_ok());
    }

    #[tokio::test]
    async fn bearer_only_when_token_present() {
        let storage: StorageArc = Arc::new(MemoryStorage::new());
        let session = SessionStore::new(storage);
        let interceptor = AuthInterceptor::new(session.clone());

        let mut request = NetworkRequest::new(HttpMethod::Get, "http://x/api/orders");
        interceptor.on_request(&mut request).await.unwrap();
        assert!(request.header(AUTHORIZATION_HEADER).is_none());

        session.set_token("t0k3n").await.unwrap();
        interceptor.on_request(&mut request).await.unwrap();
        assert_eq!(request.header(AUTHORIZATION_HEADER), Some("Bearer t0k3n"));
    }

    #[tokio::test]
    async fn channel_handler_forwards() {
        let (tx, mut rx) = futures::channel::mpsc::unbounded();
        let handler = ChannelUnauthorizedHandler::new(tx);
        handler.on_unauthorized();
        assert_eq!(rx.try_next().unwrap(), Some(()));

        drop(rx);
        // A closed channel is not an error for the caller
        handler.on_unauthorized();
    }
}
