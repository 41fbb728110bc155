// src/api/client.rs - Thin REST client for the order backend

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use super::envelope::{unwrap_list, unwrap_object};
use super::error::{ApiError, ApiResult};
use super::interceptor::{
    AuthInterceptor, CorrelationIdInterceptor, LoggingInterceptor, Outcome, RequestInterceptor,
    ResponseInterceptor, UnauthorizedHandler, UnauthorizedInterceptor,
};
use crate::config::ApiConfig;
use crate::model::{
    CreateOrderRequest, DashboardMetrics, HealthReport, InventoryItem, Order, OrderEvent,
    OrderFilters, OrderStatus, Payment, PaymentFilters, UpdateStatusRequest,
};
use crate::platform::{HttpMethod, NetworkArc, NetworkRequest, NetworkResponse};
use crate::session::SessionStore;

/// REST client: every call runs the request interceptors, the transport, then
/// the response interceptors, and comes back as an [`ApiResult`].
///
/// No retries, caching or deduplication happen here.
#[derive(Clone)]
pub struct ApiClient {
    transport: NetworkArc,
    base_url: String,
    base_path: String,
    health_path: String,
    timeout_ms: u64,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    /// A bare client without interceptors
    pub fn new(config: &ApiConfig, transport: NetworkArc) -> Self {
        Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            base_path: normalize_path(&config.base_path),
            health_path: normalize_path(&config.health_path),
            timeout_ms: config.timeout_secs.saturating_mul(1000),
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        }
    }

    /// The client the application uses: correlation id, bearer token and
    /// logging on the way out; logging and 401 handling on the way back.
    pub fn standard(
        config: &ApiConfig,
        transport: NetworkArc,
        session: SessionStore,
        on_unauthorized: Arc<dyn UnauthorizedHandler>,
    ) -> Self {
        Self::new(config, transport)
            .with_request_interceptor(CorrelationIdInterceptor)
            .with_request_interceptor(AuthInterceptor::new(session.clone()))
            .with_request_interceptor(LoggingInterceptor)
            .with_response_interceptor(LoggingInterceptor)
            .with_response_interceptor(UnauthorizedInterceptor::new(session, on_unauthorized))
    }

    pub fn with_request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request_interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn with_response_interceptor(
        mut self,
        interceptor: impl ResponseInterceptor + 'static,
    ) -> Self {
        self.response_interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// `base_url + base_path + path`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.base_path, normalize_path(path))
    }

    /// `base_url + path`, for endpoints outside the API prefix
    pub fn root_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, normalize_path(path))
    }

    // Orders

    #[instrument(skip(self))]
    pub async fn list_orders(&self, filters: &OrderFilters) -> ApiResult<Vec<Order>> {
        let url = format!("{}{}", self.api_url("/orders"), filters.to_query_string());
        let value = self.call(HttpMethod::Get, url, None).await?;
        decode(unwrap_list(value, &["orders"]))
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: &str) -> ApiResult<Order> {
        let url = self.api_url(&format!("/orders/{}", segment(order_id)));
        let value = self.call(HttpMethod::Get, url, None).await?;
        decode(unwrap_object(value, "order"))
    }

    /// Validated locally first; nothing is sent for an invalid request
    #[instrument(skip(self, request), fields(customer_id = %request.customer_id))]
    pub async fn create_order(&self, request: &CreateOrderRequest) -> ApiResult<Order> {
        let errors = request.validate();
        if !errors.is_empty() {
            let message = errors
                .iter()
                .map(|e| format!("{}: {}", e.key, e.message))
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ApiError::invalid_request(message));
        }

        let url = self.api_url("/orders");
        let value = self.call(HttpMethod::Post, url, Some(encode(request)?)).await?;
        decode(unwrap_object(value, "order"))
    }

    #[instrument(skip(self))]
    pub async fn update_order_status(&self, order_id: &str, status: OrderStatus) -> ApiResult<Order> {
        let url = self.api_url(&format!("/orders/{}/status", segment(order_id)));
        let body = encode(&UpdateStatusRequest { status })?;
        let value = self.call(HttpMethod::Put, url, Some(body)).await?;
        decode(unwrap_object(value, "order"))
    }

    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: &str, reason: Option<&str>) -> ApiResult<()> {
        let mut url = self.api_url(&format!("/orders/{}", segment(order_id)));
        if let Some(reason) = reason.map(str::trim).filter(|r| !r.is_empty()) {
            url.push_str(&format!("?reason={}", urlencoding::encode(reason)));
        }
        self.call(HttpMethod::Delete, url, None).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn orders_by_customer(&self, customer_id: &str) -> ApiResult<Vec<Order>> {
        let url = self.api_url(&format!("/orders/customer/{}", segment(customer_id)));
        let value = self.call(HttpMethod::Get, url, None).await?;
        decode(unwrap_list(value, &["orders"]))
    }

    #[instrument(skip(self))]
    pub async fn order_events(&self, order_id: &str) -> ApiResult<Vec<OrderEvent>> {
        let url = self.api_url(&format!("/orders/{}/events", segment(order_id)));
        let value = self.call(HttpMethod::Get, url, None).await?;
        decode(unwrap_list(value, &["events"]))
    }

    // Payments

    #[instrument(skip(self))]
    pub async fn list_payments(&self, filters: &PaymentFilters) -> ApiResult<Vec<Payment>> {
        let url = format!("{}{}", self.api_url("/payments"), filters.to_query_string());
        let value = self.call(HttpMethod::Get, url, None).await?;
        decode(unwrap_list(value, &["payments"]))
    }

    #[instrument(skip(self))]
    pub async fn get_payment(&self, payment_id: &str) -> ApiResult<Payment> {
        let url = self.api_url(&format!("/payments/{}", segment(payment_id)));
        let value = self.call(HttpMethod::Get, url, None).await?;
        decode(unwrap_object(value, "payment"))
    }

    #[instrument(skip(self))]
    pub async fn payment_for_order(&self, order_id: &str) -> ApiResult<Payment> {
        let url = self.api_url(&format!("/payments/order/{}", segment(order_id)));
        let value = self.call(HttpMethod::Get, url, None).await?;
        decode(unwrap_object(value, "payment"))
    }

    /// User-triggered resubmission of a failed or declined payment
    #[instrument(skip(self))]
    pub async fn retry_payment(&self, payment_id: &str) -> ApiResult<Payment> {
        let url = self.api_url(&format!("/payments/{}/retry", segment(payment_id)));
        let value = self.call(HttpMethod::Post, url, None).await?;
        decode(unwrap_object(value, "payment"))
    }

    // Inventory, dashboard, health

    #[instrument(skip(self))]
    pub async fn list_inventory(&self) -> ApiResult<Vec<InventoryItem>> {
        let url = self.api_url("/inventory");
        let value = self.call(HttpMethod::Get, url, None).await?;
        decode(unwrap_list(value, &["inventory", "items"]))
    }

    #[instrument(skip(self))]
    pub async fn dashboard_metrics(&self) -> ApiResult<DashboardMetrics> {
        let url = self.api_url("/dashboard/metrics");
        let value = self.call(HttpMethod::Get, url, None).await?;
        decode(unwrap_object(value, "metrics"))
    }

    #[instrument(skip(self))]
    pub async fn health(&self) -> ApiResult<HealthReport> {
        let url = self.root_url(&self.health_path);
        match self.call(HttpMethod::Get, url, None).await {
            Ok(value) => decode(value),
            // A failing service answers 503 with a DOWN report
            Err(ApiError::Backend { status, body }) if HealthReport::is_report(&body) => {
                tracing::warn!(status, "Backend reports itself unhealthy");
                decode(body)
            }
            Err(e) => Err(e),
        }
    }

    /// Sends one request through the interceptor chain and returns the parsed
    /// JSON body (`Null` for an empty body)
    async fn call(&self, method: HttpMethod, url: String, body: Option<Vec<u8>>) -> ApiResult<Value> {
        let response = self.send(method, url, body).await?;
        parse_body(&response)
    }

    async fn send(
        &self,
        method: HttpMethod,
        url: String,
        body: Option<Vec<u8>>,
    ) -> ApiResult<NetworkResponse> {
        let mut request = NetworkRequest::new(method, url);
        request.set_header("Content-Type", "application/json");
        request.set_header("Accept", "application/json");
        request.body = body;
        request.timeout_ms = Some(self.timeout_ms);

        for interceptor in &self.request_interceptors {
            if let Err(e) = interceptor.on_request(&mut request).await {
                tracing::warn!(
                    interceptor = interceptor.name(),
                    error = %e,
                    "Request rejected by interceptor"
                );
                return Err(ApiError::invalid_request(e.message));
            }
        }

        let result = self.transport.request(request.clone()).await;

        let outcome = match &result {
            Ok(response) => Outcome::Response(response),
            Err(error) => Outcome::Failed(error),
        };
        for interceptor in &self.response_interceptors {
            interceptor.on_response(&request, outcome).await;
        }

        let response = result.map_err(|e| ApiError::network(e.message))?;
        if !response.is_success() {
            return Err(ApiError::from_response(&response));
        }
        Ok(response)
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("base_path", &self.base_path)
            .field("timeout_ms", &self.timeout_ms)
            .field(
                "request_interceptors",
                &self
                    .request_interceptors
                    .iter()
                    .map(|i| i.name().to_string())
                    .collect::<Vec<_>>(),
            )
            .field(
                "response_interceptors",
                &self
                    .response_interceptors
                    .iter()
                    .map(|i| i.name().to_string())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.transport, &other.transport)
            && self.base_url == other.base_url
            && self.base_path == other.base_path
    }
}

/// `api/` → `/api`; empty stays empty
fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn encode<T: Serialize>(body: &T) -> ApiResult<Vec<u8>> {
    serde_json::to_vec(body)
        .map_err(|e| ApiError::invalid_request(format!("Failed to encode request body: {}", e)))
}

fn parse_body(response: &NetworkResponse) -> ApiResult<Value> {
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(&response.body).map_err(|e| {
        ApiError::invalid_response(
            response.status_code,
            format!("Malformed response body: {}", e),
        )
    })
}

fn decode<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::invalid_response(200, format!("Unexpected response shape: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ErrorCode;
    use crate::api::interceptor::{AUTHORIZATION_HEADER, CORRELATION_HEADER};
    use crate::error::{Error, Result};
    use crate::platform::{MemoryStorage, NetworkProvider, StorageArc, StorageProvider};
    use parking_lot::Mutex;
    use serde_json::json;
    use std::collections::{HashMap, VecDeque};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Transport double: records requests, replays queued responses
    #[derive(Debug, Default)]
    struct RecordingTransport {
        requests: Mutex<Vec<NetworkRequest>>,
        replies: Mutex<VecDeque<Result<NetworkResponse>>>,
    }

    impl RecordingTransport {
        fn reply(&self, status: u16, body: Value) {
            self.replies.lock().push_back(Ok(NetworkResponse {
                status_code: status,
                status_text: None,
                headers: HashMap::from([("x-correlation-id".to_string(), "echo".to_string())]),
                body: if body.is_null() {
                    Vec::new()
                } else {
                    body.to_string().into_bytes()
                },
            }));
        }

        fn reply_raw(&self, status: u16, status_text: &str, body: &[u8]) {
            self.replies.lock().push_back(Ok(NetworkResponse {
                status_code: status,
                status_text: Some(status_text.to_string()),
                headers: HashMap::new(),
                body: body.to_vec(),
            }));
        }

        fn fail(&self, message: &str) {
            self.replies
                .lock()
                .push_back(Err(Error::network("test", message)));
        }

        fn sent(&self) -> Vec<NetworkRequest> {
            self.requests.lock().clone()
        }
    }

    #[async_trait::async_trait]
    impl NetworkProvider for RecordingTransport {
        async fn request(&self, request: NetworkRequest) -> Result<NetworkResponse> {
            self.requests.lock().push(request);
            self.replies.lock().pop_front().unwrap_or_else(|| {
                Ok(NetworkResponse {
                    status_code: 200,
                    status_text: None,
                    headers: HashMap::new(),
                    body: b"[]".to_vec(),
                })
            })
        }
    }

    #[derive(Debug, Default)]
    struct CountingHandler {
        calls: AtomicUsize,
    }

    impl UnauthorizedHandler for CountingHandler {
        fn on_unauthorized(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Harness {
        client: ApiClient,
        transport: Arc<RecordingTransport>,
        session: SessionStore,
        storage: StorageArc,
        handler: Arc<CountingHandler>,
    }

    fn harness() -> Harness {
        let transport = Arc::new(RecordingTransport::default());
        let storage: StorageArc = Arc::new(MemoryStorage::new());
        let session = SessionStore::new(storage.clone());
        let handler = Arc::new(CountingHandler::default());
        let client = ApiClient::standard(
            &ApiConfig::default(),
            transport.clone(),
            session.clone(),
            handler.clone(),
        );
        Harness {
            client,
            transport,
            session,
            storage,
            handler,
        }
    }

    fn order_json(id: &str) -> Value {
        json!({
            "orderId": id,
            "customerId": "cust-1",
            "status": "PENDING",
            "items": [],
            "totalAmount": 10.0,
            "createdAt": "2024-03-07T09:05:00",
            "updatedAt": "2024-03-07T09:05:00"
        })
    }

    #[tokio::test]
    async fn each_call_gets_its_own_correlation_id() {
        let h = harness();
        h.client.list_inventory().await.unwrap();
        h.client.list_inventory().await.unwrap();

        let sent = h.transport.sent();
        let first = sent[0].header(CORRELATION_HEADER).unwrap();
        let second = sent[1].header(CORRELATION_HEADER).unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn standard_headers_and_timeout() {
        let h = harness();
        h.client.list_inventory().await.unwrap();
        let sent = &h.transport.sent()[0];
        assert_eq!(sent.header("content-type"), Some("application/json"));
        assert!(sent.header(AUTHORIZATION_HEADER).is_none());
        assert_eq!(sent.timeout_ms, Some(30_000));
        assert_eq!(sent.url, "http://localhost:8080/api/inventory");

        h.session.set_token("abc").await.unwrap();
        h.client.list_inventory().await.unwrap();
        assert_eq!(
            h.transport.sent()[1].header(AUTHORIZATION_HEADER),
            Some("Bearer abc")
        );
    }

    #[tokio::test]
    async fn unauthorized_clears_token_and_notifies_once() {
        let h = harness();
        h.session.set_token("expired").await.unwrap();
        h.transport.reply(401, json!({"message": "Token expired", "code": "UNAUTHORIZED"}));

        let err = h.client.list_orders(&OrderFilters::default()).await.unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(err.message(), "Token expired");
        assert_eq!(h.handler.calls.load(Ordering::SeqCst), 1);
        assert!(h.session.token().is_none());
        assert!(h.storage.get(crate::session::TOKEN_KEY).await.unwrap().is_none());

        // A later success does not trigger it again
        h.client.list_inventory().await.unwrap();
        assert_eq!(h.handler.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn transport_failure_falls_back_to_network_error() {
        let h = harness();
        h.transport.fail("connection refused");

        let err = h.client.list_inventory().await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Synthesized {
                status: 0,
                code: ErrorCode::NetworkError,
                message: "connection refused".to_string(),
            }
        );
        assert_eq!(h.handler.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn server_errors_are_normalized() {
        let h = harness();
        h.transport.reply_raw(502, "Bad Gateway", b"upstream down");
        let err = h.client.dashboard_metrics().await.unwrap_err();
        assert_eq!(err.status(), 502);
        assert_eq!(err.code(), "SERVER_ERROR");
        assert_eq!(err.message(), "Bad Gateway");

        let body = json!({"errorCode": "VALIDATION_ERROR", "message": "bad status", "details": ["status"]});
        h.transport.reply(400, body.clone());
        let err = h
            .client
            .update_order_status("ord-1", OrderStatus::Confirmed)
            .await
            .unwrap_err();
        assert_eq!(err.body(), Some(&body));
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn malformed_success_body_is_invalid_response() {
        let h = harness();
        h.transport.reply_raw(200, "OK", b"<html>");
        let err = h.client.list_inventory().await.unwrap_err();
        assert_eq!(err.code(), "INVALID_RESPONSE");
    }

    #[tokio::test]
    async fn envelopes_are_unwrapped() {
        let h = harness();
        h.transport.reply(200, json!({"order": order_json("ord-1")}));
        assert_eq!(h.client.get_order("ord-1").await.unwrap().order_id, "ord-1");

        h.transport.reply(200, order_json("ord-2"));
        assert_eq!(h.client.get_order("ord-2").await.unwrap().order_id, "ord-2");

        h.transport.reply(
            200,
            json!({"events": [{"eventType": "ORDER_CREATED", "orderId": "ord-1", "timestamp": "2024-03-07T09:05:00"}]}),
        );
        assert_eq!(h.client.order_events("ord-1").await.unwrap().len(), 1);

        h.transport.reply(
            200,
            json!({"data": [order_json("a"), order_json("b")], "total": 2, "page": 1, "pageSize": 10}),
        );
        assert_eq!(
            h.client
                .list_orders(&OrderFilters::default())
                .await
                .unwrap()
                .len(),
            2
        );
    }

    #[tokio::test]
    async fn endpoint_paths() {
        let h = harness();

        h.transport.reply(200, Value::Null);
        h.client
            .cancel_order("ord 1", Some("out of stock"))
            .await
            .unwrap();

        h.transport.reply(200, json!({"status": "UP"}));
        assert!(h.client.health().await.unwrap().is_up());

        let filters = OrderFilters::default().with_status(OrderStatus::Pending);
        h.client.list_orders(&filters).await.unwrap();

        h.transport.reply(200, order_json("ord-1"));
        h.client
            .update_order_status("ord-1", OrderStatus::Confirmed)
            .await
            .unwrap();

        let sent = h.transport.sent();
        assert_eq!(sent[0].method, HttpMethod::Delete);
        assert_eq!(
            sent[0].url,
            "http://localhost:8080/api/orders/ord%201?reason=out%20of%20stock"
        );
        assert_eq!(sent[1].url, "http://localhost:8080/health");
        assert_eq!(sent[2].url, "http://localhost:8080/api/orders?status=PENDING");
        assert_eq!(sent[3].method, HttpMethod::Put);
        assert_eq!(sent[3].url, "http://localhost:8080/api/orders/ord-1/status");
        let body: Value = serde_json::from_slice(sent[3].body.as_ref().unwrap()).unwrap();
        assert_eq!(body, json!({"status": "CONFIRMED"}));
    }

    #[tokio::test]
    async fn invalid_create_request_is_not_sent() {
        let h = harness();
        let err = h
            .client
            .create_order(&CreateOrderRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_REQUEST");
        assert!(h.transport.sent().is_empty());
    }

    #[derive(Debug)]
    struct Recorder {
        label: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait::async_trait]
    impl RequestInterceptor for Recorder {
        fn name(&self) -> &str {
            self.label
        }

        async fn on_request(&self, _request: &mut NetworkRequest) -> Result<()> {
            self.log.lock().push(format!("req:{}", self.label));
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl ResponseInterceptor for Recorder {
        fn name(&self) -> &str {
            self.label
        }

        async fn on_response(&self, _request: &NetworkRequest, _outcome: Outcome<'_>) {
            self.log.lock().push(format!("res:{}", self.label));
        }
    }

    #[tokio::test]
    async fn interceptors_run_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let recorder = |label| Recorder {
            label,
            log: log.clone(),
        };
        let transport: NetworkArc = Arc::new(RecordingTransport::default());
        let client = ApiClient::new(&ApiConfig::default(), transport)
            .with_request_interceptor(recorder("a"))
            .with_request_interceptor(recorder("b"))
            .with_response_interceptor(recorder("c"))
            .with_response_interceptor(recorder("d"));

        client.list_inventory().await.unwrap();
        assert_eq!(*log.lock(), vec!["req:a", "req:b", "res:c", "res:d"]);
    }

    #[test]
    fn url_composition() {
        let config = ApiConfig {
            base_url: "https://orders.example.com/".to_string(),
            base_path: "api/".to_string(),
            ..ApiConfig::default()
        };
        let transport: NetworkArc = Arc::new(RecordingTransport::default());
        let client = ApiClient::new(&config, transport);
        assert_eq!(client.api_url("orders"), "https://orders.example.com/api/orders");
        assert_eq!(client.root_url("/health"), "https://orders.example.com/health");
    }
    #[tokio::test]
    async fn service_health_with_numeric_timestamp() {
        let h = harness();
        h.transport.reply(
            200,
            json!({
                "service": "order-service",
                "status": "UP",
                "timestamp": 1718000000000i64,
                "database": "UP"
            }),
        );

        let report = h.client.health().await.unwrap();
        assert!(report.is_up());
        assert_eq!(
            report.component_statuses(),
            vec![("database".to_string(), "UP".to_string())]
        );
    }

    #[tokio::test]
    async fn unavailable_service_still_yields_a_report() {
        let h = harness();
        h.transport.reply(
            503,
            json!({
                "service": "order-service",
                "status": "DOWN",
                "timestamp": 1718000000000i64,
                "database": "DOWN",
                "error": "Connection refused"
            }),
        );

        let report = h.client.health().await.unwrap();
        assert!(!report.is_up());
        assert_eq!(report.error.as_deref(), Some("Connection refused"));
        assert_eq!(
            report.component_statuses(),
            vec![("database".to_string(), "DOWN".to_string())]
        );
    }

    #[tokio::test]
    async fn health_error_without_a_report_stays_an_error() {
        let h = harness();
        h.transport.reply(502, json!({"message": "Bad gateway"}));

        let err = h.client.health().await.unwrap_err();
        assert_eq!(err.status(), 502);
        assert_eq!(err.message(), "Bad gateway");
    }
}
