use std::collections::HashMap;
use serde_json::Value;

/// Generic metadata container
pub type Metadata = HashMap<String, Value>;

/// Correlation ID attached to every outbound request (`X-Correlation-ID`)
pub type CorrelationId = String;

/// Generates a fresh correlation ID for an outbound request
pub fn new_correlation_id() -> CorrelationId {
    uuid::Uuid::new_v4().to_string()
}
