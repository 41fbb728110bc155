// src/model/event.rs - Order lifecycle events shown as a timeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEvent {
    pub event_type: String,
    #[serde(default)]
    pub order_id: String,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub data: Value,
}

impl OrderEvent {
    /// `ORDER_CREATED` → `Order created`
    pub fn title(&self) -> String {
        let words = self.event_type.replace(['_', '-', '.'], " ").to_lowercase();
        let mut chars = words.trim().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => "Event".to_string(),
        }
    }

    /// Compact `key: value` lines for the event payload
    pub fn data_summary(&self) -> Vec<String> {
        match &self.data {
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| match v {
                    Value::String(s) => format!("{}: {}", k, s),
                    other => format!("{}: {}", k, other),
                })
                .collect(),
            Value::Null => Vec::new(),
            other => vec![other.to_string()],
        }
    }
}

/// Oldest first
pub fn timeline(mut events: Vec<OrderEvent>) -> Vec<OrderEvent> {
    events.sort_by_key(|e| e.timestamp);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(kind: &str, ts: &str) -> OrderEvent {
        serde_json::from_value(json!({
            "eventType": kind,
            "orderId": "ord-1",
            "timestamp": ts,
            "data": {"reason": "customer request", "amount": 10.5}
        }))
        .unwrap()
    }

    #[test]
    fn titles_and_payload() {
        let e = event("ORDER_CANCELLED", "2024-03-07T09:05:00");
        assert_eq!(e.title(), "Order cancelled");
        let summary = e.data_summary();
        assert!(summary.contains(&"reason: customer request".to_string()));
        assert!(summary.contains(&"amount: 10.5".to_string()));
    }

    #[test]
    fn timeline_is_chronological() {
        let events = vec![
            event("PAYMENT_APPROVED", "2024-03-07T10:00:00"),
            event("ORDER_CREATED", "2024-03-07T09:00:00"),
        ];
        let ordered = timeline(events);
        assert_eq!(ordered[0].event_type, "ORDER_CREATED");
    }
}
