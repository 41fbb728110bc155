// src/model/health.rs - Backend health report

use std::fmt;

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::format_datetime;

/// When the backend produced the report: epoch millis or a date-time string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportedAt {
    Millis(i64),
    Text(String),
}

impl fmt::Display for ReportedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Millis(ms) => match DateTime::from_timestamp_millis(*ms) {
                Some(ts) => f.write_str(&format_datetime(&ts)),
                None => write!(f, "{}", ms),
            },
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Body of `GET /health`. Services report their dependencies either under
/// `components`/`services` or as top-level `"database": "UP"` style fields;
/// everything not named here lands in `details`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthReport {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<ReportedAt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

fn is_health_word(value: &str) -> bool {
    value.eq_ignore_ascii_case("UP") || value.eq_ignore_ascii_case("DOWN")
}

impl HealthReport {
    pub fn is_up(&self) -> bool {
        self.status.eq_ignore_ascii_case("UP")
    }

    /// Whether a JSON body looks like a health report rather than an error
    pub fn is_report(body: &Value) -> bool {
        body.get("status")
            .and_then(Value::as_str)
            .is_some_and(is_health_word)
    }

    /// `(name, status)` of each component, sorted by name. A component is
    /// either a bare status string or an object with a `status` field;
    /// top-level fields only count when their value is UP or DOWN.
    pub fn component_statuses(&self) -> Vec<(String, String)> {
        let mut statuses: Vec<(String, String)> = self
            .components
            .iter()
            .chain(self.services.iter())
            .flat_map(|map| map.iter())
            .map(|(name, value)| {
                let status = match value {
                    Value::String(s) => s.clone(),
                    Value::Object(obj) => obj
                        .get("status")
                        .and_then(Value::as_str)
                        .unwrap_or("UNKNOWN")
                        .to_string(),
                    _ => "UNKNOWN".to_string(),
                };
                (name.clone(), status)
            })
            .collect();

        statuses.extend(self.details.iter().filter_map(|(name, value)| {
            value
                .as_str()
                .filter(|s| is_health_word(s))
                .map(|s| (name.clone(), s.to_string()))
        }));

        statuses.sort();
        statuses
    }
}
