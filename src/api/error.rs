// src/api/error.rs - Normalized errors returned to the UI by the API client

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::platform::NetworkResponse;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Coarse failure categories for errors the client synthesizes itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No response, or a non-5xx failure without a structured body
    NetworkError,
    /// 5xx without a structured body
    ServerError,
    /// A 2xx response whose body did not decode
    InvalidResponse,
    /// Rejected locally before anything was sent
    InvalidRequest,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NetworkError => "NETWORK_ERROR",
            Self::ServerError => "SERVER_ERROR",
            Self::InvalidResponse => "INVALID_RESPONSE",
            Self::InvalidRequest => "INVALID_REQUEST",
        }
    }

    /// `SERVER_ERROR` for 5xx, `NETWORK_ERROR` for everything else
    pub fn for_status(status: u16) -> Self {
        if (500..600).contains(&status) {
            Self::ServerError
        } else {
            Self::NetworkError
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ApiError {
    /// Structured error body sent by the backend, kept verbatim
    #[error("{}", backend_message(.status, .body))]
    Backend { status: u16, body: Value },

    /// Error built by the client; `status` is 0 when no response arrived
    #[error("{message}")]
    Synthesized {
        status: u16,
        code: ErrorCode,
        message: String,
    },
}

impl ApiError {
    /// Failure before any response was received
    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Synthesized {
            status: 0,
            code: ErrorCode::NetworkError,
            message: if message.is_empty() {
                "Network error".to_string()
            } else {
                message
            },
        }
    }

    pub fn invalid_response(status: u16, message: impl Into<String>) -> Self {
        Self::Synthesized {
            status,
            code: ErrorCode::InvalidResponse,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::Synthesized {
            status: 0,
            code: ErrorCode::InvalidRequest,
            message: message.into(),
        }
    }

    /// Normalizes a non-2xx response. A JSON object body passes through
    /// untouched; anything else becomes a synthesized error.
    pub fn from_response(response: &NetworkResponse) -> Self {
        let status = response.status_code;

        if let Ok(body @ Value::Object(_)) = serde_json::from_slice::<Value>(&response.body) {
            return Self::Backend { status, body };
        }

        let message = response
            .status_text
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        Self::Synthesized {
            status,
            code: ErrorCode::for_status(status),
            message,
        }
    }

    /// HTTP status, 0 when there was no response
    pub fn status(&self) -> u16 {
        match self {
            Self::Backend { status, .. } | Self::Synthesized { status, .. } => *status,
        }
    }

    /// The backend's own code (`code` or `errorCode`) for passed-through
    /// bodies, the synthesized code otherwise
    pub fn code(&self) -> String {
        match self {
            Self::Backend { status, body } => ["code", "errorCode"]
                .iter()
                .find_map(|key| body.get(key).and_then(Value::as_str))
                .map(str::to_string)
                .unwrap_or_else(|| ErrorCode::for_status(*status).as_str().to_string()),
            Self::Synthesized { code, .. } => code.as_str().to_string(),
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == 401
    }

    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Backend { body, .. } => Some(body),
            Self::Synthesized { .. } => None,
        }
    }
}

fn backend_message(status: &u16, body: &Value) -> String {
    ["message", "error"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}
