// src/error.rs - Crate-wide error type shared by config, platform and API layers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::api::ApiError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ErrorKind {
    Configuration {
        key: Option<String>,
        validation_errors: Vec<String>,
    },
    Platform {
        platform: String,
        feature: String,
        fallback_available: bool,
    },
    Network {
        status_code: Option<u16>,
        endpoint: Option<String>,
    },
    /// Normalized failure of a backend call
    Api(ApiError),
    Storage {
        key: Option<String>,
    },
    Validation {
        field: Option<String>,
        rules: Vec<String>,
    },
    Application,
    Io,
    Serialization,
    Timeout,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub id: Uuid,
    pub kind: ErrorKind,
    pub message: String,
    pub severity: ErrorSeverity,
    pub source: String,
    pub correlation_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub metadata: crate::types::Metadata,
    pub causes: Vec<String>,
}

impl Error {
    /// Creates a new error with the specified kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            severity: ErrorSeverity::Medium,
            source: "unknown".to_string(),
            correlation_id: None,
            timestamp: crate::utils::Time::now(),
            metadata: std::collections::HashMap::new(),
            causes: Vec::new(),
        }
    }

    /// Sets the error severity
    pub fn severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the error source
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Sets the correlation ID of the request that produced the error
    pub fn correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    /// Adds metadata to the error
    pub fn metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Adds a cause to the error chain
    pub fn caused_by(mut self, cause: impl fmt::Display) -> Self {
        self.causes.push(cause.to_string());
        self
    }

    /// Creates a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Configuration {
                key: None,
                validation_errors: Vec::new(),
            },
            message,
        )
        .severity(ErrorSeverity::High)
    }

    /// Creates a configuration error carrying the individual validation failures
    pub fn invalid_config(validation_errors: Vec<String>) -> Self {
        let message = format!(
            "Configuration is invalid: {}",
            validation_errors.join("; ")
        );
        Self::new(
            ErrorKind::Configuration {
                key: None,
                validation_errors,
            },
            message,
        )
        .severity(ErrorSeverity::High)
    }

    /// Creates a platform-specific error
    pub fn platform(
        platform: impl Into<String>,
        feature: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            ErrorKind::Platform {
                platform: platform.into(),
                feature: feature.into(),
                fallback_available: false,
            },
            message,
        )
        .severity(ErrorSeverity::Medium)
    }

    /// Creates a transport-level network error (no response was received)
    pub fn network(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Network {
                status_code: None,
                endpoint: Some(endpoint.into()),
            },
            message,
        )
    }

    /// Creates a key-value storage error
    pub fn storage(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Storage {
                key: Some(key.into()),
            },
            message,
        )
    }

    /// Creates a validation error for a single field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(
            ErrorKind::Validation {
                field: Some(field.into()),
                rules: vec![message.clone()],
            },
            message,
        )
        .severity(ErrorSeverity::Low)
    }

    /// Creates a timeout error
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.severity, self.source, self.id, self.message
        )
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(ErrorKind::Io, err.to_string())
            .source("std::io::Error")
            .severity(ErrorSeverity::High)
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        let status_code = err.status();
        let message = err.message();
        let severity = if status_code >= 500 || status_code == 0 {
            ErrorSeverity::High
        } else {
            ErrorSeverity::Medium
        };
        Error::new(ErrorKind::Api(err), message)
            .source("api_client")
            .severity(severity)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(ErrorKind::Serialization, err.to_string()).source("serde_json")
    }
}

/// Extension trait for Results to add context
pub trait ResultExt<T> {
    /// Adds context to an error
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Error::new(ErrorKind::Application, f()).caused_by(e))
    }
}
