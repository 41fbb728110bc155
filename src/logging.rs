// src/logging.rs

//! Native tracing setup
//!
//! Installs a global `tracing` subscriber with an env-filter, an optional
//! console layer and an optional daily-rolling file layer. Web builds use
//! `tracing-wasm` instead (see `lib.rs`).

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::Identity;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{Error, Result, ResultExt};

/// Keeps the non-blocking file writer alive; drop it on shutdown to flush
#[derive(Debug)]
pub struct LoggingGuard {
    _guards: Vec<WorkerGuard>,
}

/// Picks the filter directive: explicit override first, then configuration
pub fn effective_level(config: &LoggingConfig, override_level: Option<&str>) -> String {
    override_level
        .map(str::to_string)
        .unwrap_or_else(|| config.level.clone())
}

/// Installs the global subscriber described by `config`
pub fn init(config: &LoggingConfig, override_level: Option<&str>) -> Result<LoggingGuard> {
    let level = effective_level(config, override_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));
    let mut guards = Vec::new();

    let registry = Registry::default().with(filter);

    let registry = if config.console.enabled {
        let console_layer = fmt::layer()
            .with_ansi(config.console.colored)
            .with_target(true)
            .with_line_number(true)
            .boxed();
        registry.with(console_layer)
    } else {
        registry.with(Identity::new().boxed())
    };

    let registry = if let Some(file_config) = &config.file {
        let directory = file_config
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = file_config
            .path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("order-dashboard.log"));

        std::fs::create_dir_all(directory)
            .with_context(|| format!("Failed to create log directory: {}", directory.display()))?;

        let file_appender = tracing_appender::rolling::daily(directory, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        guards.push(guard);

        let file_layer = match config.format {
            LogFormat::Json => fmt::layer().json().with_writer(non_blocking).boxed(),
            LogFormat::Pretty => fmt::layer()
                .pretty()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed(),
            LogFormat::Compact => fmt::layer()
                .compact()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed(),
        };
        registry.with(file_layer)
    } else {
        registry.with(Identity::new().boxed())
    };

    registry
        .try_init()
        .map_err(|e| Error::config(format!("Failed to install tracing subscriber: {}", e)))?;

    tracing::info!(level = %level, file = config.file.is_some(), "logging initialized");
    Ok(LoggingGuard { _guards: guards })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileLogConfig;

    #[test]
    fn test_effective_level_prefers_override() {
        let config = LoggingConfig::default();
        assert_eq!(effective_level(&config, None), "info");
        assert_eq!(effective_level(&config, Some("debug")), "debug");
    }

    #[test]
    fn test_init_creates_log_directory_and_installs_once() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("nested").join("logs");
        let config = LoggingConfig {
            format: LogFormat::Json,
            file: Some(FileLogConfig {
                path: log_dir.join("dashboard.log"),
            }),
            ..LoggingConfig::default()
        };

        let guard = init(&config, Some("debug")).unwrap();
        assert!(log_dir.is_dir());

        // A second global subscriber is rejected rather than panicking
        assert!(init(&LoggingConfig::default(), None).is_err());
        drop(guard);
    }
}
