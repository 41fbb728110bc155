// src/config/mod.rs

//! Layered configuration for the dashboard
//!
//! Configuration is assembled from prioritized layers that are deep-merged on
//! top of the built-in defaults:
//! - Configuration files (YAML, JSON, TOML)
//! - Environment variables (`ORDER_DASHBOARD__API__BASE_URL=...`)
//! - In-memory values (web builds, tests, CLI overrides)
//!
//! Values are read either as the typed [`AppConfig`] or by dotted key through
//! [`ConfigManager::get`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use tokio::sync::RwLock;

use crate::error::{Error, ErrorKind, Result};

/// Environment variable prefix read by [`ConfigManager::new`]
pub const ENV_PREFIX: &str = "ORDER_DASHBOARD";

/// Page sizes offered by the table pagination control
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub key: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error for '{}': {}", self.key, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ConfigSource {
    File { path: PathBuf, format: ConfigFormat },
    Environment { prefix: String },
    Memory { data: Value },
}

#[derive(Debug, Clone)]
pub struct ConfigLayer {
    pub name: String,
    pub source: ConfigSource,
    pub priority: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
    pub polling: PollingConfig,
    pub table: TableConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Checks the merged configuration for values the dashboard cannot run with
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.api.base_url.trim().is_empty() {
            errors.push(ValidationError {
                key: "api.base_url".to_string(),
                message: "must not be empty".to_string(),
            });
        } else if !(self.api.base_url.starts_with("http://")
            || self.api.base_url.starts_with("https://"))
        {
            errors.push(ValidationError {
                key: "api.base_url".to_string(),
                message: "must start with http:// or https://".to_string(),
            });
        }

        if self.api.timeout_secs == 0 {
            errors.push(ValidationError {
                key: "api.timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        let threshold = self.table.low_stock_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            errors.push(ValidationError {
                key: "table.low_stock_threshold".to_string(),
                message: format!("must be within (0, 1], got {}", threshold),
            });
        }

        if !PAGE_SIZE_OPTIONS.contains(&self.table.default_page_size) {
            errors.push(ValidationError {
                key: "table.default_page_size".to_string(),
                message: format!("must be one of {:?}", PAGE_SIZE_OPTIONS),
            });
        }

        for (key, secs) in [
            ("polling.dashboard_secs", self.polling.dashboard_secs),
            ("polling.health_secs", self.polling.health_secs),
            ("polling.orders_secs", self.polling.orders_secs),
            ("polling.payments_secs", self.polling.payments_secs),
            ("polling.inventory_secs", self.polling.inventory_secs),
        ] {
            if secs == 0 {
                errors.push(ValidationError {
                    key: key.to_string(),
                    message: "polling interval must be greater than zero".to_string(),
                });
            }
        }

        errors
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub environment: String,
    pub debug: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "Order Dashboard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
            debug: cfg!(debug_assertions),
        }
    }
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme and authority of the backend, e.g. `http://localhost:8080`
    pub base_url: String,
    /// Prefix for resource endpoints
    pub base_path: String,
    /// Liveness endpoint, resolved against `base_url` without `base_path`
    pub health_path: String,
    /// Uniform per-request timeout
    pub timeout_secs: u64,
    /// Route the UI navigates to after a 401
    pub login_route: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            base_path: "/api".to_string(),
            health_path: "/health".to_string(),
            timeout_secs: 30,
            login_route: "/login".to_string(),
        }
    }
}

/// Refetch intervals for the polling pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    pub dashboard_secs: u64,
    pub health_secs: u64,
    pub orders_secs: u64,
    pub payments_secs: u64,
    pub inventory_secs: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            dashboard_secs: 30,
            health_secs: 10,
            orders_secs: 10,
            payments_secs: 15,
            inventory_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub default_page_size: usize,
    /// Availability ratio at or below which an item counts as low stock
    pub low_stock_threshold: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            low_stock_threshold: 0.20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub console: ConsoleLogConfig,
    pub file: Option<FileLogConfig>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            console: ConsoleLogConfig::default(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleLogConfig {
    pub enabled: bool,
    pub colored: bool,
}

impl Default for ConsoleLogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colored: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileLogConfig {
    /// Base path of the daily-rolling log file
    pub path: PathBuf,
}

impl Default for FileLogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./logs/order-dashboard.log"),
        }
    }
}

pub struct ConfigManager {
    layers: Vec<ConfigLayer>,
    merged_config: Arc<RwLock<Value>>,
    env_prefix: Option<String>,
}

impl fmt::Debug for ConfigManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigManager")
            .field("layers", &self.layers.len())
            .field("env_prefix", &self.env_prefix)
            .finish()
    }
}

impl ConfigManager {
    /// Manager that reads `ORDER_DASHBOARD__*` environment overrides on load
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            merged_config: Arc::new(RwLock::new(Value::Object(Map::new()))),
            env_prefix: Some(ENV_PREFIX.to_string()),
        }
    }

    /// Manager with no implicit environment layer
    pub fn without_env() -> Self {
        Self {
            env_prefix: None,
            ..Self::new()
        }
    }

    pub fn with_config_file<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let mut manager = Self::new();
        manager.add_file_layer("file", config_path, 0)?;
        Ok(manager)
    }

    pub fn add_file_layer<P: AsRef<Path>>(
        &mut self,
        name: impl Into<String>,
        path: P,
        priority: u32,
    ) -> Result<()> {
        let path = path.as_ref().to_path_buf();
        let format = ConfigFormat::from_extension(&path).ok_or_else(|| {
            Error::config(format!(
                "Unsupported configuration file format: {}",
                path.display()
            ))
        })?;

        self.push_layer(ConfigLayer {
            name: name.into(),
            source: ConfigSource::File { path, format },
            priority,
        });
        Ok(())
    }

    pub fn add_env_layer(&mut self, name: impl Into<String>, prefix: impl Into<String>, priority: u32) {
        self.push_layer(ConfigLayer {
            name: name.into(),
            source: ConfigSource::Environment {
                prefix: prefix.into(),
            },
            priority,
        });
    }

    pub fn add_memory_layer(&mut self, name: impl Into<String>, data: Value, priority: u32) {
        self.push_layer(ConfigLayer {
            name: name.into(),
            source: ConfigSource::Memory { data },
            priority,
        });
    }

    fn push_layer(&mut self, layer: ConfigLayer) {
        self.layers.push(layer);
        self.layers.sort_by_key(|l| l.priority);
    }

    /// Reads every layer and rebuilds the merged view
    pub async fn load(&mut self) -> Result<()> {
        if let Some(prefix) = self.env_prefix.take() {
            self.add_env_layer("environment", prefix, 1000);
        }

        let mut merged = serde_json::to_value(AppConfig::default())?;

        // Lowest priority first so later layers win
        for layer in &self.layers {
            let layer_config = self.load_layer_config(layer)?;
            tracing::debug!(layer = %layer.name, priority = layer.priority, "merging config layer");
            merge_values(&mut merged, layer_config);
        }

        *self.merged_config.write().await = merged;
        Ok(())
    }

    pub async fn set<T>(&self, key: &str, value: T) -> Result<()>
    where
        T: Serialize,
    {
        let serialized_value = serde_json::to_value(value).map_err(|e| {
            Error::new(
                ErrorKind::Configuration {
                    key: Some(key.to_string()),
                    validation_errors: vec![format!("Failed to serialize config value: {}", e)],
                },
                format!("Failed to serialize config value: {}", e),
            )
        })?;

        let mut config = self.merged_config.write().await;
        set_nested_value(&mut config, key, serialized_value);
        Ok(())
    }

    pub async fn get<T>(&self, key: &str) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let config = self.merged_config.read().await;
        let value = get_nested_value(&config, key).ok_or_else(|| {
            Error::new(
                ErrorKind::Configuration {
                    key: Some(key.to_string()),
                    validation_errors: vec![format!("Configuration key '{}' not found", key)],
                },
                "Configuration key not found",
            )
        })?;

        serde_json::from_value(value).map_err(|e| {
            Error::new(
                ErrorKind::Configuration {
                    key: Some(key.to_string()),
                    validation_errors: vec![format!("Failed to deserialize config value: {}", e)],
                },
                format!("Failed to deserialize config value: {}", e),
            )
        })
    }

    /// Typed view of the merged configuration
    pub async fn get_config(&self) -> Result<AppConfig> {
        let config = self.merged_config.read().await;
        serde_json::from_value(config.clone()).map_err(|e| {
            Error::config(format!("Failed to deserialize configuration: {}", e))
        })
    }

    /// Typed view that fails when validation finds problems
    pub async fn validated_config(&self) -> Result<AppConfig> {
        let config = self.get_config().await?;
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(Error::invalid_config(
                errors.iter().map(ToString::to_string).collect(),
            ))
        }
    }

    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name.as_str()).collect()
    }

    fn load_layer_config(&self, layer: &ConfigLayer) -> Result<Value> {
        match &layer.source {
            #[cfg(not(target_arch = "wasm32"))]
            ConfigSource::File { path, format } => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    Error::config(format!(
                        "Failed to read config file {}: {}",
                        path.display(),
                        e
                    ))
                })?;

                match format {
                    ConfigFormat::Json => serde_json::from_str(&content)
                        .map_err(|e| Error::config(format!("Failed to parse JSON config: {}", e))),
                    ConfigFormat::Yaml => serde_yaml::from_str(&content)
                        .map_err(|e| Error::config(format!("Failed to parse YAML config: {}", e))),
                    ConfigFormat::Toml => toml::from_str(&content)
                        .map_err(|e| Error::config(format!("Failed to parse TOML config: {}", e))),
                }
            }

            #[cfg(target_arch = "wasm32")]
            ConfigSource::File { .. } => {
                Err(Error::config("File loading not supported in web platform"))
            }

            #[cfg(not(target_arch = "wasm32"))]
            ConfigSource::Environment { prefix } => {
                let mut env_config = Map::new();

                for (key, value) in std::env::vars() {
                    let Some(rest) = key.strip_prefix(prefix.as_str()) else {
                        continue;
                    };
                    let config_key = rest.trim_start_matches('_').to_lowercase();
                    if config_key.is_empty() {
                        continue;
                    }
                    let nested_keys: Vec<&str> = config_key.split("__").collect();
                    set_nested_env_value(&mut env_config, &nested_keys, value);
                }

                Ok(Value::Object(env_config))
            }

            #[cfg(target_arch = "wasm32")]
            ConfigSource::Environment { .. } => Ok(Value::Object(Map::new())),

            ConfigSource::Memory { data } => Ok(data.clone()),
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn merge_values(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, source_value) in source_map {
                match target_map.get_mut(&key) {
                    Some(target_value) => merge_values(target_value, source_value),
                    None => {
                        target_map.insert(key, source_value);
                    }
                }
            }
        }
        (target, source) => {
            *target = source;
        }
    }
}

fn get_nested_value(config: &Value, key: &str) -> Option<Value> {
    let mut current = config;
    for k in key.split('.') {
        current = current.get(k)?;
    }
    Some(current.clone())
}

fn set_nested_value(config: &mut Value, key: &str, value: Value) {
    let keys: Vec<&str> = key.split('.').collect();
    let Some((last, parents)) = keys.split_last() else {
        return;
    };
    let mut current = config;

    // Navigate or create intermediate objects
    for k in parents {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        let Some(map) = current.as_object_mut() else {
            return;
        };
        current = map
            .entry(k.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    if !current.is_object() {
        *current = Value::Object(Map::new());
    }
    if let Some(map) = current.as_object_mut() {
        map.insert(last.to_string(), value);
    }
}

fn set_nested_env_value(config: &mut Map<String, Value>, keys: &[&str], value: String) {
    let Some((first, rest)) = keys.split_first() else {
        return;
    };

    if rest.is_empty() {
        // Try to parse as different types
        let parsed_value = if let Ok(bool_val) = value.parse::<bool>() {
            Value::Bool(bool_val)
        } else if let Ok(int_val) = value.parse::<i64>() {
            Value::Number(Number::from(int_val))
        } else if let Some(float_val) = value
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
        {
            Value::Number(float_val)
        } else {
            Value::String(value)
        };

        config.insert(first.to_string(), parsed_value);
    } else {
        let entry = config
            .entry(first.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(nested_map) = entry {
            set_nested_env_value(nested_map, rest, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_defaults_without_layers() {
        let mut manager = ConfigManager::without_env();
        manager.load().await.unwrap();

        let config = manager.get_config().await.unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.validate().is_empty());
    }

    #[tokio::test]
    async fn test_file_layer() {
        let mut manager = ConfigManager::without_env();

        let mut temp_file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        temp_file
            .write_all(b"api:\n  base_url: \"http://orders.internal:9000\"\npolling:\n  orders_secs: 5\n")
            .unwrap();

        manager.add_file_layer("test", temp_file.path(), 0).unwrap();
        manager.load().await.unwrap();

        let base_url: String = manager.get("api.base_url").await.unwrap();
        assert_eq!(base_url, "http://orders.internal:9000");

        // Untouched keys keep their defaults
        let config = manager.get_config().await.unwrap();
        assert_eq!(config.polling.orders_secs, 5);
        assert_eq!(config.polling.inventory_secs, 30);
        assert_eq!(config.api.base_path, "/api");
    }

    #[tokio::test]
    async fn test_toml_file_layer() {
        let mut manager = ConfigManager::without_env();

        let mut temp_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        temp_file
            .write_all(b"[table]\ndefault_page_size = 25\n")
            .unwrap();

        manager.add_file_layer("toml", temp_file.path(), 0).unwrap();
        manager.load().await.unwrap();

        let size: usize = manager.get("table.default_page_size").await.unwrap();
        assert_eq!(size, 25);
    }

    #[test]
    fn test_unsupported_extension() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut manager = ConfigManager::without_env();
        assert!(manager.add_file_layer("bad", temp_file.path(), 0).is_err());
    }

    #[tokio::test]
    async fn test_environment_layer() {
        let mut manager = ConfigManager::without_env();

        std::env::set_var("ODTEST_ENV__API__BASE_URL", "http://env-host:8080");
        std::env::set_var("ODTEST_ENV__API__TIMEOUT_SECS", "12");
        std::env::set_var("ODTEST_ENV__APP__DEBUG", "false");

        manager.add_env_layer("env", "ODTEST_ENV", 100);
        manager.load().await.unwrap();

        let config = manager.get_config().await.unwrap();
        assert_eq!(config.api.base_url, "http://env-host:8080");
        assert_eq!(config.api.timeout_secs, 12);
        assert!(!config.app.debug);

        std::env::remove_var("ODTEST_ENV__API__BASE_URL");
        std::env::remove_var("ODTEST_ENV__API__TIMEOUT_SECS");
        std::env::remove_var("ODTEST_ENV__APP__DEBUG");
    }

    #[tokio::test]
    async fn test_memory_layer_priority() {
        let mut manager = ConfigManager::without_env();

        manager.add_memory_layer(
            "high",
            serde_json::json!({ "api": { "base_url": "http://high" } }),
            50,
        );
        manager.add_memory_layer(
            "low",
            serde_json::json!({ "api": { "base_url": "http://low", "base_path": "/v2" } }),
            10,
        );
        manager.load().await.unwrap();

        let config = manager.get_config().await.unwrap();
        assert_eq!(config.api.base_url, "http://high");
        assert_eq!(config.api.base_path, "/v2");
        assert_eq!(manager.layer_names(), vec!["low", "high"]);
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let mut manager = ConfigManager::without_env();
        manager.load().await.unwrap();

        manager.set("table.low_stock_threshold", 0.5).await.unwrap();
        let threshold: f64 = manager.get("table.low_stock_threshold").await.unwrap();
        assert_eq!(threshold, 0.5);

        assert!(manager.get::<String>("missing.key").await.is_err());
    }

    #[tokio::test]
    async fn test_validation_reports_each_problem() {
        let mut manager = ConfigManager::without_env();
        manager.add_memory_layer(
            "broken",
            serde_json::json!({
                "api": { "base_url": "", "timeout_secs": 0 },
                "table": { "default_page_size": 7, "low_stock_threshold": 1.5 }
            }),
            0,
        );
        manager.load().await.unwrap();

        let config = manager.get_config().await.unwrap();
        let keys: Vec<String> = config.validate().into_iter().map(|e| e.key).collect();
        assert_eq!(
            keys,
            vec![
                "api.base_url",
                "api.timeout_secs",
                "table.low_stock_threshold",
                "table.default_page_size"
            ]
        );

        let err = manager.validated_config().await.unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Configuration { .. }));
    }
}
