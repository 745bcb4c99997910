//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::backend::RestSourceConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend data service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Project base URL; empty means run without a backend
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_rest_path")]
    pub rest_path: String,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_backend_timeout")]
    pub request_timeout_ms: u64,
}

fn default_rest_path() -> String {
    "/rest/v1".to_string()
}

fn default_backend_timeout() -> u64 {
    10_000 // 10 seconds
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            rest_path: default_rest_path(),
            api_key: None,
            request_timeout_ms: default_backend_timeout(),
        }
    }
}

impl BackendConfig {
    /// Whether a remote backend is configured at all
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    pub fn rest_source_config(&self) -> RestSourceConfig {
        RestSourceConfig {
            base_url: self.url.trim().to_string(),
            rest_path: self.rest_path.clone(),
            api_key: self.api_key.clone().filter(|k| !k.is_empty()),
            request_timeout_ms: self.request_timeout_ms,
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ]
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("matchboard").join("config.toml")),
            Some(PathBuf::from("/etc/matchboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Backend overrides
        if let Some(url) = var("MATCHBOARD_BACKEND_URL") {
            self.backend.url = url;
        }
        if let Some(key) = var("MATCHBOARD_BACKEND_KEY") {
            self.backend.api_key = Some(key);
        }

        // API overrides
        if let Some(host) = var("MATCHBOARD_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("MATCHBOARD_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = var("MATCHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("MATCHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Matchboard Configuration
#
# Environment variables override these settings:
# - MATCHBOARD_BACKEND_URL
# - MATCHBOARD_BACKEND_KEY
# - MATCHBOARD_API_HOST
# - MATCHBOARD_API_PORT
# - MATCHBOARD_LOG_LEVEL
# - MATCHBOARD_LOG_FORMAT

[backend]
# Base URL of the table API (e.g. a Supabase project URL).
# Leave empty to run without a backend; the dashboard then shows fallback values.
url = ""

# Path prefix of the table API
rest_path = "/rest/v1"

# API key sent as `apikey` header and bearer token
# api_key = ""

# Per-table request timeout (ms)
request_timeout_ms = 10000

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8090

# Allowed CORS origins
cors_origins = ["http://localhost:5173", "http://127.0.0.1:5173"]

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
