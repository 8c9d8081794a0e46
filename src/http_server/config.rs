//! HTTP Server Configuration
//!
//! Host, port, CORS, API token and telemetry settings.
//!
//! Sources, later ones winning:
//! 1. Built-in defaults
//! 2. JSON config file (optional)
//! 3. Environment: `HOST`, `PORT`, `API_TOKEN`, `CORS_ORIGINS`
//!    (comma separated), `LOG_LEVEL`, `LOG_FORMAT`

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::TelemetryConfig;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },

    #[error("API_TOKEN is not set")]
    MissingApiToken,
}

impl From<config::ConfigError> for ConfigError {
    fn from(e: config::ConfigError) -> Self {
        ConfigError::Load(e.to_string())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Bearer token every bookmark request must present
    #[serde(default)]
    pub api_token: Option<String>,

    /// Logging settings, as top-level `log_level` / `log_format` keys
    #[serde(flatten)]
    pub telemetry: TelemetryConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            api_token: None,
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Set the API token
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Load defaults, then the optional file, then the process environment
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        Self::load_layered(path, Environment::default())
    }

    /// Read a JSON config file alone. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let config = Config::builder().add_source(json_file(path)).build()?;
        Ok(config.try_deserialize()?)
    }

    fn load_layered(path: Option<&Path>, env: Environment) -> ConfigResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(json_file(path));
        }

        let config: Self = builder
            .add_source(
                env.try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_origins"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "host",
                message: "must not be empty".to_string(),
            });
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                key: "port",
                message: "must be > 0".to_string(),
            });
        }
        Ok(())
    }

    /// The configured API token, required before serving
    pub fn require_api_token(&self) -> ConfigResult<&str> {
        match self.api_token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ConfigError::MissingApiToken),
        }
    }

    /// Copy safe to print, with the token masked
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.api_token.is_some() {
            copy.api_token = Some("********".to_string());
        }
        copy
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn json_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Json).required(true)
}
