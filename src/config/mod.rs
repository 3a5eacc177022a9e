use axum::http::HeaderValue;
use serde::{de::DeserializeOwned, Deserialize};
use std::time::Duration;
use thiserror::Error;

/// Environment variable prefix, e.g. `FOODVALLEY_PORT`
pub const ENV_PREFIX: &str = "FOODVALLEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading error: {message}")]
    LoadError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
    #[serde(default = "default_max_request_size")]
    pub max_request_size: u64,
    /// Comma-separated list of origins allowed to call the API
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_service_version")]
    pub service_version: String,
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub enable_json_logging: bool,
}

impl Config {
    pub fn from_environment() -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| ConfigError::LoadError {
                message: format!("Failed to read environment: {}", e),
            })?;

        Self::from_settings(settings)
    }

    /// Build from an already assembled settings tree
    pub fn from_settings(settings: config::Config) -> Result<Self, ConfigError> {
        let config = Config {
            server: section(&settings, "server")?,
            observability: section(&settings, "observability")?,
        };
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let server = &self.server;

        if server.port == 0 {
            return Err(invalid("Server port cannot be 0"));
        }
        if server.request_timeout_seconds == 0 {
            return Err(invalid("Request timeout cannot be 0"));
        }
        if server.max_request_size == 0 {
            return Err(invalid("Maximum request size cannot be 0"));
        }
        server.cors_origins()?;

        Ok(())
    }
}

/// Both sections read from the same flat key space, so `FOODVALLEY_PORT`
/// and `FOODVALLEY_LOG_LEVEL` sit side by side
fn section<T: DeserializeOwned>(settings: &config::Config, name: &str) -> Result<T, ConfigError> {
    settings
        .clone()
        .try_deserialize()
        .map_err(|e| ConfigError::LoadError {
            message: format!("Invalid {} settings: {}", name, e),
        })
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Parsed CORS allow-list. Empty entries are skipped; at least one origin
    /// must remain.
    pub fn cors_origins(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        let origins = self
            .allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| invalid(format!("Invalid allowed origin: {}", origin)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if origins.is_empty() {
            return Err(invalid("At least one allowed origin is required"));
        }

        Ok(origins)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_timeout(),
            max_request_size: default_max_request_size(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

// Default value functions
pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    12001
}

pub(crate) fn default_timeout() -> u64 {
    30
}

pub(crate) fn default_max_request_size() -> u64 {
    100 * 1024
}

pub(crate) fn default_allowed_origins() -> String {
    "http://localhost:3000".to_string()
}

pub(crate) fn default_service_name() -> String {
    "food-valley-rs".to_string()
}

pub(crate) fn default_service_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests;
