//! Application configuration

use std::path::PathBuf;

use serde::Deserialize;
use validator::Validate;

use domain_export::{EndpointPolicy, HttpRenderConfig, FALLBACK_ENDPOINT, PRIMARY_ENDPOINT};

use crate::error::AppError;

/// Environment variable prefix for every setting
pub const ENV_PREFIX: &str = "STATEMENT";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    /// Rendering service base URL
    #[validate(url)]
    pub renderer_base_url: String,
    /// Endpoint tried first
    #[validate(length(min = 1))]
    pub primary_endpoint: String,
    /// Endpoint tried when the primary answers with a non-success status; blank disables the fallback
    pub fallback_endpoint: String,
    /// Per-request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    pub timeout_secs: u64,
    /// Directory rendered statements are written to
    pub output_dir: PathBuf,
    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            renderer_base_url: "http://localhost:3000".to_string(),
            primary_endpoint: PRIMARY_ENDPOINT.to_string(),
            fallback_endpoint: FALLBACK_ENDPOINT.to_string(),
            timeout_secs: 30,
            output_dir: PathBuf::from("."),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `STATEMENT_*` environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Loads `.env` if present, then the environment, then validates
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Self::from_env().map_err(|e| AppError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Endpoint attempt order
    pub fn endpoint_policy(&self) -> EndpointPolicy {
        EndpointPolicy::new(self.primary_endpoint.clone(), self.fallback_endpoint.clone())
    }

    /// Settings for the HTTP rendering adapter
    pub fn render_config(&self) -> HttpRenderConfig {
        HttpRenderConfig {
            base_url: self.renderer_base_url.clone(),
            timeout_secs: self.timeout_secs,
            health_endpoint: self.primary_endpoint.clone(),
        }
    }
}
