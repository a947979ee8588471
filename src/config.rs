//! Application Configuration
//!
//! Host-owned settings handed to `App` at mount time.

use serde::Deserialize;
use thiserror::Error;

use inventory_domain::{CategorySet, DEFAULT_CATEGORIES, DEFAULT_EXPORT_FILENAME};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// How remote requests authenticate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum AuthMode {
    #[serde(rename = "API_KEY")]
    ApiKey,
    #[default]
    #[serde(rename = "NONE")]
    None,
}

/// Managed GraphQL endpoint settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    pub endpoint: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub auth_mode: AuthMode,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub categories: Vec<String>,
    pub export_filename: String,
    pub log_level: String,
    /// Remote sync is disabled when absent
    pub api: Option<ApiConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
            log_level: "info".to_string(),
            api: None,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.export_filename.trim().is_empty() {
            return Err(ConfigError::Invalid("export_filename is empty".into()));
        }
        if let Some(api) = &self.api {
            if !(api.endpoint.starts_with("https://") || api.endpoint.starts_with("http://")) {
                return Err(ConfigError::Invalid(format!("api.endpoint is not an http(s) URL: {:?}", api.endpoint)));
            }
            if api.auth_mode == AuthMode::ApiKey && api.api_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
                return Err(ConfigError::Invalid("api.api_key is required for API_KEY auth".into()));
            }
        }
        Ok(())
    }

    pub fn category_set(&self) -> CategorySet {
        CategorySet::from_names(&self.categories)
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
