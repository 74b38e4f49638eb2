//! Application configuration module
//!
//! Provides configuration types for the application.

use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Base URL of the analytics API, including the `/api` prefix
    pub api_base_url: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    api_base_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl AppConfigBuilder {
    /// Set the API base URL
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Set the per-request timeout in seconds
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        if let Some(ref url) = self.api_base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(AppConfig {
            api_base_url: self.api_base_url,
            request_timeout_secs: self.request_timeout_secs,
        })
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accepts_http_url() {
        let config = AppConfig::builder()
            .api_base_url("http://127.0.0.1:8000/api")
            .build()
            .unwrap();
        assert_eq!(
            config.api_base_url.as_deref(),
            Some("http://127.0.0.1:8000/api")
        );
    }

    #[test]
    fn test_builder_rejects_bad_scheme() {
        let result = AppConfig::builder().api_base_url("ftp://nope").build();
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_builder_defaults() {
        let config = AppConfig::builder().build().unwrap();
        assert!(config.api_base_url.is_none());
        assert!(config.request_timeout_secs.is_none());
    }
}
