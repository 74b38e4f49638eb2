use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default API base URL
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Default per-request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let api_base_url =
            std::env::var("DASHBOARD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let app = match AppConfig::builder().api_base_url(&api_base_url).build() {
            Ok(app) => app,
            Err(e) => {
                tracing::warn!(
                    url = %api_base_url,
                    error = %e,
                    "ignoring invalid DASHBOARD_API_URL, using the default"
                );
                AppConfig {
                    api_base_url: Some(DEFAULT_API_URL.to_string()),
                    request_timeout_secs: None,
                }
            }
        };
        Self { app }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Create a configuration pointing at an explicit base URL
    pub fn with_base_url(url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_builder(AppConfig::builder().api_base_url(url))
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url().trim_end_matches('/'), path)
    }

    pub fn base_url(&self) -> &str {
        self.app.api_base_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Per-request timeout
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(
            self.app.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_new() {
        std::env::remove_var("DASHBOARD_API_URL");
        let config = Config::new();
        assert_eq!(config.base_url(), "http://127.0.0.1:8000/api");
    }

    #[test]
    #[serial]
    fn test_env_override() {
        std::env::set_var("DASHBOARD_API_URL", "http://analytics.test/api");
        let config = Config::new();
        assert_eq!(config.base_url(), "http://analytics.test/api");
        std::env::remove_var("DASHBOARD_API_URL");
    }

    #[test]
    #[serial]
    fn test_invalid_env_url_falls_back_to_default() {
        std::env::set_var("DASHBOARD_API_URL", "not-a-url");
        let config = Config::new();
        assert_eq!(config.base_url(), "http://127.0.0.1:8000/api");
        std::env::remove_var("DASHBOARD_API_URL");
    }

    #[test]
    fn test_api_url() {
        let config = Config::with_base_url("http://127.0.0.1:8000/api").unwrap();
        assert_eq!(
            config.api_url("/auth/login/"),
            "http://127.0.0.1:8000/api/auth/login/"
        );
    }

    #[test]
    fn test_api_url_trims_trailing_slash() {
        let config = Config::with_base_url("http://127.0.0.1:8000/api/").unwrap();
        assert_eq!(
            config.api_url("/analysis/region-sales/"),
            "http://127.0.0.1:8000/api/analysis/region-sales/"
        );
    }
}
