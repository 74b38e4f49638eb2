//! Types shared across the application, independent of the UI layer.

pub mod config;
pub mod error;

pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::ApiError;
