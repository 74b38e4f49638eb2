//! Shared Error Types
//!
//! Error types for the API client and session layers.
//!
//! # Error Categories
//!
//! - `Network` - transport-level failures (connection refused, timeouts)
//! - `Unauthorized` - 401 responses, including a failed credentials check
//!   or an expired session that could not be refreshed
//! - `Status` - any other non-success HTTP status, with the server-supplied
//!   message when one is present
//! - `Decode` - response body did not match the expected JSON shape
//!
//! All variants are `Clone` so a failure can be stored in view state and
//! re-rendered every frame.
use thiserror::Error;

/// Errors surfaced by the API client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure before any HTTP status was received
    #[error("network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },

    /// 401 response that survived the single refresh-and-retry attempt
    #[error("{message}")]
    Unauthorized {
        /// Server-supplied message, or a generic fallback
        message: String,
    },

    /// Any other non-success HTTP status
    #[error("{message} (HTTP {status})")]
    Status {
        /// HTTP status code
        status: u16,
        /// Server-supplied message, or the raw body
        message: String,
    },

    /// Response body could not be decoded into the expected type
    #[error("failed to decode response: {message}")]
    Decode {
        /// Human-readable error message
        message: String,
    },
}

impl ApiError {
    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Build an error from a non-success status and the raw response body.
    ///
    /// The backend reports failures as `{"error": "..."}` and the token
    /// endpoints as `{"detail": "..."}`; either field is extracted when
    /// present, otherwise the raw body (or the canonical status reason)
    /// is used.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body).unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("request failed with status {}", status)
            } else {
                body.trim().to_string()
            }
        });

        if status == 401 {
            Self::Unauthorized { message }
        } else {
            Self::Status { status, message }
        }
    }

    /// Whether this error indicates a dead session
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// Pull a human-readable message out of a JSON error body.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["error", "detail"] {
        if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
            return Some(message.to_string());
        }
    }
    None
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(format!("JSON error: {}", err))
    }
}
