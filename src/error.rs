//! Error types for paginate-kit
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// The main error type for paginate-kit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Helper Argument Errors
    // ============================================================================
    #[error("paginate: `{argument}` {message}")]
    InvalidArgument { argument: String, message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Pagination middleware is not installed: missing request extension {extension}")]
    MissingMiddleware { extension: &'static str },
}

impl Error {
    /// Create an invalid argument error for a helper call
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error was caused by bad caller input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    fn status(&self) -> StatusCode {
        match self {
            Error::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = json!({ "success": false, "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Result type alias for paginate-kit
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("pageCount", "is not a number >= 0");
        assert_eq!(err.to_string(), "paginate: `pageCount` is not a number >= 0");

        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::MissingMiddleware {
            extension: "PageContext",
        };
        assert!(err.to_string().contains("PageContext"));
    }

    #[test]
    fn test_is_invalid_argument() {
        assert!(Error::invalid_argument("limit", "is not a number >= 0").is_invalid_argument());
        assert!(!Error::config("test").is_invalid_argument());
        assert!(!Error::MissingMiddleware {
            extension: "PageContext",
        }
        .is_invalid_argument());
    }

    #[test]
    fn test_into_response_status() {
        let response = Error::invalid_argument("currentPage", "is not within valid range")
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = Error::MissingMiddleware {
            extension: "PaginationState",
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
