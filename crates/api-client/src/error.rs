//! Error types for the API client

use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Error body from the API
        message: String,
    },

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The background fetch task panicked
    #[error("Fetch task failed: {0}")]
    Task(String),

    /// Settings or paging error from `samplekit-core`
    #[error(transparent)]
    Core(#[from] samplekit_core::Error),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if *status >= 500)
    }

    /// Check if the body could not be decoded
    #[must_use]
    pub fn is_decode_error(&self) -> bool {
        match self {
            Self::Json(_) => true,
            Self::Request(e) => e.is_decode(),
            _ => false,
        }
    }

    /// Check if the server could not be reached
    #[must_use]
    pub fn is_connect_error(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_connect() || e.is_timeout())
    }

    /// HTTP status, when the server answered
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiResponse { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let not_found = ApiError::api_response(404, "missing");
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());
        assert_eq!(not_found.status(), Some(404));

        let unavailable = ApiError::api_response(503, "down");
        assert!(unavailable.is_server_error());
        assert!(!unavailable.is_decode_error());
    }

    #[test]
    fn test_json_is_decode_error() {
        let err: ApiError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(err.is_decode_error());
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: ApiError = samplekit_core::Error::invalid_page("page 0 is before 1").into();
        assert!(err.to_string().contains("page 0 is before 1"));
    }
}
