//! Error types for loading the country dataset.

use thiserror::Error;

/// Network/fetch-related errors for the startup request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, DNS, offline, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Response body was not text
    #[error("Invalid response content")]
    InvalidContent,
    /// Body was not a JSON array of countries
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(FetchError::HttpError(503).to_string(), "HTTP error: 503");
        assert_eq!(
            FetchError::NetworkError("Failed to fetch".into()).to_string(),
            "Network error: Failed to fetch"
        );
        assert_eq!(
            FetchError::JsonParseError("expected `[`".into()).to_string(),
            "JSON parse error: expected `[`"
        );
    }
}
