//! API error types for the SBEE REST API client.

use thiserror::Error;

/// API-specific error type for the SBEE REST API client.
///
/// Every public operation returns `ApiResult<T>`; no failure surfaces as a
/// panic. Callers branch on the variant instead of probing the response for
/// a sentinel key.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Dispatch was asked for an HTTP method the gateway does not accept.
    /// Raised before any network activity.
    #[error("invalid HTTP method: {0} (gateway accepts GET and POST)")]
    InvalidMethod(reqwest::Method),

    /// Transport-level failure: connection refused, timeout, TLS, …
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-success status.
    #[error("gateway returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body, often a gateway error description
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("deserialization error: {0}")]
    Deserialize(String),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 503,
            body: "upstream exchange unreachable".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("upstream exchange unreachable"));
    }

    #[test]
    fn test_invalid_method_display() {
        let err = ApiError::InvalidMethod(reqwest::Method::DELETE);
        assert!(err.to_string().contains("DELETE"));
    }
}
