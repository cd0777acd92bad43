//! Error handling for the Paywise client.
//!
//! Every failure surfaces as a single [`Error`] value with a uniform shape,
//! regardless of the underlying cause:
//!
//! ```text
//! Error
//! ├── Api            - Error response from the Paywise API (4xx/5xx)
//! ├── Timeout        - The configured per-call timeout elapsed
//! ├── Network        - Transport failure, no response received (via NetworkError)
//! ├── Parse          - Response body could not be decoded
//! └── InvalidRequest - The request could not be constructed client-side
//! ```
//!
//! Callers implement their own retry policy by classifying errors:
//! [`Error::is_timeout`] identifies client-side timeouts (`code() ==
//! Some("TIMEOUT")`), [`Error::status`] is present exactly for
//! server-reported failures, and an error with neither is a raw network
//! failure whose cause is preserved behind [`std::error::Error::source`].
//! The library itself never retries.
//!
//! # Design
//!
//! - Strongly-typed errors using `thiserror`
//! - All public enums use `#[non_exhaustive]` for forward compatibility
//! - Large variants are boxed to keep the enum small
//! - Third-party transport types (`reqwest`) are not exposed in the public
//!   API; the original error stays reachable through `source()`

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Result type alias for all Paywise client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Machine code carried by client-side timeout errors.
pub const TIMEOUT_CODE: &str = "TIMEOUT";

/// Maximum length for error messages to prevent memory bloat from large
/// HTTP response bodies.
const MAX_ERROR_MESSAGE_LEN: usize = 1024;

fn truncate_message(mut msg: String) -> String {
    if msg.len() > MAX_ERROR_MESSAGE_LEN {
        msg.truncate(MAX_ERROR_MESSAGE_LEN);
        msg.push_str("... (truncated)");
    }
    msg
}

/// Details of an error response returned by the Paywise API.
///
/// Extracted to a separate struct and boxed to keep [`Error`] small.
///
/// # Example
///
/// ```rust
/// use paywise_core::error::ApiErrorDetails;
///
/// let details = ApiErrorDetails::new(404, "not found").with_code("NOT_FOUND");
/// assert_eq!(details.status, 404);
/// ```
#[derive(Debug)]
#[non_exhaustive]
pub struct ApiErrorDetails {
    /// Human-readable message, taken from the response body when available.
    pub message: String,
    /// HTTP status code of the error response.
    pub status: u16,
    /// Machine-readable error code supplied by the API, if any.
    pub code: Option<String>,
    /// Full decoded response body for debugging.
    pub details: Option<serde_json::Value>,
}

impl ApiErrorDetails {
    /// Creates new error details for the given status and message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: truncate_message(message.into()),
            status,
            code: None,
            details: None,
        }
    }

    /// Attaches the machine-readable error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attaches the full decoded response body.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl fmt::Display for ApiErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} (status: {}, code: {})", self.message, self.status, code),
            None => write!(f, "{} (status: {})", self.message, self.status),
        }
    }
}

/// Encapsulated network errors hiding implementation details.
///
/// Wraps transport-layer failures without exposing third-party library
/// types (like `reqwest::Error`) in the public API. The original failure is
/// preserved as the error source and never re-shaped into the normalized
/// API error form.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NetworkError {
    /// Connection could not be established (DNS, refused, TLS).
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request could not be sent.
    #[error("Request failed")]
    Transport(#[source] Box<dyn StdError + Send + Sync + 'static>),

    /// The response body could not be read.
    #[error("Failed to read response body")]
    Body(#[source] Box<dyn StdError + Send + Sync + 'static>),
}

/// The primary error type for the Paywise client.
///
/// Design constraints:
/// - Large variants are boxed to keep the enum size ≤ 56 bytes
/// - Static messages use `Cow<'static, str>` and allocate nothing
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error response returned by the API (status outside 2xx).
    #[error("API error: {0}")]
    Api(Box<ApiErrorDetails>),

    /// The request did not complete within the configured timeout.
    ///
    /// Carries the fixed message `"Request timeout"` and
    /// [`code()`](Error::code) `TIMEOUT`; no HTTP status is available.
    #[error("Request timeout")]
    Timeout,

    /// Transport-level failure, no response was received.
    #[error("Network error: {0}")]
    Network(Box<NetworkError>),

    /// Response body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The request could not be constructed.
    #[error("Invalid request: {0}")]
    InvalidRequest(Cow<'static, str>),
}

impl Error {
    /// Creates an API error from prepared details.
    pub fn api(details: ApiErrorDetails) -> Self {
        Self::Api(Box::new(details))
    }

    /// Creates a network error with a descriptive message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(Box::new(NetworkError::ConnectionFailed(message.into())))
    }

    /// Creates an invalid-request error.
    pub fn invalid_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Returns true if this is a client-side timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// HTTP status code of a server-reported failure, if any.
    ///
    /// Present exactly when the server responded with a non-2xx status;
    /// timeouts and network failures have no status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(details) => Some(details.status),
            _ => None,
        }
    }

    /// Machine-readable error code, if any.
    ///
    /// Timeouts always report [`TIMEOUT_CODE`]; API errors report the
    /// `code` field of the response body when it was a string.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Timeout => Some(TIMEOUT_CODE),
            Self::Api(details) => details.code.as_deref(),
            _ => None,
        }
    }

    /// Full decoded body of a server-reported failure, if any.
    pub fn details(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Api(details) => details.details.as_ref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout;
        }
        if err.is_connect() {
            return Self::Network(Box::new(NetworkError::ConnectionFailed(err.to_string())));
        }
        Self::Network(Box::new(NetworkError::Transport(Box::new(err))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_size() {
        // Boxed variants keep the enum small enough to move around cheaply.
        assert!(std::mem::size_of::<Error>() <= 56);
    }

    #[test]
    fn test_timeout_shape() {
        let err = Error::Timeout;
        assert_eq!(err.to_string(), "Request timeout");
        assert_eq!(err.code(), Some(TIMEOUT_CODE));
        assert_eq!(err.status(), None);
        assert!(err.is_timeout());
    }

    #[test]
    fn test_api_error_accessors() {
        let err = Error::api(
            ApiErrorDetails::new(404, "not found")
                .with_code("NOT_FOUND")
                .with_details(serde_json::json!({"message": "not found"})),
        );
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.code(), Some("NOT_FOUND"));
        assert!(err.details().is_some());
        assert!(!err.is_timeout());
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_network_error_has_no_status_or_code() {
        let err = Error::network("connection refused");
        assert_eq!(err.status(), None);
        assert_eq!(err.code(), None);
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_message_truncation() {
        let long = "x".repeat(5000);
        let details = ApiErrorDetails::new(500, long);
        assert!(details.message.len() < 1100);
        assert!(details.message.ends_with("... (truncated)"));
    }

    #[test]
    fn test_display_with_and_without_code() {
        let with_code = ApiErrorDetails::new(403, "forbidden").with_code("ACCESS_DENIED");
        assert_eq!(
            with_code.to_string(),
            "forbidden (status: 403, code: ACCESS_DENIED)"
        );
        let without_code = ApiErrorDetails::new(500, "oops");
        assert_eq!(without_code.to_string(), "oops (status: 500)");
    }
}
