use crate::credentials::SecretString;
use crate::error::{Error, Result};
use std::time::Duration;

/// Default per-call timeout (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Client configuration.
///
/// Created once at client construction and read-only afterwards; the
/// transport owns it exclusively and never mutates it, which is what makes
/// concurrent calls through one client safe without locking.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base address, e.g. `https://api.paywise.de`.
    pub base_url: String,
    /// API key sent as `Authorization: Bearer <key>` on every request.
    pub api_key: SecretString,
    /// Per-call timeout, measured from call start to decoded response.
    pub timeout: Duration,
    /// Extra headers applied to every request, after the built-in
    /// `Content-Type` and `Authorization` headers and before any per-call
    /// overrides.
    pub default_headers: Vec<(String, String)>,
    /// User-Agent header value.
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration with the required base address and API key;
    /// everything else takes its default.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<SecretString>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            default_headers: Vec::new(),
            user_agent: concat!("paywise-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Sets the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Appends a default header applied to every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Sets the User-Agent header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base address or API key is empty, or if the
    /// timeout is zero.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::invalid_request("base_url must not be empty"));
        }
        if self.api_key.is_empty() {
            return Err(Error::invalid_request("api_key must not be empty"));
        }
        if self.timeout.is_zero() {
            return Err(Error::invalid_request("timeout must be greater than zero"));
        }
        Ok(())
    }
}
