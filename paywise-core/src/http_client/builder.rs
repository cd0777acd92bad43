use crate::error::{Error, Result};
use reqwest::{Client, Url};
use std::time::Duration;

use super::config::ClientConfig;

/// HTTP client executing one request per call against the configured base
/// address.
///
/// Cloning is cheap (the underlying connection pool is shared) and a single
/// instance may serve arbitrarily many concurrent calls; each call owns its
/// own timer and cancellation, with no coordination between calls.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    config: ClientConfig,
}

impl HttpClient {
    /// Creates a new HTTP client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration fails validation
    /// - The base address is not a valid absolute URL
    /// - The underlying HTTP client cannot be built
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::invalid_request(format!("Invalid base URL: {e}")))?;

        // The per-call deadline lives in `execute`; only the TCP connect is
        // bounded here.
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// Returns a reference to the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Internal: Returns reference to the underlying reqwest client.
    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Internal: Returns the parsed base address.
    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }
}
