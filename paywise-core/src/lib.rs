//! Paywise Core Library
//!
//! Core building blocks for the Paywise API client: the shared HTTP
//! transport, client configuration, credential handling and the normalized
//! error types used by every resource client.
//!
//! # Features
//!
//! - **Async/Await**: Built on tokio, one suspended task per in-flight call
//! - **Uniform outcomes**: every call resolves to an [`ApiResponse`] or a
//!   normalized [`Error`], never both
//! - **Error Handling**: Comprehensive error types with `thiserror`
//! - **Credential hygiene**: API keys are held in [`SecretString`] and zeroed
//!   on drop
//!
//! # Example
//!
//! ```rust,no_run
//! use paywise_core::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let config = ClientConfig::new("https://api.paywise.de", "your-api-key");
//! let client = HttpClient::new(config)?;
//!
//! let response = client.get("/v1/claims/", None, None).await?;
//! println!("status {}", response.status);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]

// Re-exports of external dependencies
pub use serde;
pub use serde_json;

// Core modules
pub mod credentials;
pub mod error;
pub mod http_client;
pub mod logging;

// Re-exports of core types for convenience
pub use credentials::SecretString;
pub use error::{ApiErrorDetails, Error, NetworkError, Result, TIMEOUT_CODE};
pub use http_client::{
    ApiResponse, ClientConfig, HttpClient, QueryParams, RequestBody, RequestOptions,
    DEFAULT_TIMEOUT,
};

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```rust
/// use paywise_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::credentials::SecretString;
    pub use crate::error::{ApiErrorDetails, Error, NetworkError, Result};
    pub use crate::http_client::{
        ApiResponse, ClientConfig, HttpClient, QueryParams, RequestBody, RequestOptions,
    };
    pub use crate::logging::{init_logging, try_init_logging, LogConfig, LogFormat, LogLevel};
    pub use serde::{Deserialize, Serialize};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "paywise-core");
    }
}
