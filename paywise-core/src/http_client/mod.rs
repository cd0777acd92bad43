//! HTTP transport layer
//!
//! Executes exactly one HTTP request per call against the configured base
//! address, with:
//! - Bearer authentication from the configured API key
//! - Per-call timeout with deterministic cancellation
//! - Insertion-ordered query parameters (absent values dropped)
//! - Layered header merging (built-ins, configured defaults, per-call
//!   overrides)
//! - Content-type-driven response decoding
//! - Uniform success/error shapes ([`ApiResponse`] / normalized
//!   [`Error`](crate::error::Error))
//!
//! # Example
//!
//! ```rust,no_run
//! use paywise_core::http_client::{ClientConfig, HttpClient};
//!
//! # async fn example() -> paywise_core::Result<()> {
//! let config = ClientConfig::new("https://api.paywise.de", "your-api-key");
//! let client = HttpClient::new(config)?;
//!
//! let response = client.get("/v1/claims/", None, None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! One call is one attempt: there are no retries, no caching and no shared
//! mutable state between calls. Timing out one call has no effect on any
//! other call running through the same client.

mod body;
mod builder;
mod config;
mod headers;
mod query;
mod request;
mod response;

#[cfg(test)]
mod tests;

pub use body::RequestBody;
pub use builder::HttpClient;
pub use config::{ClientConfig, DEFAULT_TIMEOUT};
pub use query::QueryParams;
pub use request::RequestOptions;
pub use response::ApiResponse;
