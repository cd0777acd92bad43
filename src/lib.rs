//! # Paywise Rust Client
//!
//! A Rust client library for the Paywise debt-collection API, providing
//! typed access to the case-management and partner API surfaces over one
//! shared HTTP transport.
//!
//! ## Features
//!
//! - **Async/Await**: Built on tokio, one suspended task per in-flight call
//! - **Type Safety**: Typed request and response models for every resource
//! - **Uniform errors**: timeouts, API errors and network failures are
//!   distinguishable from one error type
//! - **No hidden policy**: no retries, no caching, no global state — one
//!   call is one request
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paywise_rs::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = PaywiseClient::new(ClientConfig::new(
//!         "https://api.paywise.de",
//!         std::env::var("PAYWISE_API_KEY").expect("PAYWISE_API_KEY not set"),
//!     ))?;
//!
//!     let claims = client.collection.list_claims(Default::default()).await?;
//!     println!("{} claims", claims.count);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// Re-export core types
pub use paywise_core::{
    ApiErrorDetails, ApiResponse, ClientConfig, Error, HttpClient, NetworkError, QueryParams,
    RequestBody, RequestOptions, Result, SecretString,
};

// Re-export the resource clients and facade
pub use paywise_apis::{cases, collection, partner, Paginated, PaywiseClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use paywise_apis::prelude::*;
    pub use paywise_core::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
