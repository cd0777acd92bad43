//! Paywise Resource Clients
//!
//! Typed, mechanical pass-throughs over the shared transport in
//! `paywise-core`: each method maps one business operation to one fixed
//! path/verb pair, sends the typed body/query and unwraps the response
//! envelope into a typed model. No business logic lives here; the remote
//! service owns validation and state transitions.
//!
//! Three surfaces:
//! - [`collection`] — claims, debtors, mandates, payments, statements,
//!   requests-to-client (snake_case wire format)
//! - [`cases`] — the CRM-style case surface (camelCase wire format)
//! - [`partner`] — companies, users, user invites
//!
//! The `collection` and `cases` surfaces are two historically distinct
//! schemas served by the same vendor; they share nothing but the transport
//! and are deliberately kept apart.
//!
//! # Example
//!
//! ```rust,no_run
//! use paywise_apis::PaywiseClient;
//! use paywise_core::ClientConfig;
//!
//! # async fn example() -> paywise_core::Result<()> {
//! let client = PaywiseClient::new(ClientConfig::new(
//!     "https://api.paywise.de",
//!     "your-api-key",
//! ))?;
//!
//! let claims = client.collection.list_claims(Default::default()).await?;
//! println!("{} open claims", claims.count);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::return_self_not_must_use)]

pub mod cases;
mod client;
pub mod collection;
pub mod partner;
pub mod types;

pub use client::PaywiseClient;
pub use types::Paginated;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cases::CaseClient;
    pub use crate::client::PaywiseClient;
    pub use crate::collection::CollectionClient;
    pub use crate::partner::PartnerClient;
    pub use crate::types::Paginated;
    pub use paywise_core::{ClientConfig, Error, HttpClient, Result};
}
