//! Collection-law API surface (snake_case wire format).
//!
//! Claims, debtors, mandates, payments, statements and requests-to-client,
//! as served under `/v1/`. Distinct from the CRM-style [`crate::cases`]
//! surface; the two schemas are never mixed.

mod client;
mod types;

pub use client::CollectionClient;
pub use types::*;
