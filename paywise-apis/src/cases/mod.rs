//! CRM-style case API surface (camelCase wire format).
//!
//! Cases with comments, activities and attachments. Historically distinct
//! from the collection-law [`crate::collection`] surface; the two schemas
//! are never mixed.

mod client;
mod types;

pub use client::CaseClient;
pub use types::*;
