//! Partner API surface: companies, users and user invites.
//!
//! Used by integration partners to onboard and manage client companies and
//! their users.

mod client;
mod types;

pub use client::PartnerClient;
pub use types::*;
