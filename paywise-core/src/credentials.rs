//! Secure credential types with automatic memory zeroization.
//!
//! The Paywise API authenticates with a static bearer token; that token is
//! held in a [`SecretString`] so it is cleared from memory when dropped and
//! cannot leak through `Debug`/`Display` output.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A secure string that is automatically zeroed when dropped.
///
/// Use this for API keys and other sensitive data. Debug and Display output
/// is redacted so the value cannot end up in logs by accident.
///
/// # Example
///
/// ```rust
/// use paywise_core::credentials::SecretString;
///
/// let api_key = SecretString::new("pk-live-12345");
/// assert_eq!(api_key.expose_secret(), "pk-live-12345");
/// assert_eq!(format!("{api_key:?}"), "[REDACTED]");
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Creates a new secret string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the secret value.
    ///
    /// The reference should be used immediately and not persisted.
    #[inline]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Returns the length of the secret string.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the secret string is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
