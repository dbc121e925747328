//! Booking reference identifier.
//!
//! A reference is a short human-readable string of the form
//! `<prefix><timestamp-suffix><random>`, e.g. `NIR54321098A7KQ`:
//! a site prefix, the last eight digits of a millisecond timestamp, and
//! four random uppercase alphanumeric characters. Generation lives in the
//! ledger crate; this type only carries the value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of timestamp digits carried in a reference.
pub const TIMESTAMP_DIGITS: usize = 8;

/// Number of random characters appended to a reference.
pub const RANDOM_CHARS: usize = 4;

/// A booking reference identifier.
///
/// Unique across a ledger; treated as an opaque string by everything
/// except the generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingReference(String);

impl BookingReference {
    /// Wrap an existing reference string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Return the reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the reference and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BookingReference {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for BookingReference {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
