//! Booking reference generation.
//!
//! The single source of reference strings for the whole application: the
//! ledger assigns them at creation and the form controller borrows the
//! same generator for provisional preview references.

use chrono::Utc;
use rand::RngExt;

use nirvanica_core::types::reference::{BookingReference, RANDOM_CHARS, TIMESTAMP_DIGITS};

/// Characters eligible for the random tail of a reference.
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates booking references: `<prefix>` + the last eight digits of a
/// millisecond timestamp + four random uppercase alphanumerics.
#[derive(Debug, Clone)]
pub struct ReferenceGenerator {
    /// Site prefix, e.g. `"NIR"`.
    prefix: String,
}

impl ReferenceGenerator {
    /// Create a generator with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Generate a fresh reference.
    ///
    /// Uniqueness against an existing ledger is the caller's concern; the
    /// random tail makes collisions within one millisecond unlikely but
    /// not impossible.
    pub fn generate(&self) -> BookingReference {
        let millis = Utc::now().timestamp_millis().to_string();
        let stamp = &millis[millis.len().saturating_sub(TIMESTAMP_DIGITS)..];

        let mut rng = rand::rng();
        let tail: String = (0..RANDOM_CHARS)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect();

        BookingReference::new(format!("{}{stamp}{tail}", self.prefix))
    }

    /// The configured prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
