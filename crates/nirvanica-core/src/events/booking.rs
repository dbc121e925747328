//! Booking-related domain events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::BookingReference;

/// Events related to booking mutations.
///
/// Statuses are carried as their lowercase wire strings so this crate
/// stays free of entity dependencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BookingEvent {
    /// A booking was created.
    Created {
        /// The assigned booking reference.
        reference: BookingReference,
        /// Guest full name (for display).
        guest_name: String,
        /// Arrival date.
        check_in: NaiveDate,
        /// Departure date.
        check_out: NaiveDate,
        /// Total booking amount.
        total_amount: f64,
    },
    /// A booking's status changed.
    StatusChanged {
        /// The booking reference.
        reference: BookingReference,
        /// The new status.
        status: String,
    },
    /// A booking's fields were updated.
    Updated {
        /// The booking reference.
        reference: BookingReference,
        /// Fields that changed.
        changed_fields: Vec<String>,
    },
    /// A booking was deleted.
    Deleted {
        /// The booking reference.
        reference: BookingReference,
    },
}
