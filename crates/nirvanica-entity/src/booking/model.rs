//! Booking record entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use nirvanica_core::types::BookingReference;

use super::room::RoomSelection;
use super::status::BookingStatus;

/// A single reservation with guest, date-range, room-selection, and
/// financial fields.
///
/// Serialized camelCase as one element of the persisted JSON array. The
/// ledger owns every record; readers receive defensive copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    /// Unique booking reference, assigned at creation.
    pub id: BookingReference,
    /// Guest first name.
    pub first_name: String,
    /// Guest last name.
    pub last_name: String,
    /// Guest email address.
    pub email: String,
    /// Guest phone number.
    pub phone: String,
    /// Arrival date.
    pub check_in: NaiveDate,
    /// Departure date. Always strictly after `check_in`.
    pub check_out: NaiveDate,
    /// Number of nights between the two dates. Always at least one.
    pub nights: i64,
    /// Adult guest count.
    pub adults: u32,
    /// Child guest count.
    pub children: u32,
    /// Elder guest count.
    pub elders: u32,
    /// Infant guest count.
    pub infants: u32,
    /// Sum of the four guest counts.
    pub total_guests: u32,
    /// User-declared cap on total rooms.
    pub total_rooms: u32,
    /// Selected room categories, in selection order.
    pub selected_rooms: Vec<RoomSelection>,
    /// Total amount: Σ price × quantity × nights over the selections.
    pub total_amount: f64,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Free-form guest requests. May be empty.
    pub special_requests: String,
    /// How the stay is paid for.
    pub payment_method: String,
    /// Where the booking originated.
    pub booking_source: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last mutated.
    pub updated_at: DateTime<Utc>,
}

impl BookingRecord {
    /// Build a record from a draft, assigning identity and timestamps.
    ///
    /// New records always start out `Confirmed`.
    pub fn from_draft(id: BookingReference, draft: BookingDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            phone: draft.phone,
            check_in: draft.check_in,
            check_out: draft.check_out,
            nights: draft.nights,
            adults: draft.adults,
            children: draft.children,
            elders: draft.elders,
            infants: draft.infants,
            total_guests: draft.total_guests,
            total_rooms: draft.total_rooms,
            selected_rooms: draft.selected_rooms,
            total_amount: draft.total_amount,
            status: BookingStatus::Confirmed,
            special_requests: draft.special_requests,
            payment_method: draft.payment_method,
            booking_source: draft.booking_source,
            created_at: now,
            updated_at: now,
        }
    }

    /// Guest full name, first and last joined with a space.
    pub fn guest_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Recompute the total amount from the selections and night count.
    ///
    /// Invariant: always equal to the stored `total_amount`.
    pub fn recomputed_total(&self) -> f64 {
        self.selected_rooms
            .iter()
            .map(RoomSelection::nightly_subtotal)
            .sum::<f64>()
            * self.nights as f64
    }

    /// Display label for the booking's room category.
    ///
    /// A single selected category yields its name; anything else is `Mixed`.
    pub fn room_type_label(&self) -> &str {
        match self.selected_rooms.as_slice() {
            [only] => &only.room_type,
            _ => "Mixed",
        }
    }

    /// Total number of selected rooms across all categories.
    pub fn selected_room_count(&self) -> u32 {
        self.selected_rooms.iter().map(|r| r.quantity).sum()
    }
}

/// Caller-supplied fields for creating a booking.
///
/// The ledger merges a draft with a generated reference, the initial
/// status, and creation timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    /// Guest first name.
    pub first_name: String,
    /// Guest last name.
    pub last_name: String,
    /// Guest email address.
    pub email: String,
    /// Guest phone number.
    pub phone: String,
    /// Arrival date.
    pub check_in: NaiveDate,
    /// Departure date.
    pub check_out: NaiveDate,
    /// Number of nights.
    pub nights: i64,
    /// Adult guest count.
    pub adults: u32,
    /// Child guest count.
    pub children: u32,
    /// Elder guest count.
    pub elders: u32,
    /// Infant guest count.
    pub infants: u32,
    /// Sum of the four guest counts.
    pub total_guests: u32,
    /// User-declared cap on total rooms.
    pub total_rooms: u32,
    /// Selected room categories, in selection order.
    pub selected_rooms: Vec<RoomSelection>,
    /// Total amount for the stay.
    pub total_amount: f64,
    /// Free-form guest requests.
    #[serde(default)]
    pub special_requests: String,
    /// How the stay is paid for.
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
    /// Where the booking originated.
    #[serde(default = "default_booking_source")]
    pub booking_source: String,
}

fn default_payment_method() -> String {
    "On Property".to_string()
}

fn default_booking_source() -> String {
    "Website".to_string()
}
