//! Partial booking updates.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::model::BookingRecord;
use super::room::RoomSelection;

/// A partial update to an existing booking.
///
/// Every field is optional; only provided fields are written to the target
/// record. `updated_at` is stamped by [`BookingUpdate::apply`] whenever at
/// least the call is made, matching the ledger's "every mutation stamps"
/// contract. Status changes go through the ledger's dedicated status
/// operation, not through here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUpdate {
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New arrival date.
    pub check_in: Option<NaiveDate>,
    /// New departure date.
    pub check_out: Option<NaiveDate>,
    /// New night count.
    pub nights: Option<i64>,
    /// New adult count.
    pub adults: Option<u32>,
    /// New child count.
    pub children: Option<u32>,
    /// New elder count.
    pub elders: Option<u32>,
    /// New infant count.
    pub infants: Option<u32>,
    /// New total guest count.
    pub total_guests: Option<u32>,
    /// New total-rooms cap.
    pub total_rooms: Option<u32>,
    /// New room selections.
    pub selected_rooms: Option<Vec<RoomSelection>>,
    /// New total amount.
    pub total_amount: Option<f64>,
    /// New special requests text.
    pub special_requests: Option<String>,
    /// New payment method.
    pub payment_method: Option<String>,
    /// New booking source.
    pub booking_source: Option<String>,
}

macro_rules! apply_field {
    ($self:ident, $record:ident, $changed:ident, $field:ident) => {
        if let Some(value) = $self.$field.clone() {
            $record.$field = value;
            $changed.push(stringify!($field).to_string());
        }
    };
}

impl BookingUpdate {
    /// Apply the provided fields to a record, stamping `updated_at`.
    ///
    /// Returns the names of the fields that were written.
    pub fn apply(&self, record: &mut BookingRecord, now: DateTime<Utc>) -> Vec<String> {
        let mut changed = Vec::new();

        apply_field!(self, record, changed, first_name);
        apply_field!(self, record, changed, last_name);
        apply_field!(self, record, changed, email);
        apply_field!(self, record, changed, phone);
        apply_field!(self, record, changed, check_in);
        apply_field!(self, record, changed, check_out);
        apply_field!(self, record, changed, nights);
        apply_field!(self, record, changed, adults);
        apply_field!(self, record, changed, children);
        apply_field!(self, record, changed, elders);
        apply_field!(self, record, changed, infants);
        apply_field!(self, record, changed, total_guests);
        apply_field!(self, record, changed, total_rooms);
        apply_field!(self, record, changed, selected_rooms);
        apply_field!(self, record, changed, total_amount);
        apply_field!(self, record, changed, special_requests);
        apply_field!(self, record, changed, payment_method);
        apply_field!(self, record, changed, booking_source);

        record.updated_at = now;
        changed
    }

    /// Whether the update carries no fields at all.
    pub fn is_empty(&self) -> bool {
        serde_json::to_value(self)
            .map(|v| {
                v.as_object()
                    .map(|o| o.values().all(|f| f.is_null()))
                    .unwrap_or(true)
            })
            .unwrap_or(true)
    }
}
