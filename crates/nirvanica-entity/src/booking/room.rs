//! Room selection line items.

use serde::{Deserialize, Serialize};

/// One selected room category on a booking: the category name, how many
/// rooms of it, and the nightly price per room at booking time.
///
/// The price is captured on the selection so later rate changes never
/// alter an existing booking's recomputable total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSelection {
    /// Room category display name, e.g. `"Ground Floor"`.
    #[serde(rename = "type")]
    pub room_type: String,
    /// Number of rooms booked in this category.
    pub quantity: u32,
    /// Nightly price per room.
    pub price: f64,
}

impl RoomSelection {
    /// Create a new selection line.
    pub fn new(room_type: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            room_type: room_type.into(),
            quantity,
            price,
        }
    }

    /// The nightly subtotal of this line (price × quantity).
    pub fn nightly_subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}
