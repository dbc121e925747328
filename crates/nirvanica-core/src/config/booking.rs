//! Booking domain configuration: room inventory, room types, guest bounds.

use serde::{Deserialize, Serialize};

/// Booking domain configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Prefix for generated booking references.
    #[serde(default = "default_reference_prefix")]
    pub reference_prefix: String,
    /// Total number of rooms on the property. Also the upper bound of the
    /// total-rooms stepper and the denominator of the occupancy rate.
    #[serde(default = "default_room_inventory")]
    pub room_inventory: u32,
    /// The purchasable room categories.
    #[serde(default = "default_room_types")]
    pub room_types: Vec<RoomTypeConfig>,
    /// Bounds for the guest counters.
    #[serde(default)]
    pub guests: GuestBoundsConfig,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            reference_prefix: default_reference_prefix(),
            room_inventory: default_room_inventory(),
            room_types: default_room_types(),
            guests: GuestBoundsConfig::default(),
        }
    }
}

/// One purchasable room category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTypeConfig {
    /// Stable identifier, e.g. `"ground-floor"`.
    pub id: String,
    /// Display name, e.g. `"Ground Floor"`.
    pub name: String,
    /// Nightly price per room.
    pub price: f64,
    /// Maximum bookable count for this category.
    pub max: u32,
}

/// Min/max bounds of one bounded counter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CounterBounds {
    /// Smallest accepted value.
    pub min: u32,
    /// Largest accepted value.
    pub max: u32,
}

/// Bounds for the four guest counters.
///
/// Adults start at one so a booking always carries at least one guest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestBoundsConfig {
    /// Adult counter bounds.
    #[serde(default = "default_adults")]
    pub adults: CounterBounds,
    /// Child counter bounds.
    #[serde(default = "default_children")]
    pub children: CounterBounds,
    /// Elder counter bounds.
    #[serde(default = "default_elders")]
    pub elders: CounterBounds,
    /// Infant counter bounds.
    #[serde(default = "default_infants")]
    pub infants: CounterBounds,
}

impl Default for GuestBoundsConfig {
    fn default() -> Self {
        Self {
            adults: default_adults(),
            children: default_children(),
            elders: default_elders(),
            infants: default_infants(),
        }
    }
}

fn default_reference_prefix() -> String {
    "NIR".to_string()
}

fn default_room_inventory() -> u32 {
    12
}

fn default_room_types() -> Vec<RoomTypeConfig> {
    vec![
        RoomTypeConfig {
            id: "ground-floor".to_string(),
            name: "Ground Floor".to_string(),
            price: 1250.0,
            max: 4,
        },
        RoomTypeConfig {
            id: "first-floor".to_string(),
            name: "First Floor".to_string(),
            price: 1250.0,
            max: 7,
        },
        RoomTypeConfig {
            id: "dormitory".to_string(),
            name: "Dormitory".to_string(),
            price: 1250.0,
            max: 1,
        },
    ]
}

fn default_adults() -> CounterBounds {
    CounterBounds { min: 1, max: 10 }
}

fn default_children() -> CounterBounds {
    CounterBounds { min: 0, max: 8 }
}

fn default_elders() -> CounterBounds {
    CounterBounds { min: 0, max: 8 }
}

fn default_infants() -> CounterBounds {
    CounterBounds { min: 0, max: 5 }
}
