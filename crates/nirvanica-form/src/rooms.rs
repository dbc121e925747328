//! Room selection: total-room cap and per-category quantities.

use nirvanica_core::config::booking::{BookingConfig, RoomTypeConfig};
use nirvanica_core::error::AppError;
use nirvanica_core::result::AppResult;
use nirvanica_entity::booking::RoomSelection;

use crate::stepper::Stepper;

/// Outcome of a room-quantity stepper action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomAdjust {
    /// The change was applied.
    Applied,
    /// The stepper was already at its own bound; nothing changed.
    AtBound,
    /// Applying would exceed the declared total-room count; nothing
    /// changed and a warning should be surfaced.
    LimitReached,
}

/// One room category with its quantity stepper.
#[derive(Debug, Clone)]
struct RoomQuantity {
    config: RoomTypeConfig,
    stepper: Stepper,
}

/// The room-selection section of the form.
///
/// A total-rooms stepper (1 up to the property inventory) caps the sum of
/// the per-category quantity steppers. Changing the total resets every
/// quantity to zero, forcing re-selection against the new cap.
#[derive(Debug, Clone)]
pub struct RoomPicker {
    total_rooms: Stepper,
    quantities: Vec<RoomQuantity>,
}

impl RoomPicker {
    /// Create a picker from the configured room categories.
    pub fn new(config: &BookingConfig) -> Self {
        Self {
            total_rooms: Stepper::new(1, config.room_inventory),
            quantities: config
                .room_types
                .iter()
                .map(|room_type| RoomQuantity {
                    config: room_type.clone(),
                    stepper: Stepper::new(0, room_type.max),
                })
                .collect(),
        }
    }

    /// The declared total-room count.
    pub fn total_rooms(&self) -> u32 {
        self.total_rooms.value()
    }

    /// The total-rooms stepper (for button states).
    pub fn total_rooms_stepper(&self) -> &Stepper {
        &self.total_rooms
    }

    /// Raise the total-room count. Resets all quantities when applied.
    pub fn increase_total(&mut self) -> bool {
        let changed = self.total_rooms.increase();
        if changed {
            self.reset_quantities();
        }
        changed
    }

    /// Lower the total-room count. Resets all quantities when applied.
    pub fn decrease_total(&mut self) -> bool {
        let changed = self.total_rooms.decrease();
        if changed {
            self.reset_quantities();
        }
        changed
    }

    /// Set the total-room count directly (clamped). Resets all quantities.
    pub fn set_total(&mut self, total: u32) {
        self.total_rooms.set_clamped(total);
        self.reset_quantities();
    }

    /// Sum of the selected quantities across all categories.
    pub fn selected_count(&self) -> u32 {
        self.quantities.iter().map(|q| q.stepper.value()).sum()
    }

    /// Current quantity for one category.
    pub fn quantity(&self, room_id: &str) -> AppResult<u32> {
        Ok(self.entry(room_id)?.stepper.value())
    }

    /// Whether the increase button for a category is enabled: below its
    /// own cap and below the declared total.
    pub fn can_increase(&self, room_id: &str) -> AppResult<bool> {
        let entry = self.entry(room_id)?;
        Ok(entry.stepper.can_increase() && self.selected_count() < self.total_rooms())
    }

    /// Whether the decrease button for a category is enabled.
    pub fn can_decrease(&self, room_id: &str) -> AppResult<bool> {
        Ok(self.entry(room_id)?.stepper.can_decrease())
    }

    /// Step a category's quantity up.
    ///
    /// Rejected with [`RoomAdjust::LimitReached`] — leaving every quantity
    /// unchanged — when the total cap is already reached.
    pub fn increase(&mut self, room_id: &str) -> AppResult<RoomAdjust> {
        let selected = self.selected_count();
        let total = self.total_rooms();
        let entry = self.entry_mut(room_id)?;

        if !entry.stepper.can_increase() {
            return Ok(RoomAdjust::AtBound);
        }
        if selected >= total {
            return Ok(RoomAdjust::LimitReached);
        }

        entry.stepper.increase();
        Ok(RoomAdjust::Applied)
    }

    /// Step a category's quantity down.
    pub fn decrease(&mut self, room_id: &str) -> AppResult<RoomAdjust> {
        let entry = self.entry_mut(room_id)?;
        if entry.stepper.decrease() {
            Ok(RoomAdjust::Applied)
        } else {
            Ok(RoomAdjust::AtBound)
        }
    }

    /// The configured room categories, in display order.
    pub fn room_types(&self) -> impl Iterator<Item = &RoomTypeConfig> {
        self.quantities.iter().map(|q| &q.config)
    }

    /// Selection lines for every category with a non-zero quantity, in
    /// display order, prices captured from configuration.
    pub fn selections(&self) -> Vec<RoomSelection> {
        self.quantities
            .iter()
            .filter(|q| q.stepper.value() > 0)
            .map(|q| RoomSelection::new(q.config.name.as_str(), q.stepper.value(), q.config.price))
            .collect()
    }

    /// Nightly subtotal across all selections.
    pub fn nightly_total(&self) -> f64 {
        self.selections()
            .iter()
            .map(RoomSelection::nightly_subtotal)
            .sum()
    }

    fn reset_quantities(&mut self) {
        for entry in &mut self.quantities {
            entry.stepper.reset();
        }
    }

    fn entry(&self, room_id: &str) -> AppResult<&RoomQuantity> {
        self.quantities
            .iter()
            .find(|q| q.config.id == room_id)
            .ok_or_else(|| AppError::validation(format!("Unknown room type: '{room_id}'")))
    }

    fn entry_mut(&mut self, room_id: &str) -> AppResult<&mut RoomQuantity> {
        self.quantities
            .iter_mut()
            .find(|q| q.config.id == room_id)
            .ok_or_else(|| AppError::validation(format!("Unknown room type: '{room_id}'")))
    }
}
