//! Builds the toasts the booking engine emits.

use nirvanica_entity::booking::BookingRecord;

use crate::toast::{Toast, ToastLevel};

/// Toast announcing a freshly created booking.
pub fn booking_created(record: &BookingRecord, visible_ms: u64) -> Toast {
    Toast::new(
        ToastLevel::Success,
        "New Booking!",
        format!(
            "{}\n{} - {}",
            record.guest_name(),
            record.check_in,
            record.check_out
        ),
        visible_ms,
    )
}

/// Warning raised when a room-quantity increase would exceed the declared
/// total-room count.
pub fn room_limit_warning(total_rooms: u32, visible_ms: u64) -> Toast {
    let plural = if total_rooms == 1 { "" } else { "s" };
    Toast::new(
        ToastLevel::Warning,
        "Room limit reached",
        format!(
            "You can only select {total_rooms} room{plural} total. \
             Please reduce other room selections first."
        ),
        visible_ms,
    )
}
