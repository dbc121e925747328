//! Transient notification (toast) configuration.

use serde::{Deserialize, Serialize};

/// Toast notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// How long a booking-created toast stays visible, in milliseconds.
    #[serde(default = "default_booking_toast_ms")]
    pub booking_toast_ms: u64,
    /// How long a room-limit warning toast stays visible, in milliseconds.
    #[serde(default = "default_warning_toast_ms")]
    pub warning_toast_ms: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            booking_toast_ms: default_booking_toast_ms(),
            warning_toast_ms: default_warning_toast_ms(),
        }
    }
}

fn default_booking_toast_ms() -> u64 {
    5000
}

fn default_warning_toast_ms() -> u64 {
    3000
}
