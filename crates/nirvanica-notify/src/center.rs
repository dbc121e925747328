//! Toast center — holds active toasts and prunes expired ones.

use std::sync::RwLock;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use nirvanica_core::config::notifications::NotificationsConfig;
use nirvanica_entity::booking::BookingRecord;

use crate::formatter;
use crate::toast::Toast;

/// Holds the currently visible toasts.
///
/// The rendering layer polls [`ToastCenter::active`]; expired toasts are
/// pruned on every read, which is where the original page's dismissal
/// timers went.
#[derive(Debug)]
pub struct ToastCenter {
    /// Display durations.
    config: NotificationsConfig,
    /// Visible toasts, oldest first.
    entries: RwLock<Vec<Toast>>,
}

impl ToastCenter {
    /// Create an empty toast center.
    pub fn new(config: NotificationsConfig) -> Self {
        Self {
            config,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Push a prebuilt toast. Returns its id.
    pub fn push(&self, toast: Toast) -> Uuid {
        let id = toast.id;
        info!(level = ?toast.level, title = %toast.title, "Toast raised");
        self.entries.write().expect("toast lock poisoned").push(toast);
        id
    }

    /// Raise the booking-created toast for a new record.
    pub fn booking_created(&self, record: &BookingRecord) -> Uuid {
        self.push(formatter::booking_created(
            record,
            self.config.booking_toast_ms,
        ))
    }

    /// Raise the room-limit warning toast.
    pub fn room_limit_warning(&self, total_rooms: u32) -> Uuid {
        self.push(formatter::room_limit_warning(
            total_rooms,
            self.config.warning_toast_ms,
        ))
    }

    /// Currently visible toasts, oldest first. Prunes expired entries.
    pub fn active(&self) -> Vec<Toast> {
        let now = Utc::now();
        let mut entries = self.entries.write().expect("toast lock poisoned");
        let before = entries.len();
        entries.retain(|t| !t.is_expired_at(now));
        if entries.len() != before {
            debug!(pruned = before - entries.len(), "Expired toasts pruned");
        }
        entries.clone()
    }

    /// Dismiss a toast explicitly. Returns whether it was present.
    pub fn dismiss(&self, id: Uuid) -> bool {
        let mut entries = self.entries.write().expect("toast lock poisoned");
        let before = entries.len();
        entries.retain(|t| t.id != id);
        entries.len() != before
    }
}
