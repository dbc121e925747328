//! Change-notification subscriber registry.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::error;

use nirvanica_core::result::AppResult;
use nirvanica_entity::booking::BookingRecord;

/// Handle returned by [`SubscriberRegistry::subscribe`]; pass it back to
/// unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A change callback. Receives the full record list after every
/// successful persist.
pub type SubscriberCallback = Box<dyn Fn(&[BookingRecord]) -> AppResult<()> + Send + Sync>;

/// Ordered registry of change subscribers.
///
/// Subscribers are notified in registration order (monotonic ids over a
/// BTreeMap). A failing callback is logged and never prevents the
/// remaining subscribers from being notified, nor fails the mutation that
/// triggered the notification.
#[derive(Default)]
pub struct SubscriberRegistry {
    /// Next subscription id.
    next_id: AtomicU64,
    /// Registered callbacks keyed by subscription id.
    entries: RwLock<BTreeMap<u64, SubscriberCallback>>,
}

impl SubscriberRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. Returns the handle used to unsubscribe.
    pub fn subscribe(&self, callback: SubscriberCallback) -> SubscriptionId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries
            .write()
            .expect("subscriber lock poisoned")
            .insert(id, callback);
        SubscriptionId(id)
    }

    /// Remove a callback. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.entries
            .write()
            .expect("subscriber lock poisoned")
            .remove(&id.0)
            .is_some()
    }

    /// Notify every subscriber with the given snapshot, in registration
    /// order, isolating failures per callback.
    pub fn notify(&self, records: &[BookingRecord]) {
        let entries = self.entries.read().expect("subscriber lock poisoned");
        for (id, callback) in entries.iter() {
            if let Err(e) = callback(records) {
                error!(subscription = id, error = %e, "Error in booking subscriber");
            }
        }
    }

    /// Number of registered subscribers.
    pub fn len(&self) -> usize {
        self.entries.read().expect("subscriber lock poisoned").len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for SubscriberRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberRegistry")
            .field("subscribers", &self.len())
            .finish()
    }
}
