//! The booking ledger service.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use chrono::{NaiveDate, Utc};
use tracing::{error, info, warn};

use nirvanica_core::config::booking::BookingConfig;
use nirvanica_core::config::store::StoreConfig;
use nirvanica_core::result::AppResult;
use nirvanica_core::traits::store::KeyValueStore;
use nirvanica_core::types::BookingReference;
use nirvanica_entity::booking::{BookingDraft, BookingRecord, BookingStatus, BookingUpdate};
use nirvanica_entity::stats::DashboardStats;
use nirvanica_notify::ToastCenter;

use crate::export;
use crate::reference::ReferenceGenerator;
use crate::subscribers::{SubscriberCallback, SubscriberRegistry, SubscriptionId};

/// The authoritative collection of booking records.
///
/// Owns the whole record list; readers receive defensive copies. Every
/// mutation rewrites the full list as one JSON document under a single
/// store key, then notifies subscribers. Persistence is best-effort: a
/// failed write is logged and the in-memory list stays authoritative for
/// the rest of the session.
#[derive(Debug)]
pub struct BookingLedger {
    /// Persistence backend.
    store: Arc<dyn KeyValueStore>,
    /// The single key the record list is stored under.
    storage_key: String,
    /// Directory CSV exports are written into.
    export_dir: PathBuf,
    /// Total room inventory on the property.
    inventory: u32,
    /// Reference generator shared with the form controller.
    references: ReferenceGenerator,
    /// The record list, insertion-ordered. Never held across an await.
    bookings: RwLock<Vec<BookingRecord>>,
    /// Change subscribers.
    subscribers: SubscriberRegistry,
    /// Optional toast sink for user-facing notifications.
    toasts: Option<Arc<ToastCenter>>,
}

impl BookingLedger {
    /// Load the ledger from the store.
    ///
    /// A missing key, a parse failure, or a store error all degrade to an
    /// empty ledger with a logged error; loading never fails.
    pub async fn load(
        store: Arc<dyn KeyValueStore>,
        booking: &BookingConfig,
        store_config: &StoreConfig,
    ) -> Self {
        let bookings = match store.get(&store_config.bookings_key).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<BookingRecord>>(&raw) {
                Ok(records) => {
                    info!(count = records.len(), "Loaded bookings from store");
                    records
                }
                Err(e) => {
                    error!(error = %e, "Error loading bookings; starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                error!(error = %e, "Error reading booking store; starting empty");
                Vec::new()
            }
        };

        Self {
            store,
            storage_key: store_config.bookings_key.clone(),
            export_dir: PathBuf::from(&store_config.export_dir),
            inventory: booking.room_inventory,
            references: ReferenceGenerator::new(&booking.reference_prefix),
            bookings: RwLock::new(bookings),
            subscribers: SubscriberRegistry::new(),
            toasts: None,
        }
    }

    /// Attach a toast center for transient user-facing notifications.
    pub fn with_toasts(mut self, toasts: Arc<ToastCenter>) -> Self {
        self.toasts = Some(toasts);
        self
    }

    /// The reference generator, shared with the form controller so preview
    /// references come from the same algorithm as persisted ids.
    pub fn references(&self) -> &ReferenceGenerator {
        &self.references
    }

    /// Total room inventory.
    pub fn inventory(&self) -> u32 {
        self.inventory
    }

    // ── Mutations ────────────────────────────────────────────────

    /// Add a new booking.
    ///
    /// Merges the draft with a freshly generated unique reference, the
    /// `Confirmed` status, and creation timestamps; persists, notifies
    /// subscribers, and raises the booking-created toast. Returns the
    /// stored record; callers should treat it as read-only.
    pub async fn add(&self, draft: BookingDraft) -> BookingRecord {
        let id = self.unique_reference();
        let record = BookingRecord::from_draft(id, draft, Utc::now());

        self.bookings
            .write()
            .expect("ledger lock poisoned")
            .push(record.clone());

        self.persist_and_notify().await;

        info!(reference = %record.id, guest = %record.guest_name(), "Booking created");
        if let Some(toasts) = &self.toasts {
            toasts.booking_created(&record);
        }

        record
    }

    /// Change a booking's status, stamping `updated_at`.
    ///
    /// Any status may follow any other. Returns `None` without touching
    /// the store when the reference is unknown.
    pub async fn update_status(
        &self,
        id: &BookingReference,
        status: BookingStatus,
    ) -> Option<BookingRecord> {
        let updated = {
            let mut bookings = self.bookings.write().expect("ledger lock poisoned");
            let booking = bookings.iter_mut().find(|b| &b.id == id)?;
            booking.status = status;
            booking.updated_at = Utc::now();
            booking.clone()
        };

        self.persist_and_notify().await;
        info!(reference = %id, status = %status, "Booking status updated");
        Some(updated)
    }

    /// Merge a partial update into a booking, stamping `updated_at`.
    ///
    /// Only provided fields are written. Returns `None` without touching
    /// the store when the reference is unknown.
    pub async fn update(&self, id: &BookingReference, update: &BookingUpdate) -> Option<BookingRecord> {
        let updated = {
            let mut bookings = self.bookings.write().expect("ledger lock poisoned");
            let booking = bookings.iter_mut().find(|b| &b.id == id)?;
            let changed = update.apply(booking, Utc::now());
            info!(reference = %id, fields = ?changed, "Booking updated");
            booking.clone()
        };

        self.persist_and_notify().await;
        Some(updated)
    }

    /// Delete a booking. Returns the removed record, or `None` when the
    /// reference is unknown.
    pub async fn delete(&self, id: &BookingReference) -> Option<BookingRecord> {
        let removed = {
            let mut bookings = self.bookings.write().expect("ledger lock poisoned");
            let index = bookings.iter().position(|b| &b.id == id)?;
            bookings.remove(index)
        };

        self.persist_and_notify().await;
        info!(reference = %id, "Booking deleted");
        Some(removed)
    }

    // ── Read views ───────────────────────────────────────────────

    /// Snapshot of all records, in insertion order.
    pub fn all(&self) -> Vec<BookingRecord> {
        self.bookings.read().expect("ledger lock poisoned").clone()
    }

    /// Records with the given status, in insertion order.
    pub fn by_status(&self, status: BookingStatus) -> Vec<BookingRecord> {
        self.filtered(|b| b.status == status)
    }

    /// Bookings arriving on `date` that are confirmed or checked-in.
    pub fn arrivals_on(&self, date: NaiveDate) -> Vec<BookingRecord> {
        self.filtered(|b| b.check_in == date && b.status.counts_as_arrival())
    }

    /// Today's arrivals.
    pub fn today_arrivals(&self) -> Vec<BookingRecord> {
        self.arrivals_on(Utc::now().date_naive())
    }

    /// Checked-in bookings departing on `date`.
    pub fn checkouts_on(&self, date: NaiveDate) -> Vec<BookingRecord> {
        self.filtered(|b| b.check_out == date && b.status.is_checked_in())
    }

    /// Today's checkouts.
    pub fn today_checkouts(&self) -> Vec<BookingRecord> {
        self.checkouts_on(Utc::now().date_naive())
    }

    /// Bookings currently checked in.
    pub fn current_guests(&self) -> Vec<BookingRecord> {
        self.filtered(|b| b.status.is_checked_in())
    }

    /// Dashboard statistics for the given date.
    pub fn dashboard_stats_on(&self, date: NaiveDate) -> DashboardStats {
        let today_arrivals = self.arrivals_on(date).len();
        let today_checkouts = self.checkouts_on(date).len();
        let current_guests = self.current_guests().len();

        let today_revenue = self
            .bookings
            .read()
            .expect("ledger lock poisoned")
            .iter()
            .filter(|b| b.check_in == date && b.status == BookingStatus::Confirmed)
            .map(|b| b.total_amount)
            .sum();

        let occupancy_rate = if self.inventory == 0 {
            0
        } else {
            (current_guests as f64 / self.inventory as f64 * 100.0).round() as u32
        };

        DashboardStats {
            total_rooms: self.inventory,
            today_arrivals,
            today_checkouts,
            today_revenue,
            current_guests,
            occupancy_rate,
        }
    }

    /// Dashboard statistics for today.
    pub fn dashboard_stats(&self) -> DashboardStats {
        self.dashboard_stats_on(Utc::now().date_naive())
    }

    /// Number of records in the ledger.
    pub fn len(&self) -> usize {
        self.bookings.read().expect("ledger lock poisoned").len()
    }

    /// Whether the ledger holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ── Export ───────────────────────────────────────────────────

    /// Render all records as a CSV document.
    pub fn export_csv(&self) -> String {
        export::render_csv(&self.all())
    }

    /// Write today's CSV export into the configured export directory.
    pub async fn export_to_dir(&self) -> AppResult<PathBuf> {
        export::write_export(&self.export_dir, &self.all(), Utc::now().date_naive()).await
    }

    // ── Subscriptions ────────────────────────────────────────────

    /// Register a change callback, invoked with the full record list after
    /// every successful persist. Returns the unsubscribe handle.
    pub fn subscribe(&self, callback: SubscriberCallback) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    // ── Internals ────────────────────────────────────────────────

    /// Generate a reference that is not already present in the ledger.
    fn unique_reference(&self) -> BookingReference {
        let bookings = self.bookings.read().expect("ledger lock poisoned");
        loop {
            let candidate = self.references.generate();
            if !bookings.iter().any(|b| b.id == candidate) {
                return candidate;
            }
        }
    }

    /// Rewrite the full record list to the store, then notify subscribers.
    ///
    /// Subscribers only fire after a successful write; on failure the
    /// in-memory list remains authoritative and the error is logged.
    async fn persist_and_notify(&self) {
        let snapshot = self.all();

        let json = match serde_json::to_string(&snapshot) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "Error serializing bookings; store not updated");
                return;
            }
        };

        if let Err(e) = self.store.set(&self.storage_key, &json).await {
            warn!(error = %e, "Error saving bookings; in-memory state remains authoritative");
            return;
        }

        self.subscribers.notify(&snapshot);
    }

    fn filtered(&self, predicate: impl Fn(&BookingRecord) -> bool) -> Vec<BookingRecord> {
        self.bookings
            .read()
            .expect("ledger lock poisoned")
            .iter()
            .filter(|b| predicate(b))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use nirvanica_core::AppError;
    use nirvanica_entity::booking::RoomSelection;
    use nirvanica_store::providers::MemoryStore;

    /// Store double that rejects every write.
    #[derive(Debug, Default)]
    struct FailingStore;

    #[async_trait]
    impl KeyValueStore for FailingStore {
        async fn get(&self, _key: &str) -> AppResult<Option<String>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &str) -> AppResult<()> {
            Err(AppError::storage("quota exceeded"))
        }

        async fn remove(&self, _key: &str) -> AppResult<()> {
            Ok(())
        }

        async fn exists(&self, _key: &str) -> AppResult<bool> {
            Ok(false)
        }

        async fn health_check(&self) -> AppResult<bool> {
            Ok(false)
        }
    }

    /// Store double that counts writes.
    #[derive(Debug, Default)]
    struct CountingStore {
        inner: MemoryStore,
        writes: AtomicUsize,
    }

    #[async_trait]
    impl KeyValueStore for CountingStore {
        async fn get(&self, key: &str) -> AppResult<Option<String>> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> AppResult<()> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> AppResult<()> {
            self.inner.remove(key).await
        }

        async fn exists(&self, key: &str) -> AppResult<bool> {
            self.inner.exists(key).await
        }

        async fn health_check(&self) -> AppResult<bool> {
            Ok(true)
        }
    }

    async fn ledger_over(store: Arc<dyn KeyValueStore>) -> BookingLedger {
        BookingLedger::load(store, &BookingConfig::default(), &StoreConfig::default()).await
    }

    fn draft(first: &str, check_in: NaiveDate, check_out: NaiveDate) -> BookingDraft {
        let nights = (check_out - check_in).num_days();
        BookingDraft {
            first_name: first.to_string(),
            last_name: "Nair".to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            phone: "9876543210".to_string(),
            check_in,
            check_out,
            nights,
            adults: 2,
            children: 0,
            elders: 0,
            infants: 0,
            total_guests: 2,
            total_rooms: 2,
            selected_rooms: vec![RoomSelection::new("Ground Floor", 2, 1250.0)],
            total_amount: 1250.0 * 2.0 * nights as f64,
            special_requests: String::new(),
            payment_method: "On Property".to_string(),
            booking_source: "Website".to_string(),
        }
    }

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    #[tokio::test]
    async fn add_assigns_identity_and_appears_in_snapshot() {
        let ledger = ledger_over(Arc::new(MemoryStore::new())).await;
        let record = ledger.add(draft("Asha", june(1), june(3))).await;

        assert!(record.id.as_str().starts_with("NIR"));
        assert_eq!(record.status, BookingStatus::Confirmed);
        assert_eq!(record.created_at, record.updated_at);

        let all = ledger.all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, record.id);
        assert_eq!(all[0].first_name, "Asha");
    }

    #[tokio::test]
    async fn two_night_two_room_booking_totals_5000() {
        let ledger = ledger_over(Arc::new(MemoryStore::new())).await;
        let record = ledger.add(draft("Asha", june(1), june(3))).await;

        assert_eq!(record.nights, 2);
        assert_eq!(record.total_amount, 5000.0);
        assert_eq!(record.recomputed_total(), record.total_amount);
    }

    #[tokio::test]
    async fn persisted_records_reload_into_a_fresh_ledger() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let ledger = ledger_over(Arc::clone(&store)).await;
        let first = ledger.add(draft("Asha", june(1), june(3))).await;
        let second = ledger.add(draft("Ravi", june(2), june(5))).await;

        let reloaded = ledger_over(store).await;
        let all = reloaded.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].id, second.id);
        assert_eq!(all[1].nights, 3);
    }

    #[tokio::test]
    async fn corrupt_persisted_document_degrades_to_empty() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store
            .set(&StoreConfig::default().bookings_key, "{not json")
            .await
            .unwrap();

        let ledger = ledger_over(store).await;
        assert!(ledger.is_empty());
    }

    #[tokio::test]
    async fn delete_removes_exactly_the_target() {
        let ledger = ledger_over(Arc::new(MemoryStore::new())).await;
        let first = ledger.add(draft("Asha", june(1), june(3))).await;
        let second = ledger.add(draft("Ravi", june(2), june(5))).await;

        let removed = ledger.delete(&first.id).await.unwrap();
        assert_eq!(removed.id, first.id);

        let all = ledger.all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, second.id);

        assert!(ledger.delete(&first.id).await.is_none());
    }

    #[tokio::test]
    async fn update_status_on_unknown_id_is_none_and_does_not_persist() {
        let store = Arc::new(CountingStore::default());
        let ledger = ledger_over(Arc::clone(&store) as Arc<dyn KeyValueStore>).await;
        ledger.add(draft("Asha", june(1), june(3))).await;
        let writes_after_add = store.writes.load(Ordering::SeqCst);

        let missing = BookingReference::from("NIR00000000XXXX");
        let result = ledger
            .update_status(&missing, BookingStatus::Cancelled)
            .await;

        assert!(result.is_none());
        assert_eq!(store.writes.load(Ordering::SeqCst), writes_after_add);
        assert_eq!(ledger.all()[0].status, BookingStatus::Confirmed);
    }

    #[tokio::test]
    async fn update_status_stamps_updated_at() {
        let ledger = ledger_over(Arc::new(MemoryStore::new())).await;
        let record = ledger.add(draft("Asha", june(1), june(3))).await;

        let updated = ledger
            .update_status(&record.id, BookingStatus::CheckedIn)
            .await
            .unwrap();
        assert_eq!(updated.status, BookingStatus::CheckedIn);
        assert!(updated.updated_at >= record.updated_at);
    }

    #[tokio::test]
    async fn partial_update_merges_only_provided_fields() {
        let ledger = ledger_over(Arc::new(MemoryStore::new())).await;
        let record = ledger.add(draft("Asha", june(1), june(3))).await;

        let update = BookingUpdate {
            special_requests: Some("Lake-facing please".to_string()),
            ..Default::default()
        };
        let updated = ledger.update(&record.id, &update).await.unwrap();

        assert_eq!(updated.special_requests, "Lake-facing please");
        assert_eq!(updated.first_name, "Asha");
        assert_eq!(updated.total_amount, record.total_amount);

        assert!(ledger
            .update(&BookingReference::from("NIR00000000XXXX"), &update)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn filtered_views_respect_date_and_status() {
        let ledger = ledger_over(Arc::new(MemoryStore::new())).await;
        let arriving = ledger.add(draft("Asha", june(1), june(3))).await;
        let departing = ledger.add(draft("Ravi", june(5), june(8))).await;
        let cancelled = ledger.add(draft("Meera", june(1), june(2))).await;

        ledger
            .update_status(&departing.id, BookingStatus::CheckedIn)
            .await
            .unwrap();
        ledger
            .update_status(&cancelled.id, BookingStatus::Cancelled)
            .await
            .unwrap();

        let arrivals = ledger.arrivals_on(june(1));
        assert_eq!(arrivals.len(), 1);
        assert_eq!(arrivals[0].id, arriving.id);

        let checkouts = ledger.checkouts_on(june(8));
        assert_eq!(checkouts.len(), 1);
        assert_eq!(checkouts[0].id, departing.id);

        let current = ledger.current_guests();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].id, departing.id);

        assert_eq!(ledger.by_status(BookingStatus::Cancelled).len(), 1);
    }

    #[tokio::test]
    async fn three_checked_in_of_twelve_rooms_is_25_percent() {
        let ledger = ledger_over(Arc::new(MemoryStore::new())).await;
        for name in ["Asha", "Ravi", "Meera"] {
            let record = ledger.add(draft(name, june(1), june(3))).await;
            ledger
                .update_status(&record.id, BookingStatus::CheckedIn)
                .await
                .unwrap();
        }

        let stats = ledger.dashboard_stats_on(june(10));
        assert_eq!(stats.total_rooms, 12);
        assert_eq!(stats.current_guests, 3);
        assert_eq!(stats.occupancy_rate, 25);
    }

    #[tokio::test]
    async fn todays_revenue_counts_confirmed_arrivals_only() {
        let ledger = ledger_over(Arc::new(MemoryStore::new())).await;
        ledger.add(draft("Asha", june(1), june(3))).await;
        let checked_in = ledger.add(draft("Ravi", june(1), june(2))).await;
        ledger
            .update_status(&checked_in.id, BookingStatus::CheckedIn)
            .await
            .unwrap();

        let stats = ledger.dashboard_stats_on(june(1));
        assert_eq!(stats.today_arrivals, 2);
        assert_eq!(stats.today_revenue, 5000.0);
    }

    #[tokio::test]
    async fn export_of_one_record_is_two_lines() {
        let ledger = ledger_over(Arc::new(MemoryStore::new())).await;
        ledger.add(draft("Asha", june(1), june(3))).await;

        let csv = ledger.export_csv();
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.lines().nth(1).unwrap().contains("\"Asha Nair\""));
    }

    #[tokio::test]
    async fn subscribers_see_snapshots_and_can_unsubscribe() {
        let ledger = ledger_over(Arc::new(MemoryStore::new())).await;
        let seen = Arc::new(AtomicUsize::new(0));

        let seen_clone = Arc::clone(&seen);
        let subscription = ledger.subscribe(Box::new(move |records| {
            seen_clone.store(records.len(), Ordering::SeqCst);
            Ok(())
        }));

        ledger.add(draft("Asha", june(1), june(3))).await;
        assert_eq!(seen.load(Ordering::SeqCst), 1);

        ledger.add(draft("Ravi", june(2), june(4))).await;
        assert_eq!(seen.load(Ordering::SeqCst), 2);

        assert!(ledger.unsubscribe(subscription));
        ledger.add(draft("Meera", june(3), june(5))).await;
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_save_keeps_memory_authoritative_and_skips_subscribers() {
        let ledger = ledger_over(Arc::new(FailingStore)).await;
        let notified = Arc::new(AtomicUsize::new(0));

        let notified_clone = Arc::clone(&notified);
        ledger.subscribe(Box::new(move |_| {
            notified_clone.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }));

        let record = ledger.add(draft("Asha", june(1), june(3))).await;
        assert_eq!(ledger.all().len(), 1);
        assert_eq!(ledger.all()[0].id, record.id);
        assert_eq!(notified.load(Ordering::SeqCst), 0);
    }
}
