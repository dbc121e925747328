//! The booking form controller.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};
use validator::ValidationErrors;

use nirvanica_core::config::booking::BookingConfig;
use nirvanica_core::result::AppResult;
use nirvanica_core::types::BookingReference;
use nirvanica_entity::booking::BookingDraft;
use nirvanica_ledger::BookingLedger;
use nirvanica_notify::ToastCenter;

use crate::dates::StayDates;
use crate::flow::{Confirmation, FlowStage, PreviewSummary};
use crate::guests::{GuestCounters, GuestKind};
use crate::rooms::{RoomAdjust, RoomPicker};
use crate::summary::BookingSummary;
use crate::validation::{self, GuestIdentity, field_error};

/// Owns all interactive booking-form state and produces one booking
/// record on confirmation.
///
/// Both submission paths — preview-then-confirm and direct submit — run
/// the identical validate → persist → display sequence, so a confirmation
/// modal is never shown for a booking the ledger does not hold.
#[derive(Debug)]
pub struct BookingForm {
    /// Shared ledger the confirmed booking is handed to.
    ledger: Arc<BookingLedger>,
    /// Toast sink for the room-limit warning.
    toasts: Arc<ToastCenter>,
    /// Guest identity inputs.
    identity: GuestIdentity,
    /// Free-form requests input.
    special_requests: String,
    /// Terms-acceptance checkbox.
    terms_accepted: bool,
    /// Stay date pair.
    dates: StayDates,
    /// Guest counters.
    guests: GuestCounters,
    /// Room selection.
    rooms: RoomPicker,
    /// Current modal stage.
    stage: FlowStage,
}

impl BookingForm {
    /// Create a form anchored at today's date.
    pub fn new(config: &BookingConfig, ledger: Arc<BookingLedger>, toasts: Arc<ToastCenter>) -> Self {
        Self::anchored_at(config, ledger, toasts, Utc::now().date_naive())
    }

    /// Create a form anchored at an explicit date. The anchor fixes the
    /// minimum selectable dates and the not-in-the-past check.
    pub fn anchored_at(
        config: &BookingConfig,
        ledger: Arc<BookingLedger>,
        toasts: Arc<ToastCenter>,
        today: NaiveDate,
    ) -> Self {
        Self {
            ledger,
            toasts,
            identity: GuestIdentity::default(),
            special_requests: String::new(),
            terms_accepted: false,
            dates: StayDates::new(today),
            guests: GuestCounters::new(&config.guests),
            rooms: RoomPicker::new(config),
            stage: FlowStage::Editing,
        }
    }

    // ── Identity inputs ──────────────────────────────────────────

    /// Set the first-name input.
    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.identity.first_name = value.into();
    }

    /// Set the last-name input.
    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.identity.last_name = value.into();
    }

    /// Set the email input.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.identity.email = value.into();
    }

    /// Set the phone input.
    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.identity.phone = value.into();
    }

    /// Set the special-requests input.
    pub fn set_special_requests(&mut self, value: impl Into<String>) {
        self.special_requests = value.into();
    }

    /// Set the terms-acceptance checkbox.
    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    // ── Dates ────────────────────────────────────────────────────

    /// The stay date pair (for minimums and current values).
    pub fn dates(&self) -> &StayDates {
        &self.dates
    }

    /// Set the check-in date; check-out reconciles automatically.
    pub fn set_check_in(&mut self, date: NaiveDate) {
        self.dates.set_check_in(date);
    }

    /// Set the check-out date; reconciled to stay after check-in.
    pub fn set_check_out(&mut self, date: NaiveDate) {
        self.dates.set_check_out(date);
    }

    // ── Guests ───────────────────────────────────────────────────

    /// The guest counters (for values and button states).
    pub fn guests(&self) -> &GuestCounters {
        &self.guests
    }

    /// Step a guest counter up. Returns whether the value changed.
    pub fn increase_guest(&mut self, kind: GuestKind) -> bool {
        self.guests.increase(kind)
    }

    /// Step a guest counter down. Returns whether the value changed.
    pub fn decrease_guest(&mut self, kind: GuestKind) -> bool {
        self.guests.decrease(kind)
    }

    /// Total guests across all four counters.
    pub fn total_guests(&self) -> u32 {
        self.guests.total()
    }

    // ── Rooms ────────────────────────────────────────────────────

    /// The room picker (for quantities and button states).
    pub fn rooms(&self) -> &RoomPicker {
        &self.rooms
    }

    /// Raise the total-room count; resets all quantities when applied.
    pub fn increase_total_rooms(&mut self) -> bool {
        self.rooms.increase_total()
    }

    /// Lower the total-room count; resets all quantities when applied.
    pub fn decrease_total_rooms(&mut self) -> bool {
        self.rooms.decrease_total()
    }

    /// Set the total-room count directly; resets all quantities.
    pub fn set_total_rooms(&mut self, total: u32) {
        self.rooms.set_total(total);
    }

    /// Step a room category's quantity up.
    ///
    /// A rejection against the declared total leaves every quantity
    /// unchanged and raises the warning toast.
    pub fn increase_room(&mut self, room_id: &str) -> AppResult<RoomAdjust> {
        let outcome = self.rooms.increase(room_id)?;
        if outcome == RoomAdjust::LimitReached {
            debug!(room = room_id, total = self.rooms.total_rooms(), "Room limit reached");
            self.toasts.room_limit_warning(self.rooms.total_rooms());
        }
        Ok(outcome)
    }

    /// Step a room category's quantity down.
    pub fn decrease_room(&mut self, room_id: &str) -> AppResult<RoomAdjust> {
        self.rooms.decrease(room_id)
    }

    // ── Derived views ────────────────────────────────────────────

    /// Recompute the summary panel from current form state.
    pub fn summary(&self) -> BookingSummary {
        let nights = self.dates.nights().unwrap_or(0);
        let room_lines = self.rooms.selections();
        let total_amount = self.rooms.nightly_total() * nights as f64;

        BookingSummary {
            check_in: self.dates.check_in(),
            check_out: self.dates.check_out(),
            nights,
            total_guests: self.guests.total(),
            rooms_selected: self.rooms.selected_count(),
            room_lines,
            total_amount,
        }
    }

    /// The current modal stage.
    pub fn stage(&self) -> &FlowStage {
        &self.stage
    }

    /// The persisted reference of the last confirmed booking, if the
    /// confirmation modal is open.
    pub fn current_reference(&self) -> Option<&BookingReference> {
        match &self.stage {
            FlowStage::Confirmed(confirmation) => Some(&confirmation.reference),
            _ => None,
        }
    }

    // ── Validation & flow ────────────────────────────────────────

    /// Validate the whole form, collecting every violation.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validation::validate(
            &self.identity,
            &self.dates,
            self.rooms.selected_count(),
            self.terms_accepted,
        )
    }

    /// Validate and open the read-only preview modal.
    ///
    /// The returned summary carries a provisional reference from the
    /// ledger's generator; nothing is persisted.
    pub fn preview(&mut self) -> Result<PreviewSummary, ValidationErrors> {
        self.validate()?;
        let (check_in, check_out) = self.validated_dates()?;

        let preview = PreviewSummary {
            provisional_reference: self.ledger.references().generate(),
            guest_name: format!("{} {}", self.identity.first_name, self.identity.last_name),
            email: self.identity.email.clone(),
            phone: self.identity.phone.clone(),
            check_in,
            check_out,
            total_amount: self.summary().total_amount,
        };

        self.stage = FlowStage::Preview(preview.clone());
        Ok(preview)
    }

    /// Confirm from the preview modal: persist the booking and open the
    /// confirmation modal showing the ledger-assigned reference.
    pub async fn confirm(&mut self) -> Result<BookingReference, ValidationErrors> {
        self.finalize().await
    }

    /// Submit the form directly, bypassing preview. Runs the same
    /// validate → persist → display sequence as [`BookingForm::confirm`].
    pub async fn submit(&mut self) -> Result<BookingReference, ValidationErrors> {
        self.finalize().await
    }

    /// Close whichever modal is open and return to editing.
    pub fn close_modal(&mut self) {
        self.stage = FlowStage::Editing;
    }

    async fn finalize(&mut self) -> Result<BookingReference, ValidationErrors> {
        self.validate()?;
        let (check_in, check_out) = self.validated_dates()?;
        let nights = (check_out - check_in).num_days();

        let draft = BookingDraft {
            first_name: self.identity.first_name.clone(),
            last_name: self.identity.last_name.clone(),
            email: self.identity.email.clone(),
            phone: self.identity.phone.clone(),
            check_in,
            check_out,
            nights,
            adults: self.guests.count(GuestKind::Adults),
            children: self.guests.count(GuestKind::Children),
            elders: self.guests.count(GuestKind::Elders),
            infants: self.guests.count(GuestKind::Infants),
            total_guests: self.guests.total(),
            total_rooms: self.rooms.total_rooms(),
            selected_rooms: self.rooms.selections(),
            total_amount: self.rooms.nightly_total() * nights as f64,
            special_requests: self.special_requests.clone(),
            payment_method: "On Property".to_string(),
            booking_source: "Website".to_string(),
        };

        let record = self.ledger.add(draft).await;
        let reference = record.id.clone();
        info!(reference = %reference, "Booking confirmed");

        self.stage = FlowStage::Confirmed(Confirmation {
            reference: reference.clone(),
        });
        Ok(reference)
    }

    fn validated_dates(&self) -> Result<(NaiveDate, NaiveDate), ValidationErrors> {
        match (self.dates.check_in(), self.dates.check_out()) {
            (Some(check_in), Some(check_out)) => Ok((check_in, check_out)),
            _ => {
                let mut errors = ValidationErrors::new();
                errors.add(
                    "check_in",
                    field_error(
                        "required",
                        "Please select both check-in and check-out dates",
                    ),
                );
                Err(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use nirvanica_core::config::notifications::NotificationsConfig;
    use nirvanica_core::config::store::StoreConfig;
    use nirvanica_notify::ToastLevel;
    use nirvanica_store::providers::MemoryStore;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    async fn test_form() -> (BookingForm, Arc<BookingLedger>, Arc<ToastCenter>) {
        let config = BookingConfig::default();
        let toasts = Arc::new(ToastCenter::new(NotificationsConfig::default()));
        let ledger = Arc::new(
            BookingLedger::load(
                Arc::new(MemoryStore::new()),
                &config,
                &StoreConfig::default(),
            )
            .await
            .with_toasts(Arc::clone(&toasts)),
        );
        let form = BookingForm::anchored_at(
            &config,
            Arc::clone(&ledger),
            Arc::clone(&toasts),
            NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
        );
        (form, ledger, toasts)
    }

    fn fill_valid(form: &mut BookingForm) {
        form.set_first_name("Asha");
        form.set_last_name("Nair");
        form.set_email("asha@example.com");
        form.set_phone("9876543210");
        form.set_check_in(june(1));
        form.set_check_out(june(3));
        form.set_total_rooms(2);
        form.increase_room("ground-floor").unwrap();
        form.increase_room("ground-floor").unwrap();
        form.set_terms_accepted(true);
    }

    #[tokio::test]
    async fn summary_prices_two_rooms_for_two_nights_at_5000() {
        let (mut form, _, _) = test_form().await;
        fill_valid(&mut form);

        let summary = form.summary();
        assert_eq!(summary.nights, 2);
        assert_eq!(summary.total_guests, 1);
        assert_eq!(summary.rooms_selected, 2);
        assert_eq!(summary.total_amount, 5000.0);
        assert_eq!(summary.room_types_label(), "Ground Floor (2)");
    }

    #[tokio::test]
    async fn preview_persists_nothing_and_shows_a_provisional_reference() {
        let (mut form, ledger, _) = test_form().await;
        fill_valid(&mut form);

        let preview = form.preview().unwrap();
        assert!(preview.provisional_reference.as_str().starts_with("NIR"));
        assert_eq!(preview.guest_name, "Asha Nair");
        assert_eq!(preview.total_amount, 5000.0);
        assert!(ledger.is_empty());
        assert!(form.stage().modal_open());
    }

    #[tokio::test]
    async fn confirm_from_preview_persists_and_shows_the_ledger_id() {
        let (mut form, ledger, _) = test_form().await;
        fill_valid(&mut form);

        form.preview().unwrap();
        let reference = form.confirm().await.unwrap();

        let all = ledger.all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, reference);
        assert_eq!(form.current_reference(), Some(&reference));
    }

    #[tokio::test]
    async fn direct_submit_runs_the_same_persist_sequence() {
        let (mut form, ledger, _) = test_form().await;
        fill_valid(&mut form);

        let reference = form.submit().await.unwrap();
        assert_eq!(ledger.all().len(), 1);
        assert_eq!(ledger.all()[0].id, reference);
        assert!(matches!(form.stage(), FlowStage::Confirmed(_)));
    }

    #[tokio::test]
    async fn invalid_form_blocks_both_paths_with_collected_errors() {
        let (mut form, ledger, _) = test_form().await;

        let errors = form.preview().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("check_in"));
        assert!(fields.contains_key("rooms"));
        assert!(fields.contains_key("terms"));

        assert!(form.submit().await.is_err());
        assert!(ledger.is_empty());
        assert_eq!(*form.stage(), FlowStage::Editing);
    }

    #[tokio::test]
    async fn rejected_room_increase_warns_and_leaves_state_unchanged() {
        let (mut form, _, toasts) = test_form().await;
        form.set_total_rooms(2);
        form.increase_room("ground-floor").unwrap();
        form.increase_room("ground-floor").unwrap();

        let outcome = form.increase_room("first-floor").unwrap();
        assert_eq!(outcome, RoomAdjust::LimitReached);
        assert_eq!(form.rooms().quantity("ground-floor").unwrap(), 2);
        assert_eq!(form.rooms().quantity("first-floor").unwrap(), 0);

        let active = toasts.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].level, ToastLevel::Warning);
        assert!(active[0].body.contains("2 rooms total"));
    }

    #[tokio::test]
    async fn confirmed_booking_raises_the_created_toast() {
        let (mut form, ledger, toasts) = test_form().await;
        fill_valid(&mut form);
        form.submit().await.unwrap();

        let active = toasts.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "New Booking!");
        assert!(active[0].body.contains("Asha Nair"));
        assert_eq!(ledger.all().len(), 1);
    }

    #[tokio::test]
    async fn close_modal_returns_to_editing() {
        let (mut form, _, _) = test_form().await;
        fill_valid(&mut form);
        form.preview().unwrap();
        assert!(form.stage().modal_open());

        form.close_modal();
        assert_eq!(*form.stage(), FlowStage::Editing);
    }
}
