//! Preview/confirmation flow stages.

use chrono::NaiveDate;

use nirvanica_core::types::BookingReference;

/// What the booking modal currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowStage {
    /// No modal; the form is being edited.
    Editing,
    /// The read-only preview modal is open. Nothing is persisted yet.
    Preview(PreviewSummary),
    /// The confirmation modal is open; the booking is persisted.
    Confirmed(Confirmation),
}

impl FlowStage {
    /// Whether a modal is currently open.
    pub fn modal_open(&self) -> bool {
        !matches!(self, Self::Editing)
    }
}

/// Read-only contents of the preview modal.
///
/// The reference shown here is **provisional**: it comes from the same
/// generator the ledger uses, but it is not the id the booking will be
/// stored under. The persisted id is only known once the booking is
/// confirmed.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSummary {
    /// Provisional reference, for display only.
    pub provisional_reference: BookingReference,
    /// Guest full name.
    pub guest_name: String,
    /// Guest email.
    pub email: String,
    /// Guest phone.
    pub phone: String,
    /// Arrival date.
    pub check_in: NaiveDate,
    /// Departure date.
    pub check_out: NaiveDate,
    /// Computed total for the stay.
    pub total_amount: f64,
}

/// Contents of the confirmation modal.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    /// The ledger-assigned booking reference.
    pub reference: BookingReference,
}
