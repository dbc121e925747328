//! Live booking summary derived from the form state.

use chrono::NaiveDate;

use nirvanica_entity::booking::RoomSelection;

/// Snapshot of the summary panel: dates, nights, guests, selected rooms,
/// and the running total. Recomputed from form state on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSummary {
    /// Selected check-in date, if any.
    pub check_in: Option<NaiveDate>,
    /// Selected check-out date, if any.
    pub check_out: Option<NaiveDate>,
    /// Night count; zero until both dates are set.
    pub nights: i64,
    /// Total guests across all four counters.
    pub total_guests: u32,
    /// Total selected rooms across all categories.
    pub rooms_selected: u32,
    /// Selected room lines, in display order.
    pub room_lines: Vec<RoomSelection>,
    /// Running total: Σ price × quantity × nights.
    pub total_amount: f64,
}

impl BookingSummary {
    /// Room types line for the summary panel, e.g.
    /// `"Ground Floor (2), Dormitory (1)"`, or `"-"` when nothing is
    /// selected.
    pub fn room_types_label(&self) -> String {
        if self.room_lines.is_empty() {
            return "-".to_string();
        }
        self.room_lines
            .iter()
            .map(|line| format!("{} ({})", line.room_type, line.quantity))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Render a date the way the summary panel shows it, e.g. `"Jun 1, 2025"`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
