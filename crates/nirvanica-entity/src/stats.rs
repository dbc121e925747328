//! Dashboard statistics value object.

use serde::{Deserialize, Serialize};

/// Summary figures for the front-desk dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Total room inventory on the property.
    pub total_rooms: u32,
    /// Bookings arriving today (confirmed or checked-in).
    pub today_arrivals: usize,
    /// Checked-in bookings departing today.
    pub today_checkouts: usize,
    /// Revenue from confirmed bookings arriving today.
    pub today_revenue: f64,
    /// Bookings currently checked in.
    pub current_guests: usize,
    /// `round(current_guests / total_rooms × 100)`.
    pub occupancy_rate: u32,
}
