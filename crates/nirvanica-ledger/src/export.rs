//! CSV export of the booking list.
//!
//! The original site assembled a CSV in memory and triggered a browser
//! download; here the rendered document is returned as a string and,
//! optionally, written to an export directory under the same
//! `bookings-<date>.csv` name.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, SecondsFormat};
use tokio::fs;
use tracing::info;

use nirvanica_core::error::{AppError, ErrorKind};
use nirvanica_core::result::AppResult;
use nirvanica_entity::booking::BookingRecord;

/// Column headers, in the documented export order.
pub const CSV_HEADERS: [&str; 11] = [
    "Booking ID",
    "Guest Name",
    "Email",
    "Phone",
    "Check-in",
    "Check-out",
    "Room Type",
    "Guests",
    "Status",
    "Total Amount",
    "Created At",
];

/// Render the booking list as a CSV document.
///
/// One header row plus one row per record; the guest's full name is
/// double-quoted since it contains a space.
pub fn render_csv(records: &[BookingRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for record in records {
        let row = [
            record.id.to_string(),
            format!("\"{}\"", record.guest_name()),
            record.email.clone(),
            record.phone.clone(),
            record.check_in.to_string(),
            record.check_out.to_string(),
            record.room_type_label().to_string(),
            record.total_guests.to_string(),
            record.status.to_string(),
            record.total_amount.to_string(),
            record
                .created_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// File name for an export made on the given date.
pub fn export_filename(date: NaiveDate) -> String {
    format!("bookings-{date}.csv")
}

/// Write the rendered CSV into `dir`, creating it if needed.
///
/// Returns the path of the written file.
pub async fn write_export(
    dir: &Path,
    records: &[BookingRecord],
    date: NaiveDate,
) -> AppResult<PathBuf> {
    fs::create_dir_all(dir).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Storage,
            format!("Failed to create export directory: {}", dir.display()),
            e,
        )
    })?;

    let path = dir.join(export_filename(date));
    let contents = render_csv(records);
    fs::write(&path, &contents).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Storage,
            format!("Failed to write export: {}", path.display()),
            e,
        )
    })?;

    info!(path = %path.display(), records = records.len(), "Exported bookings");
    Ok(path)
}
