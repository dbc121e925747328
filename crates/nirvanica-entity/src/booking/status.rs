//! Booking lifecycle status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a booking.
///
/// Transitions are deliberately unrestricted: any status may follow any
/// other. The front desk corrects mistakes by setting the status directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    /// Reserved and awaiting arrival.
    Confirmed,
    /// Guest is currently on the property.
    CheckedIn,
    /// Guest has departed.
    CheckedOut,
    /// Booking was cancelled.
    Cancelled,
}

impl BookingStatus {
    /// Whether a booking with this status still counts as an arrival.
    pub fn counts_as_arrival(&self) -> bool {
        matches!(self, Self::Confirmed | Self::CheckedIn)
    }

    /// Whether the guest is currently in house.
    pub fn is_checked_in(&self) -> bool {
        matches!(self, Self::CheckedIn)
    }

    /// Return the status as its lowercase wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked-in",
            Self::CheckedOut => "checked-out",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = nirvanica_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "confirmed" => Ok(Self::Confirmed),
            "checked-in" => Ok(Self::CheckedIn),
            "checked-out" => Ok(Self::CheckedOut),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(nirvanica_core::AppError::validation(format!(
                "Invalid booking status: '{s}'. Expected one of: confirmed, checked-in, checked-out, cancelled"
            ))),
        }
    }
}
