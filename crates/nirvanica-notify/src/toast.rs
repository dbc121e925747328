//! Toast notification model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visual level of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    /// Good news (a booking landed).
    Success,
    /// A constraint was hit (room limit reached).
    Warning,
}

/// A transient notification shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toast {
    /// Unique toast identifier.
    pub id: Uuid,
    /// Visual level.
    pub level: ToastLevel,
    /// Short title line.
    pub title: String,
    /// Body text.
    pub body: String,
    /// When the toast was raised.
    pub created_at: DateTime<Utc>,
    /// When the toast auto-dismisses.
    pub expires_at: DateTime<Utc>,
}

impl Toast {
    /// Create a toast that stays visible for `visible_ms` milliseconds.
    pub fn new(
        level: ToastLevel,
        title: impl Into<String>,
        body: impl Into<String>,
        visible_ms: u64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            level,
            title: title.into(),
            body: body.into(),
            created_at: now,
            expires_at: now + chrono::Duration::milliseconds(visible_ms as i64),
        }
    }

    /// Whether the toast has passed its auto-dismiss time.
    pub fn is_expired_at(&self, at: DateTime<Utc>) -> bool {
        self.expires_at <= at
    }
}
