//! Key-value store configuration.

use serde::{Deserialize, Serialize};

/// Key-value store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store provider: `"memory"` or `"local"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Root directory for the local file provider.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// The single key under which the booking list is persisted.
    #[serde(default = "default_bookings_key")]
    pub bookings_key: String,
    /// Directory that CSV exports are written into.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            data_root: default_data_root(),
            bookings_key: default_bookings_key(),
            export_dir: default_export_dir(),
        }
    }
}

fn default_provider() -> String {
    "local".to_string()
}

fn default_data_root() -> String {
    "data".to_string()
}

fn default_bookings_key() -> String {
    "nirvanica_bookings".to_string()
}

fn default_export_dir() -> String {
    "data/exports".to_string()
}
