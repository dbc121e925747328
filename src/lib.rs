//! # nirvanica-booking
//!
//! Composition root for the Nirvanica booking engine: wires configuration,
//! the key-value store, the toast center, the booking ledger, and hands
//! out form controllers bound to those shared services.
//!
//! The original site hung a ledger instance off a page-wide namespace;
//! here every collaborator is an explicitly constructed, injected service
//! owned by [`App`].

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use nirvanica_core::config::AppConfig;
use nirvanica_core::result::AppResult;
use nirvanica_form::BookingForm;
use nirvanica_ledger::BookingLedger;
use nirvanica_notify::ToastCenter;
use nirvanica_store::StoreManager;

pub use nirvanica_core as core;
pub use nirvanica_entity as entity;
pub use nirvanica_form as form;
pub use nirvanica_ledger as ledger;
pub use nirvanica_notify as notify;
pub use nirvanica_store as store;

/// The assembled application: configuration plus the shared services.
#[derive(Debug)]
pub struct App {
    config: AppConfig,
    store: StoreManager,
    toasts: Arc<ToastCenter>,
    ledger: Arc<BookingLedger>,
}

impl App {
    /// Build the service graph from configuration.
    ///
    /// Creates the configured store provider, the toast center, and the
    /// ledger (replaying any persisted records).
    pub async fn bootstrap(config: AppConfig) -> AppResult<Self> {
        let store = StoreManager::new(&config.store).await?;
        let toasts = Arc::new(ToastCenter::new(config.notifications.clone()));
        let ledger = Arc::new(
            BookingLedger::load(store.provider(), &config.booking, &config.store)
                .await
                .with_toasts(Arc::clone(&toasts)),
        );

        tracing::info!(
            provider = %config.store.provider,
            bookings = ledger.len(),
            "Booking engine ready"
        );

        Ok(Self {
            config,
            store,
            toasts,
            ledger,
        })
    }

    /// The loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The key-value store manager.
    pub fn store(&self) -> &StoreManager {
        &self.store
    }

    /// The shared toast center.
    pub fn toasts(&self) -> Arc<ToastCenter> {
        Arc::clone(&self.toasts)
    }

    /// The shared booking ledger.
    pub fn ledger(&self) -> Arc<BookingLedger> {
        Arc::clone(&self.ledger)
    }

    /// Create a fresh booking form bound to the shared ledger and toasts,
    /// anchored at today's date.
    pub fn booking_form(&self) -> BookingForm {
        BookingForm::new(
            &self.config.booking,
            Arc::clone(&self.ledger),
            Arc::clone(&self.toasts),
        )
    }
}

/// Initialize tracing/logging from configuration.
///
/// `RUST_LOG` overrides the configured level when set.
pub fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}
