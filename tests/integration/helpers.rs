//! Shared test helpers for integration tests.

use std::path::PathBuf;

use chrono::{Days, NaiveDate, Utc};

use nirvanica_booking::App;
use nirvanica_booking::core::config::AppConfig;
use nirvanica_booking::form::BookingForm;

/// Test application context.
pub struct TestApp {
    /// The assembled application.
    pub app: App,
    /// Scratch directory unique to this test.
    pub scratch: PathBuf,
}

impl TestApp {
    /// Bootstrap over the in-memory store provider.
    pub async fn in_memory() -> Self {
        let scratch = scratch_dir();
        let mut config = AppConfig::default();
        config.store.provider = "memory".to_string();
        config.store.export_dir = scratch.join("exports").to_string_lossy().into_owned();

        let app = App::bootstrap(config).await.expect("Failed to bootstrap");
        Self { app, scratch }
    }

    /// Bootstrap over the local file provider rooted in a scratch dir.
    ///
    /// Re-bootstrapping from the returned config reopens the same data.
    pub async fn on_disk() -> (Self, AppConfig) {
        let scratch = scratch_dir();
        let mut config = AppConfig::default();
        config.store.provider = "local".to_string();
        config.store.data_root = scratch.join("store").to_string_lossy().into_owned();
        config.store.export_dir = scratch.join("exports").to_string_lossy().into_owned();

        let app = App::bootstrap(config.clone())
            .await
            .expect("Failed to bootstrap");
        (Self { app, scratch }, config)
    }
}

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("nirvanica-it-{}", uuid::Uuid::new_v4()))
}

/// Tomorrow relative to the real clock; integration forms are anchored at
/// today, so this is the earliest valid check-in.
pub fn tomorrow() -> NaiveDate {
    Utc::now().date_naive() + Days::new(1)
}

/// Fill a form with a complete, valid booking: two Ground Floor rooms for
/// two nights starting tomorrow.
pub fn fill_valid(form: &mut BookingForm) {
    form.set_first_name("Asha");
    form.set_last_name("Nair");
    form.set_email("asha@example.com");
    form.set_phone("+91 98765 43210");
    form.set_check_in(tomorrow());
    form.set_check_out(tomorrow() + Days::new(2));
    form.set_total_rooms(2);
    form.increase_room("ground-floor").expect("known room type");
    form.increase_room("ground-floor").expect("known room type");
    form.set_terms_accepted(true);
}
