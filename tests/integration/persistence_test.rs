//! Persistence behavior of the assembled application over the local
//! file store.

use nirvanica_booking::App;
use nirvanica_booking::entity::booking::BookingStatus;

use crate::helpers::{TestApp, fill_valid};

#[tokio::test]
async fn bookings_survive_a_restart() {
    let (test_app, config) = TestApp::on_disk().await;

    let mut form = test_app.app.booking_form();
    fill_valid(&mut form);
    let reference = form.submit().await.unwrap();
    drop(test_app);

    let reopened = App::bootstrap(config).await.unwrap();
    let ledger = reopened.ledger();
    let all = ledger.all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, reference);
    assert_eq!(all[0].first_name, "Asha");
    assert_eq!(all[0].status, BookingStatus::Confirmed);
}

#[tokio::test]
async fn mutations_rewrite_the_persisted_document() {
    let (test_app, config) = TestApp::on_disk().await;
    let ledger = test_app.app.ledger();

    let mut form = test_app.app.booking_form();
    fill_valid(&mut form);
    let reference = form.submit().await.unwrap();
    ledger
        .update_status(&reference, BookingStatus::Cancelled)
        .await
        .unwrap();

    let reopened = App::bootstrap(config).await.unwrap();
    assert_eq!(
        reopened.ledger().all()[0].status,
        BookingStatus::Cancelled
    );
}

#[tokio::test]
async fn corrupt_store_contents_degrade_to_an_empty_ledger() {
    let (test_app, config) = TestApp::on_disk().await;

    let mut form = test_app.app.booking_form();
    fill_valid(&mut form);
    form.submit().await.unwrap();
    drop(test_app);

    let store_file = std::path::Path::new(&config.store.data_root)
        .join(format!("{}.json", config.store.bookings_key));
    std::fs::write(&store_file, "{definitely not json").unwrap();

    let reopened = App::bootstrap(config).await.unwrap();
    assert!(reopened.ledger().is_empty());
}
