//! End-to-end booking flow through the assembled application.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use nirvanica_booking::entity::booking::BookingStatus;
use nirvanica_booking::form::FlowStage;

use crate::helpers::{TestApp, fill_valid};

#[tokio::test]
async fn preview_confirm_flow_lands_in_the_ledger() {
    let test_app = TestApp::in_memory().await;
    let ledger = test_app.app.ledger();

    let mut form = test_app.app.booking_form();
    fill_valid(&mut form);

    let preview = form.preview().unwrap();
    assert_eq!(preview.guest_name, "Asha Nair");
    assert_eq!(preview.total_amount, 5000.0);
    assert!(ledger.is_empty());

    let reference = form.confirm().await.unwrap();
    let all = ledger.all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, reference);
    assert_eq!(all[0].status, BookingStatus::Confirmed);
    assert_eq!(all[0].nights, 2);
    assert_eq!(all[0].total_amount, 5000.0);
    assert!(matches!(form.stage(), FlowStage::Confirmed(_)));
}

#[tokio::test]
async fn direct_submit_takes_the_same_path() {
    let test_app = TestApp::in_memory().await;
    let ledger = test_app.app.ledger();

    let mut form = test_app.app.booking_form();
    fill_valid(&mut form);

    let reference = form.submit().await.unwrap();
    assert_eq!(ledger.all().len(), 1);
    assert_eq!(ledger.all()[0].id, reference);
}

#[tokio::test]
async fn subscribers_follow_the_whole_lifecycle() {
    let test_app = TestApp::in_memory().await;
    let ledger = test_app.app.ledger();

    let notifications = Arc::new(AtomicUsize::new(0));
    let notifications_clone = Arc::clone(&notifications);
    ledger.subscribe(Box::new(move |_| {
        notifications_clone.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }));

    let mut form = test_app.app.booking_form();
    fill_valid(&mut form);
    let reference = form.submit().await.unwrap();
    assert_eq!(notifications.load(Ordering::SeqCst), 1);

    ledger
        .update_status(&reference, BookingStatus::CheckedIn)
        .await
        .unwrap();
    assert_eq!(notifications.load(Ordering::SeqCst), 2);

    ledger.delete(&reference).await.unwrap();
    assert_eq!(notifications.load(Ordering::SeqCst), 3);
    assert!(ledger.is_empty());
}

#[tokio::test]
async fn dashboard_reflects_todays_activity() {
    let test_app = TestApp::in_memory().await;
    let ledger = test_app.app.ledger();

    for _ in 0..3 {
        let mut form = test_app.app.booking_form();
        fill_valid(&mut form);
        let reference = form.submit().await.unwrap();
        ledger
            .update_status(&reference, BookingStatus::CheckedIn)
            .await
            .unwrap();
    }

    let stats = ledger.dashboard_stats();
    assert_eq!(stats.total_rooms, 12);
    assert_eq!(stats.current_guests, 3);
    assert_eq!(stats.occupancy_rate, 25);
}

#[tokio::test]
async fn csv_export_writes_the_dated_file() {
    let test_app = TestApp::in_memory().await;
    let ledger = test_app.app.ledger();

    let mut form = test_app.app.booking_form();
    fill_valid(&mut form);
    form.submit().await.unwrap();

    let path = ledger.export_to_dir().await.unwrap();
    assert!(path.starts_with(&test_app.scratch));

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Booking ID,Guest Name,Email"));
    assert!(lines[1].contains("\"Asha Nair\""));
}

#[tokio::test]
async fn booking_toast_is_visible_after_submit() {
    let test_app = TestApp::in_memory().await;
    let toasts = test_app.app.toasts();

    let mut form = test_app.app.booking_form();
    fill_valid(&mut form);
    form.submit().await.unwrap();

    let active = toasts.active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "New Booking!");
}
