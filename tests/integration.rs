// SPDX-License-Identifier: MPL-2.0
//! End-to-end lifecycle scenarios on a real (paused) tokio clock.

use pharmacy_toasts::config::{self, Config};
use pharmacy_toasts::domain::notification::MaxNotifications;
use pharmacy_toasts::notifications::{
    Manager, NotificationOptions, NotificationRequest, NotificationSettings, Severity,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

fn manager() -> Manager {
    Manager::current(NotificationSettings::default()).expect("inside a tokio runtime")
}

/// Advances the paused clock and lets woken timer tasks run.
async fn elapse(by: Duration) {
    tokio::task::yield_now().await;
    tokio::time::advance(by).await;
    tokio::task::yield_now().await;
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn success_is_dismissed_at_store_default() {
    let manager = manager();
    let id = manager.success("Patient created");

    let notifications = manager.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].severity(), Severity::Success);
    assert_eq!(notifications[0].message(), "Patient created");

    elapse(Duration::from_millis(5990)).await;
    assert!(manager.get(id).is_some());

    elapse(Duration::from_millis(20)).await;
    assert!(manager.get(id).is_none());
    assert_eq!(manager.pending_timers(), 0);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn error_is_dismissed_at_eight_seconds_not_six() {
    let manager = manager();
    let id = manager.error("Network error");

    elapse(Duration::from_millis(6500)).await;
    assert!(manager.get(id).is_some(), "error must outlive the 6s default");

    elapse(Duration::from_millis(1490)).await;
    assert!(manager.get(id).is_some());

    elapse(Duration::from_millis(20)).await;
    assert!(manager.get(id).is_none());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn network_error_renders_severity_and_exact_body() {
    let manager = manager();
    manager.error("Network error");

    let views = pharmacy_toasts::notifications::presentation::project(
        &manager.notifications(),
        manager.settings().position,
    );
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].severity, Severity::Error);
    assert_eq!(views[0].body, "Network error");
    assert_eq!(views[0].title, None);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn persistent_notification_survives_any_elapsed_time() {
    let manager = manager();
    let id = manager.warning_with(
        "Prescription awaiting verification",
        NotificationOptions::new().persistent(),
    );

    elapse(Duration::from_secs(24 * 60 * 60)).await;
    assert!(manager.get(id).is_some());

    assert!(manager.hide(id));
    assert!(manager.is_empty());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn double_hide_races_with_timer_safely() {
    let manager = manager();
    let id = manager.info("Queue refreshed");

    assert!(manager.hide(id));
    assert!(!manager.hide(id));

    // The canceled timer must not disturb later records.
    let later = manager.info("Queue refreshed again");
    elapse(Duration::from_millis(100)).await;
    assert!(manager.get(later).is_some());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn clear_all_leaves_nothing_to_resurrect() {
    let manager = manager();
    for i in 0..5 {
        manager.show(NotificationRequest::new(Severity::Warning, format!("w-{i}")));
    }

    manager.clear_all();
    assert!(manager.is_empty());
    assert_eq!(manager.pending_timers(), 0);

    elapse(Duration::from_secs(30)).await;
    assert!(manager.is_empty());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn sixth_show_evicts_the_first() {
    let manager = manager();
    let ids: Vec<_> = (1..=6)
        .map(|i| manager.info(format!("notification {i}")))
        .collect();

    assert_eq!(manager.len(), 5);
    assert!(manager.get(ids[0]).is_none());
    assert!(manager.get(ids[5]).is_some());
    assert_eq!(manager.notifications()[0].id(), ids[5]);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn action_fires_once_and_removes_the_toast() {
    let manager = manager();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let id = manager.info_with(
        "Template deleted",
        NotificationOptions::new().action("Undo", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );

    assert!(manager.trigger_action(id));
    assert!(!manager.trigger_action(id));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(manager.is_empty());

    elapse(Duration::from_secs(10)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn subscribers_are_woken_by_timer_expiry() {
    let manager = manager();
    let mut changes = manager.subscribe();
    manager.success("Saved");
    changes.borrow_and_update();

    elapse(Duration::from_secs(7)).await;
    assert!(changes.has_changed().expect("sender alive"));
    assert!(manager.is_empty());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn settings_from_config_file_drive_the_manager() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[notifications]\nmax_notifications = 2\ndefault_duration_ms = 2000\n\n[notifications.position]\nvertical = \"top\"\nhorizontal = \"left\"\n",
    )
    .expect("write settings");

    let config: Config = config::load_from_path(&path).expect("load settings");
    let settings = config.notifications.settings();
    assert_eq!(settings.max_notifications, MaxNotifications::new(2));
    assert_eq!(settings.position.to_string(), "top-left");

    let manager = Manager::current(settings).expect("inside a tokio runtime");
    for i in 0..4 {
        manager.success(format!("s-{i}"));
    }
    assert_eq!(manager.len(), 2);

    elapse(Duration::from_millis(2010)).await;
    assert!(manager.is_empty());
}
