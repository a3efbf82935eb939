// SPDX-License-Identifier: MPL-2.0
use iced_toasts::config::{self, Config, NotificationsConfig};
use iced_toasts::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};
use iced_toasts::domain::{BufferCapacity, FadeDuration, MaxVisible};
use iced_toasts::error::Error;
use iced_toasts::notifications::{
    FadeDirection, Manager, ManagerMessage, Notification, NotificationContainer,
};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn bound_pair() -> (Manager<Notification>, NotificationContainer<Notification>) {
    let mut manager = Manager::new();
    let mut container = NotificationContainer::new();
    container
        .set_manager(Some(&mut manager))
        .expect("binding a fresh container succeeds");
    (manager, container)
}

#[test]
fn queued_messages_appear_once_in_order() {
    let (mut manager, mut container) = bound_pair();
    let first = Notification::info("first").without_fade();
    let second = Notification::info("second").without_fade();
    let (first_id, second_id) = (first.id(), second.id());

    manager.push(first);
    manager.push(second);
    let applied = container.pump(Instant::now()).expect("pump succeeds");

    assert_eq!(applied, 2);
    let ids: Vec<_> = container.items().iter().map(Notification::id).collect();
    assert_eq!(ids, vec![first_id, second_id]);
}

#[test]
fn dismissing_plain_toast_removes_it_immediately() {
    let (mut manager, mut container) = bound_pair();
    let toast = Notification::warning("disk almost full").without_fade();
    let id = toast.id();
    manager.push(toast);
    container.pump(Instant::now()).expect("pump succeeds");

    manager.handle_message(&ManagerMessage::Dismiss(id));
    container.pump(Instant::now()).expect("pump succeeds");

    assert!(container.is_empty());
    assert!(!container.is_animating());
}

#[test]
fn fading_toast_stays_until_fade_out_completes() {
    let (mut manager, mut container) = bound_pair();
    let toast = Notification::error("upload failed").with_fade(FadeDuration::from_millis(200));
    let id = toast.id();
    let start = Instant::now();

    manager.push(toast);
    container.pump(start).expect("pump succeeds");
    assert!((container.items()[0].opacity() - 0.0).abs() < f32::EPSILON);

    container.tick(start + Duration::from_millis(100));
    let halfway = container.items()[0].opacity();
    assert!(halfway > 0.0 && halfway < 1.0);

    container.tick(start + Duration::from_millis(250));
    assert!((container.items()[0].opacity() - 1.0).abs() < f32::EPSILON);
    assert!(!container.is_animating());

    let dismissed_at = start + Duration::from_secs(1);
    manager.dismiss(id);
    container.pump(dismissed_at).expect("pump succeeds");
    assert!(container.contains(id));
    assert!(container.is_animating());

    let removed = container.tick(dismissed_at + Duration::from_millis(100));
    assert!(removed.is_empty());
    assert!(container.contains(id));

    let removed = container.tick(dismissed_at + Duration::from_millis(200));
    assert_eq!(removed, vec![id]);
    assert!(container.is_empty());
}

#[test]
fn rebinding_ignores_events_from_previous_manager() {
    let mut old_manager = Manager::new();
    let mut new_manager = Manager::new();
    let mut container = NotificationContainer::new();
    container.set_manager(Some(&mut old_manager)).expect("bind");

    let stale = Notification::info("raised before rebinding").without_fade();
    old_manager.push(stale);
    container.set_manager(Some(&mut new_manager)).expect("rebind");
    assert_eq!(container.len(), 1);
    assert_eq!(container.manager_id(), Some(new_manager.id()));

    old_manager.push(Notification::info("raised after rebinding").without_fade());
    old_manager.clear();
    container.pump(Instant::now()).expect("pump succeeds");

    assert_eq!(container.len(), 1);
    assert_eq!(old_manager.listener_count(), 0);
}

#[test]
fn unbinding_stops_event_delivery() {
    let (mut manager, mut container) = bound_pair();
    container.set_manager(None).expect("unbind");
    assert!(container.manager_id().is_none());

    manager.push(Notification::success("saved").without_fade());
    assert_eq!(container.pump(Instant::now()), Ok(0));
    assert!(container.is_empty());
}

#[test]
fn items_source_conflicts_with_manager_events() {
    let (mut manager, mut container) = bound_pair();
    let external = vec![Notification::info("external")];
    container
        .set_items_source(Some(external))
        .expect("empty container accepts a source");
    assert_eq!(container.displayed().len(), 1);

    manager.push(Notification::info("from manager"));
    assert_eq!(
        container.pump(Instant::now()),
        Err(Error::ItemsSourceInUse)
    );
    assert!(container.items().is_empty());
}

#[test]
fn items_source_rejected_while_items_present() {
    let (mut manager, mut container) = bound_pair();
    manager.push(Notification::info("shown").without_fade());
    container.pump(Instant::now()).expect("pump succeeds");

    let result = container.set_items_source(Some(Vec::new()));
    assert_eq!(result, Err(Error::ItemsNotEmpty));
    assert!(container.items_source().is_none());
}

#[test]
fn wrong_manager_type_is_rejected() {
    let (manager, mut container) = bound_pair();
    let mut not_a_manager = String::from("manager");

    let result = container.try_set_manager(&mut not_a_manager);
    assert!(matches!(result, Err(Error::IncompatibleManager { .. })));
    assert_eq!(container.manager_id(), Some(manager.id()));
}

#[test]
fn dynamic_slot_accepts_matching_manager() {
    let mut container: NotificationContainer<Notification> = NotificationContainer::new();
    let mut manager: Manager<Notification> = Manager::new();
    let id = manager.id();

    container.try_set_manager(&mut manager).expect("matching type binds");
    assert_eq!(container.manager_id(), Some(id));
}

#[test]
fn manager_limits_visible_toasts_and_promotes_pending() {
    let mut manager = Manager::with_max_visible(MaxVisible::new(2));
    let mut container = NotificationContainer::new();
    container.set_manager(Some(&mut manager)).expect("bind");

    let toasts: Vec<_> = (0..3)
        .map(|i| Notification::info(format!("toast {i}")).without_fade())
        .collect();
    let ids: Vec<_> = toasts.iter().map(Notification::id).collect();
    for toast in toasts {
        manager.push(toast);
    }
    container.pump(Instant::now()).expect("pump succeeds");
    assert_eq!(container.len(), 2);
    assert_eq!(manager.pending_count(), 1);

    manager.dismiss(ids[0]);
    container.pump(Instant::now()).expect("pump succeeds");
    let shown: Vec<_> = container.items().iter().map(Notification::id).collect();
    assert_eq!(shown, vec![ids[1], ids[2]]);
}

#[test]
fn pushing_same_toast_twice_shows_it_once() {
    let (mut manager, mut container) = bound_pair();
    let toast = Notification::error("sync failed").with_fade(FadeDuration::from_millis(100));
    let id = toast.id();

    manager.push(toast.clone());
    manager.push(toast);
    let start = Instant::now();
    container.pump(start).expect("pump succeeds");
    assert_eq!(container.len(), 1);
    assert_eq!(manager.visible_count(), 1);

    manager.dismiss(id);
    container.pump(start).expect("pump succeeds");
    container.tick(start + Duration::from_millis(150));
    assert!(container.is_empty());
    assert!(!container.is_animating());
    assert!(!manager.has_notifications());
}

#[test]
fn toast_requeued_while_fading_out_is_removed_by_next_dismiss() {
    let (mut manager, mut container) = bound_pair();
    let toast = Notification::error("upload failed").with_fade(FadeDuration::from_millis(100));
    let id = toast.id();
    let start = Instant::now();

    manager.push(toast.clone());
    container.pump(start).expect("pump succeeds");
    manager.dismiss(id);
    container.pump(start + Duration::from_millis(10)).expect("pump succeeds");

    manager.push(toast);
    container.pump(start + Duration::from_millis(30)).expect("pump succeeds");
    assert_eq!(container.len(), 1);
    assert_eq!(manager.visible_count(), 1);

    manager.dismiss(id);
    let dismissed_at = start + Duration::from_millis(50);
    container.pump(dismissed_at).expect("pump succeeds");
    container.tick(dismissed_at + Duration::from_millis(150));

    assert!(container.is_empty());
    assert!(!container.is_animating());
    assert_eq!(manager.visible_count(), 0);
}

#[test]
fn expired_toasts_are_dismissed_on_tick() {
    let (mut manager, mut container) = bound_pair();
    let toast = Notification::success("done")
        .auto_dismiss(Duration::from_millis(10))
        .without_fade();
    let created = toast.created_at();
    manager.push(toast);
    container.pump(created).expect("pump succeeds");

    manager.handle_message(&ManagerMessage::Tick(created + Duration::from_millis(20)));
    container.pump(created).expect("pump succeeds");
    assert!(container.is_empty());
}

#[test]
fn diagnostics_record_binding_and_fades() {
    let diagnostics = DiagnosticsHandle::new(BufferCapacity::new(64));
    let mut manager = Manager::new();
    let mut container = NotificationContainer::new();
    container.set_diagnostics(diagnostics.clone());
    container.set_manager(Some(&mut manager)).expect("bind");

    manager.push(Notification::info("hello").with_fade(FadeDuration::from_millis(50)));
    let start = Instant::now();
    container.pump(start).expect("pump succeeds");
    container.tick(start + Duration::from_millis(60));

    let kinds: Vec<_> = diagnostics.snapshot().into_iter().map(|e| e.kind).collect();
    assert!(matches!(kinds[0], DiagnosticEventKind::ManagerBound { .. }));
    assert!(kinds.iter().any(|k| matches!(
        k,
        DiagnosticEventKind::FadeCompleted {
            direction: FadeDirection::In,
            ..
        }
    )));

    let json = diagnostics.export_json().expect("export succeeds");
    assert!(json.contains("fade_started"));
}

#[test]
fn config_round_trip_drives_manager_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        notifications: NotificationsConfig {
            max_visible: Some(5),
            fade_enabled: Some(false),
            fade_duration_ms: Some(400),
        },
        ..Config::default()
    };
    config::save_to_path(&saved, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    assert_eq!(loaded, saved);
    assert_eq!(loaded.notifications.max_visible().value(), 5);
    assert!(loaded.notifications.fade().is_none());
}

#[test]
fn invalid_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "notifications = 42")
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}
