use checkout_core::db::open_db_in_memory;
use checkout_core::{LocalStorage, NotificationService, SqliteLocalStorage};
use uuid::Uuid;

#[test]
fn first_load_seeds_demo_notifications() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::try_new(&conn).unwrap();
    let service = NotificationService::new(&storage);

    let notifications = service.list().unwrap();
    assert_eq!(notifications.len(), 3);
    // The seed ships two unread notices and one already-read reminder.
    assert_eq!(service.unread_count().unwrap(), 2);

    // The seed is persisted, so a second load returns the same entries.
    assert_eq!(service.list().unwrap(), notifications);
}

#[test]
fn mark_read_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::try_new(&conn).unwrap();
    let service = NotificationService::new(&storage);

    let unread = service
        .list()
        .unwrap()
        .into_iter()
        .find(|notification| !notification.read)
        .unwrap();

    service.mark_read(unread.id).unwrap();
    let after_once = service.list().unwrap();

    service.mark_read(unread.id).unwrap();
    let after_twice = service.list().unwrap();

    assert_eq!(after_once, after_twice);
    assert!(after_twice
        .iter()
        .find(|notification| notification.id == unread.id)
        .unwrap()
        .read);
    assert_eq!(service.unread_count().unwrap(), 1);
}

#[test]
fn mark_read_on_unknown_id_is_a_silent_no_op() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::try_new(&conn).unwrap();
    let service = NotificationService::new(&storage);

    let before = service.list().unwrap();
    service.mark_read(Uuid::new_v4()).unwrap();
    assert_eq!(service.list().unwrap(), before);
}

#[test]
fn clear_all_empties_the_collection_without_reseeding() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::try_new(&conn).unwrap();
    let service = NotificationService::new(&storage);

    assert_eq!(service.list().unwrap().len(), 3);
    service.clear_all().unwrap();

    // Cleared is not first-run: the demo seed must not come back.
    assert!(service.list().unwrap().is_empty());
    assert_eq!(service.unread_count().unwrap(), 0);
    assert_eq!(storage.get_item("notifications").unwrap().as_deref(), Some("[]"));
}

#[test]
fn unread_count_is_recomputed_from_the_collection() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::try_new(&conn).unwrap();
    let service = NotificationService::new(&storage);

    let notifications = service.list().unwrap();
    assert_eq!(service.unread_count().unwrap(), 2);

    for notification in &notifications {
        service.mark_read(notification.id).unwrap();
    }
    assert_eq!(service.unread_count().unwrap(), 0);
}

#[test]
fn persisted_layout_matches_storage_contract() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::try_new(&conn).unwrap();
    let service = NotificationService::new(&storage);

    let notifications = service.list().unwrap();

    let raw = storage.get_item("notifications").unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &parsed[0];

    assert_eq!(entry["id"], notifications[0].id.to_string());
    assert_eq!(entry["read"], false);
    assert_eq!(entry["createdAt"], notifications[0].created_at);
    assert!(entry["title"].is_string());
    assert!(entry["message"].is_string());
}
