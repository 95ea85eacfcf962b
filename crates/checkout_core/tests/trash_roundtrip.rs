use checkout_core::db::open_db_in_memory;
use checkout_core::{
    CreateTaskRequest, LocalStorage, SqliteLocalStorage, TaskListQuery, TaskService, TaskStatus,
};
use uuid::Uuid;

#[test]
fn soft_delete_moves_task_to_trash_with_deleted_at() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::try_new(&conn).unwrap();
    let service = TaskService::new(&storage);

    let task = service
        .create_task(CreateTaskRequest::new("Throw away", "old draft"))
        .unwrap();
    service.soft_delete(task.id).unwrap();

    assert!(service.list_tasks(&TaskListQuery::default()).unwrap().is_empty());

    let trashed = service.list_deleted(&TaskListQuery::default()).unwrap();
    assert_eq!(trashed.len(), 1);
    assert_eq!(trashed[0].task, task);
    assert!(trashed[0].deleted_at >= task.created_at);
}

#[test]
fn restore_yields_the_pre_delete_task() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::try_new(&conn).unwrap();
    let service = TaskService::new(&storage);

    let task = service
        .create_task(CreateTaskRequest::new("Round trip", "keep fields"))
        .unwrap();
    service.soft_delete(task.id).unwrap();
    service.restore(task.id).unwrap();

    let tasks = service.list_tasks(&TaskListQuery::default()).unwrap();
    assert_eq!(tasks, vec![task]);
    assert!(service
        .list_deleted(&TaskListQuery::default())
        .unwrap()
        .is_empty());

    // The restored entry carries no deletedAt remnant in storage.
    let raw = storage.get_item("tasks").unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(parsed[0].get("deletedAt").is_none());
}

#[test]
fn task_id_lives_in_exactly_one_collection_at_a_time() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::try_new(&conn).unwrap();
    let service = TaskService::new(&storage);

    let task = service
        .create_task(CreateTaskRequest::new("Exactly one home", ""))
        .unwrap();

    assert_eq!(collection_hits(&service, task.id), (true, false));

    service.soft_delete(task.id).unwrap();
    assert_eq!(collection_hits(&service, task.id), (false, true));

    service.restore(task.id).unwrap();
    assert_eq!(collection_hits(&service, task.id), (true, false));
}

/// Returns whether `id` appears in (active, trash).
fn collection_hits(
    service: &TaskService<'_, SqliteLocalStorage<'_>>,
    id: checkout_core::TaskId,
) -> (bool, bool) {
    let in_tasks = service
        .list_tasks(&TaskListQuery::default())
        .unwrap()
        .iter()
        .any(|candidate| candidate.id == id);
    let in_trash = service
        .list_deleted(&TaskListQuery::default())
        .unwrap()
        .iter()
        .any(|candidate| candidate.task.id == id);
    (in_tasks, in_trash)
}

#[test]
fn soft_delete_and_restore_on_unknown_ids_are_silent_no_ops() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::try_new(&conn).unwrap();
    let service = TaskService::new(&storage);

    let task = service
        .create_task(CreateTaskRequest::new("Untouched", ""))
        .unwrap();

    service.soft_delete(Uuid::new_v4()).unwrap();
    service.restore(Uuid::new_v4()).unwrap();
    service.permanently_delete(Uuid::new_v4()).unwrap();

    assert_eq!(
        service.list_tasks(&TaskListQuery::default()).unwrap(),
        vec![task]
    );
    assert!(service
        .list_deleted(&TaskListQuery::default())
        .unwrap()
        .is_empty());
}

#[test]
fn permanently_delete_removes_one_trash_entry_irrecoverably() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::try_new(&conn).unwrap();
    let service = TaskService::new(&storage);

    let first = service
        .create_task(CreateTaskRequest::new("first", ""))
        .unwrap();
    let second = service
        .create_task(CreateTaskRequest::new("second", ""))
        .unwrap();
    service.soft_delete(first.id).unwrap();
    service.soft_delete(second.id).unwrap();

    service.permanently_delete(first.id).unwrap();

    let remaining = service.list_deleted(&TaskListQuery::default()).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].task.id, second.id);

    // Restoring the purged id brings nothing back.
    service.restore(first.id).unwrap();
    assert!(service.list_tasks(&TaskListQuery::default()).unwrap().is_empty());
}

#[test]
fn empty_trash_clears_everything_regardless_of_contents() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::try_new(&conn).unwrap();
    let service = TaskService::new(&storage);

    // Emptying an already-empty trash is fine.
    service.empty_trash().unwrap();
    assert!(service
        .list_deleted(&TaskListQuery::default())
        .unwrap()
        .is_empty());

    for title in ["one", "two"] {
        let task = service
            .create_task(CreateTaskRequest::new(title, ""))
            .unwrap();
        service.soft_delete(task.id).unwrap();
    }
    assert_eq!(service.list_deleted(&TaskListQuery::default()).unwrap().len(), 2);

    service.empty_trash().unwrap();
    assert!(service
        .list_deleted(&TaskListQuery::default())
        .unwrap()
        .is_empty());
}

#[test]
fn completed_status_survives_the_trash_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::try_new(&conn).unwrap();
    let service = TaskService::new(&storage);

    let task = service
        .create_task(CreateTaskRequest::new("Done already", ""))
        .unwrap();
    service.set_status(task.id, TaskStatus::Completed).unwrap();
    service.soft_delete(task.id).unwrap();

    let trashed = service.list_deleted(&TaskListQuery::default()).unwrap();
    assert_eq!(trashed[0].task.status, TaskStatus::Completed);

    service.restore(task.id).unwrap();
    let restored = service.list_tasks(&TaskListQuery::default()).unwrap();
    assert_eq!(restored[0].status, TaskStatus::Completed);
}

#[test]
fn trash_search_filters_deleted_tasks() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteLocalStorage::try_new(&conn).unwrap();
    let service = TaskService::new(&storage);

    let keep = service
        .create_task(CreateTaskRequest::new("Project proposal", ""))
        .unwrap();
    let other = service
        .create_task(CreateTaskRequest::new("Groceries", "milk and eggs"))
        .unwrap();
    service.soft_delete(keep.id).unwrap();
    service.soft_delete(other.id).unwrap();

    let matches = service
        .list_deleted(&TaskListQuery {
            status: None,
            search: Some("proposal".to_string()),
        })
        .unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].task.id, keep.id);
}
