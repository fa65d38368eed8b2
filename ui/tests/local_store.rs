//! Browser tests for the localStorage adapter
//!
//! Run with `wasm-pack test --headless --firefox ui`.

use std::rc::Rc;

use patchtune_shared::{
    is_authenticated, CachedStore, KeyValueStore, PublishTaskSummary, PublishedTaskList,
    TaskStatus, PUBLISHED_TASKS_KEY, TOKEN_KEY,
};
use patchtune_ui::client::LocalStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn task(id: &str, status: TaskStatus) -> PublishTaskSummary {
    PublishTaskSummary {
        id: id.to_string(),
        title: format!("Task {}", id),
        task_type: "Patch".to_string(),
        application_count: "2".to_string(),
        group_count: "1".to_string(),
        created_by: "admin".to_string(),
        created_on: "2024-05-01".to_string(),
        status,
    }
}

#[wasm_bindgen_test]
fn test_token_is_stored_raw() {
    let store = LocalStore;
    store.set_raw(TOKEN_KEY, "t1").unwrap();

    assert_eq!(store.get_raw(TOKEN_KEY).as_deref(), Some("t1"));
    assert!(is_authenticated(&store));

    store.remove(TOKEN_KEY);
    assert_eq!(store.get_raw(TOKEN_KEY), None);
    assert!(!is_authenticated(&store));
}

#[wasm_bindgen_test]
fn test_task_toggle_persists_to_local_storage() {
    let store = LocalStore;
    store
        .set(PUBLISHED_TASKS_KEY, &vec![task("1", TaskStatus::Active), task("2", TaskStatus::Disabled)])
        .unwrap();

    let mut list = PublishedTaskList::load(store);
    assert_eq!(list.toggle_status("1").unwrap(), Some(TaskStatus::Disabled));

    let stored: Vec<PublishTaskSummary> = store.get(PUBLISHED_TASKS_KEY).unwrap().unwrap();
    assert_eq!(stored[0].status, TaskStatus::Disabled);
    assert_eq!(stored[1].status, TaskStatus::Disabled);

    store.remove(PUBLISHED_TASKS_KEY);
}

#[wasm_bindgen_test]
fn test_delete_writes_back_through_cache() {
    let store = Rc::new(CachedStore::new(LocalStore));
    store
        .set(PUBLISHED_TASKS_KEY, &vec![task("a", TaskStatus::Active), task("b", TaskStatus::Active)])
        .unwrap();

    let mut list = PublishedTaskList::load(Rc::clone(&store));
    list.delete("a").unwrap();

    // The browser sees the write, not just the cache
    let stored: Vec<PublishTaskSummary> = LocalStore.get(PUBLISHED_TASKS_KEY).unwrap().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, "b");

    LocalStore.remove(PUBLISHED_TASKS_KEY);
}

#[wasm_bindgen_test]
fn test_missing_task_key_loads_empty_list() {
    LocalStore.remove(PUBLISHED_TASKS_KEY);
    let list = PublishedTaskList::load(LocalStore);
    assert!(list.tasks().is_empty());
}

#[wasm_bindgen_test]
fn test_reload_sees_writes_made_after_first_load() {
    LocalStore.remove(PUBLISHED_TASKS_KEY);
    let first = PublishedTaskList::load(LocalStore);
    assert!(first.tasks().is_empty());

    // Another tab writes while this one keeps its handle
    LocalStore
        .set(PUBLISHED_TASKS_KEY, &vec![task("x", TaskStatus::Active)])
        .unwrap();

    let remounted = PublishedTaskList::load(LocalStore);
    assert_eq!(remounted.tasks().len(), 1);
    assert_eq!(remounted.get("x").unwrap().status, TaskStatus::Active);

    LocalStore.remove(PUBLISHED_TASKS_KEY);
}
