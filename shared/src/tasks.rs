//! Published task list
//!
//! Task summaries live as a JSON array under [`PUBLISHED_TASKS_KEY`]. Every
//! mutation rewrites the whole array; concurrent tabs overwrite each other.

use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, StorageError};
use crate::messages::Notification;
use crate::storage::{KeyValueStore, PUBLISHED_TASKS_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Active,
    Disabled,
}

impl TaskStatus {
    pub fn toggled(&self) -> TaskStatus {
        match self {
            TaskStatus::Active => TaskStatus::Disabled,
            TaskStatus::Disabled => TaskStatus::Active,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Active => "Active",
            TaskStatus::Disabled => "Disabled",
        }
    }

    /// Label of the action that flips this status
    pub fn toggle_action(&self) -> &'static str {
        match self {
            TaskStatus::Active => "Disable",
            TaskStatus::Disabled => "Enable",
        }
    }
}

/// Stored summary of a publish task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishTaskSummary {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub task_type: String,
    pub application_count: String,
    pub group_count: String,
    pub created_by: String,
    pub created_on: String,
    pub status: TaskStatus,
}

/// Task list bound to a store
pub struct PublishedTaskList<S> {
    store: S,
    tasks: Vec<PublishTaskSummary>,
}

impl<S: KeyValueStore> PublishedTaskList<S> {
    /// Load the stored list. A missing or unreadable key gives an empty list.
    pub fn load(store: S) -> Self {
        let tasks = match store.get::<Vec<PublishTaskSummary>>(PUBLISHED_TASKS_KEY) {
            Ok(tasks) => tasks.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Ignoring unreadable {}: {}", PUBLISHED_TASKS_KEY, e);
                Vec::new()
            }
        };
        tracing::debug!("Loaded {} published tasks", tasks.len());
        Self { store, tasks }
    }

    pub fn tasks(&self) -> &[PublishTaskSummary] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&PublishTaskSummary> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Write `tasks` and adopt them only once the store accepted them, so a
    /// failed write leaves the list matching what is stored
    fn commit(&mut self, tasks: Vec<PublishTaskSummary>) -> Result<(), StorageError> {
        self.store.set(PUBLISHED_TASKS_KEY, &tasks)?;
        self.tasks = tasks;
        Ok(())
    }

    /// Flip Active/Disabled and write the list back. Returns the new status,
    /// or `None` for an unknown id.
    pub fn toggle_status(&mut self, id: &str) -> Result<Option<TaskStatus>, StorageError> {
        let mut tasks = self.tasks.clone();
        let Some(task) = tasks.iter_mut().find(|task| task.id == id) else {
            tracing::debug!("Toggle ignored for unknown task {}", id);
            return Ok(None);
        };
        task.status = task.status.toggled();
        let status = task.status;
        self.commit(tasks)?;
        tracing::info!("Task {} is now {}", id, status.label());
        Ok(Some(status))
    }

    /// Remove by id and write the list back
    pub fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        let mut tasks = self.tasks.clone();
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        let removed = tasks.len() != before;
        self.commit(tasks)?;
        if removed {
            tracing::info!("Deleted task {}", id);
        }
        Ok(())
    }

    /// "View" action; only notifies
    pub fn view(&self, id: &str) -> Notification {
        match self.get(id) {
            Some(task) => Notification::info("View task", format!("Viewing {}", task.title)),
            None => Notification::from(&ConsoleError::TaskNotFound(id.to_string())),
        }
    }

    /// "Modify" action; only notifies
    pub fn modify(&self, id: &str) -> Notification {
        match self.get(id) {
            Some(task) => Notification::info("Modify task", format!("Modifying {}", task.title)),
            None => Notification::from(&ConsoleError::TaskNotFound(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn summary(id: &str, status: TaskStatus) -> PublishTaskSummary {
        PublishTaskSummary {
            id: id.to_string(),
            title: format!("Task {}", id),
            task_type: "Update".to_string(),
            application_count: "3".to_string(),
            group_count: "1".to_string(),
            created_by: "admin".to_string(),
            created_on: "2024-03-01".to_string(),
            status,
        }
    }

    fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .set(
                PUBLISHED_TASKS_KEY,
                &vec![summary("1", TaskStatus::Active), summary("2", TaskStatus::Disabled)],
            )
            .unwrap();
        store
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(summary("1", TaskStatus::Active)).unwrap();
        assert_eq!(json["type"], "Update");
        assert_eq!(json["applicationCount"], "3");
        assert_eq!(json["createdOn"], "2024-03-01");
        assert_eq!(json["status"], "Active");
    }

    #[test]
    fn test_missing_key_is_empty() {
        let list = PublishedTaskList::load(MemoryStore::new());
        assert!(list.tasks().is_empty());
    }

    #[test]
    fn test_unreadable_key_is_empty() {
        let store = MemoryStore::new();
        store.set_raw(PUBLISHED_TASKS_KEY, "[{\"id\":").unwrap();
        let list = PublishedTaskList::load(store);
        assert!(list.tasks().is_empty());
    }

    #[test]
    fn test_toggle_is_involution_and_persists() {
        let store = seeded_store();
        let mut list = PublishedTaskList::load(store.clone());

        assert_eq!(list.toggle_status("1").unwrap(), Some(TaskStatus::Disabled));
        let stored: Vec<PublishTaskSummary> = store.get(PUBLISHED_TASKS_KEY).unwrap().unwrap();
        assert_eq!(stored[0].status, TaskStatus::Disabled);

        assert_eq!(list.toggle_status("1").unwrap(), Some(TaskStatus::Active));
        assert_eq!(list.toggle_status("missing").unwrap(), None);
        let reloaded = PublishedTaskList::load(store);
        assert_eq!(reloaded.tasks()[0].status, TaskStatus::Active);
        assert_eq!(reloaded.tasks()[1].status, TaskStatus::Disabled);
    }

    #[test]
    fn test_delete_writes_back() {
        let store = seeded_store();
        let mut list = PublishedTaskList::load(store.clone());

        list.delete("1").unwrap();
        assert_eq!(list.tasks().len(), 1);

        let reloaded = PublishedTaskList::load(store);
        assert_eq!(reloaded.tasks().len(), 1);
        assert_eq!(reloaded.tasks()[0].id, "2");
    }

    /// Accepts reads, rejects every write
    struct FullStore(MemoryStore);

    impl KeyValueStore for FullStore {
        fn get_raw(&self, key: &str) -> Option<String> {
            self.0.get_raw(key)
        }

        fn set_raw(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("QuotaExceededError".to_string()))
        }

        fn remove(&self, key: &str) {
            self.0.remove(key)
        }
    }

    #[test]
    fn test_failed_toggle_keeps_stored_status() {
        let backing = seeded_store();
        let mut list = PublishedTaskList::load(FullStore(backing.clone()));

        assert!(matches!(list.toggle_status("1"), Err(StorageError::Backend(_))));
        assert_eq!(list.get("1").unwrap().status, TaskStatus::Active);

        let stored: Vec<PublishTaskSummary> = backing.get(PUBLISHED_TASKS_KEY).unwrap().unwrap();
        assert_eq!(stored[0].status, TaskStatus::Active);
    }

    #[test]
    fn test_failed_delete_keeps_task() {
        let backing = seeded_store();
        let mut list = PublishedTaskList::load(FullStore(backing.clone()));

        assert!(list.delete("1").is_err());
        assert_eq!(list.tasks().len(), 2);
        assert!(list.get("1").is_some());
        assert_eq!(PublishedTaskList::load(backing).tasks().len(), 2);
    }

    #[test]
    fn test_load_sees_writes_from_another_handle() {
        let store = seeded_store();
        let first = PublishedTaskList::load(store.clone());
        assert_eq!(first.tasks().len(), 2);

        // Another tab appends a task behind this list's back
        let other = store.clone();
        let mut stored: Vec<PublishTaskSummary> = other.get(PUBLISHED_TASKS_KEY).unwrap().unwrap();
        stored.push(summary("3", TaskStatus::Active));
        other.set(PUBLISHED_TASKS_KEY, &stored).unwrap();

        let mut remounted = PublishedTaskList::load(store.clone());
        assert_eq!(remounted.tasks().len(), 3);

        remounted.toggle_status("1").unwrap();
        let stored: Vec<PublishTaskSummary> = store.get(PUBLISHED_TASKS_KEY).unwrap().unwrap();
        assert_eq!(stored.len(), 3);
    }

    #[test]
    fn test_view_and_modify_only_notify() {
        let store = seeded_store();
        let writes = store.write_count();
        let list = PublishedTaskList::load(store.clone());

        assert_eq!(list.view("1").description.as_deref(), Some("Viewing Task 1"));
        assert!(!list.modify("2").is_destructive());
        assert!(list.view("nope").is_destructive());
        assert_eq!(store.write_count(), writes);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(TaskStatus::Active.toggled().toggled(), TaskStatus::Active);
        assert_eq!(TaskStatus::Active.toggle_action(), "Disable");
    }
}
