//! JSON persistence of board state over a key-value backend
//!
//! Every operation here degrades instead of failing: saves log and drop
//! errors, loads fall back to an empty collection. In-memory state stays
//! authoritative for the session even when the durable copy is stale.

use crate::models::{Column, HistoryEntry, Task};
use crate::storage::backend::StorageBackend;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key for the flat task list
pub const TASKS_KEY: &str = "kanban-tasks";
/// Storage key for the column list
pub const COLUMNS_KEY: &str = "kanban-columns";
/// Storage key for the activity history
pub const HISTORY_KEY: &str = "kanban-history";

/// Reads and writes the three board documents
#[derive(Debug)]
pub struct Persistence<B> {
    backend: B,
}

impl<B: StorageBackend> Persistence<B> {
    pub fn new(backend: B) -> Self {
        Persistence { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn load_tasks(&self) -> Vec<Task> {
        self.load(TASKS_KEY, "tasks")
    }

    pub fn save_tasks(&mut self, tasks: &[Task]) {
        self.save(TASKS_KEY, "tasks", tasks);
    }

    pub fn load_columns(&self) -> Vec<Column> {
        self.load(COLUMNS_KEY, "columns")
    }

    pub fn save_columns(&mut self, columns: &[Column]) {
        self.save(COLUMNS_KEY, "columns", columns);
    }

    pub fn load_history(&self) -> Vec<HistoryEntry> {
        self.load(HISTORY_KEY, "history")
    }

    pub fn save_history(&mut self, history: &[HistoryEntry]) {
        self.save(HISTORY_KEY, "history", history);
    }

    /// Remove all three documents
    pub fn clear_all(&mut self) {
        for key in [TASKS_KEY, COLUMNS_KEY, HISTORY_KEY] {
            if let Err(e) = self.backend.remove(key) {
                log::error!("Error clearing {} from storage: {}", key, e);
            }
        }
    }

    fn load<T: DeserializeOwned>(&self, key: &str, what: &str) -> Vec<T> {
        let stored = match self.backend.get(key) {
            Ok(Some(stored)) => stored,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::error!("Error loading {} from storage: {}", what, e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&stored) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("Discarding malformed {} in storage: {}", what, e);
                Vec::new()
            }
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, what: &str, items: &[T]) {
        let json = match serde_json::to_string(items) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Error serializing {}: {}", what, e);
                return;
            }
        };

        if let Err(e) = self.backend.set(key, &json) {
            log::error!("Error saving {} to storage: {}", what, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HistoryAction, TaskStatus, initial_columns};
    use crate::storage::backend::{BackendError, FileBackend, MemoryBackend};
    use tempfile::TempDir;

    /// Backend whose every call fails, like a full or disabled store
    struct FailingBackend;

    impl StorageBackend for FailingBackend {
        fn get(&self, _key: &str) -> Result<Option<String>, BackendError> {
            Err(BackendError::Unavailable("disabled".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), BackendError> {
            Err(BackendError::Unavailable("quota exceeded".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<(), BackendError> {
            Err(BackendError::Unavailable("disabled".to_string()))
        }
    }

    fn sample_tasks() -> Vec<Task> {
        let mut a = Task::new("a1", "Buy milk", TaskStatus::Todo);
        a.set_description(Some("2 litres"));
        let b = Task::new("b2", "Write report", TaskStatus::Done);
        vec![a, b]
    }

    #[test]
    fn test_roundtrip_preserves_records() {
        let mut persistence = Persistence::new(MemoryBackend::new());
        let tasks = sample_tasks();

        let mut columns = initial_columns();
        columns[0].tasks.push(tasks[0].clone());
        columns[2].tasks.push(tasks[1].clone());

        let history = vec![
            HistoryEntry::new("h1", HistoryAction::Moved, "b2", "Write report")
                .with_move(TaskStatus::Todo, TaskStatus::Done),
        ];

        persistence.save_tasks(&tasks);
        persistence.save_columns(&columns);
        persistence.save_history(&history);

        assert_eq!(persistence.load_tasks(), tasks);
        assert_eq!(persistence.load_columns(), columns);
        assert_eq!(persistence.load_history(), history);
    }

    #[test]
    fn test_timestamps_are_revived() {
        let mut persistence = Persistence::new(MemoryBackend::new());
        let tasks = sample_tasks();
        persistence.save_tasks(&tasks);

        let loaded = persistence.load_tasks();
        assert_eq!(loaded[0].created_at, tasks[0].created_at);
        assert_eq!(loaded[0].updated_at, tasks[0].updated_at);
    }

    #[test]
    fn test_reads_camel_case_documents() {
        let mut backend = MemoryBackend::new();
        backend
            .set(
                TASKS_KEY,
                r#"[{"id":"x","title":"Old","status":"in-progress",
                    "createdAt":"2024-05-01T10:00:00.000Z",
                    "updatedAt":"2024-05-02T10:00:00.000Z"}]"#,
            )
            .unwrap();

        let tasks = Persistence::new(backend).load_tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].status, TaskStatus::InProgress);
        assert!(tasks[0].description.is_none());
        assert!(tasks[0].updated_at > tasks[0].created_at);
    }

    #[test]
    fn test_missing_keys_load_empty() {
        let persistence = Persistence::new(MemoryBackend::new());
        assert!(persistence.load_tasks().is_empty());
        assert!(persistence.load_columns().is_empty());
        assert!(persistence.load_history().is_empty());
    }

    #[test]
    fn test_malformed_json_loads_empty() {
        let mut backend = MemoryBackend::new();
        backend.set(TASKS_KEY, "{not json").unwrap();
        backend.set(HISTORY_KEY, r#"[{"id": 3}]"#).unwrap();

        let persistence = Persistence::new(backend);
        assert!(persistence.load_tasks().is_empty());
        assert!(persistence.load_history().is_empty());
    }

    #[test]
    fn test_failing_backend_never_panics() {
        let mut persistence = Persistence::new(FailingBackend);
        persistence.save_tasks(&sample_tasks());
        persistence.save_columns(&initial_columns());
        persistence.clear_all();
        assert!(persistence.load_tasks().is_empty());
        assert!(persistence.load_columns().is_empty());
    }

    #[test]
    fn test_clear_all() {
        let mut persistence = Persistence::new(MemoryBackend::new());
        persistence.save_tasks(&sample_tasks());
        persistence.save_columns(&initial_columns());
        persistence.save_history(&[]);
        assert_eq!(persistence.backend().len(), 3);

        persistence.clear_all();
        assert!(persistence.backend().is_empty());
    }

    #[test]
    fn test_file_backend_roundtrip() {
        let temp = TempDir::new().unwrap();
        let tasks = sample_tasks();

        {
            let mut persistence = Persistence::new(FileBackend::new(temp.path()));
            persistence.save_tasks(&tasks);
        }

        let persistence = Persistence::new(FileBackend::new(temp.path()));
        assert_eq!(persistence.load_tasks(), tasks);
    }
}
