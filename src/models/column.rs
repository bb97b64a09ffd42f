//! Board columns

use crate::models::task::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// A fixed lane of the board holding copies of the tasks at its status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    /// Create an empty column for the given status
    pub fn new(status: TaskStatus) -> Self {
        Column {
            id: status.as_str().to_string(),
            title: status.title().to_string(),
            status,
            tasks: Vec::new(),
        }
    }

    pub fn contains(&self, task_id: &str) -> bool {
        self.tasks.iter().any(|t| t.id == task_id)
    }

    pub fn position(&self, task_id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }

    /// Ids of the column's tasks in display order
    pub fn task_ids(&self) -> Vec<String> {
        self.tasks.iter().map(|t| t.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// The three columns a fresh board starts with
pub fn initial_columns() -> Vec<Column> {
    TaskStatus::ALL.into_iter().map(Column::new).collect()
}

/// Find the column currently holding `task_id`
pub fn column_of<'a>(columns: &'a [Column], task_id: &str) -> Option<&'a Column> {
    columns.iter().find(|c| c.contains(task_id))
}
