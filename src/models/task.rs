//! Task model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status, which doubles as the id of the column holding the task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// All statuses in board order
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    /// Machine name, as used for column ids and on disk
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }

    /// Human-readable column title
    pub fn title(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Parse an exact column id (no aliases)
    pub fn from_column_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == id)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" | "to-do" | "to_do" => Ok(TaskStatus::Todo),
            "in-progress" | "inprogress" | "in_progress" | "doing" => Ok(TaskStatus::InProgress),
            "done" | "completed" => Ok(TaskStatus::Done),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}

/// A task on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task with the given id, title and status
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: TaskStatus) -> Self {
        let now = Utc::now();
        Task {
            id: id.into(),
            title: title.into(),
            description: None,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description, treating blank text as no description
    pub fn set_description(&mut self, description: Option<&str>) {
        self.description = normalize_description(description);
    }

    /// Case-insensitive substring match on title and description.
    /// `needle` must already be lower-cased.
    pub fn matches_query(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }

    /// Update the task's updated timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.created_at);
    }
}

/// Fields an edit may change; `None` leaves the field alone
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl TaskUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        TaskUpdate {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn description(description: impl Into<String>) -> Self {
        TaskUpdate {
            description: Some(description.into()),
            ..Default::default()
        }
    }

    /// Whether the update would leave the task with a blank title
    pub fn has_blank_title(&self) -> bool {
        self.title.as_ref().is_some_and(|t| t.trim().is_empty())
    }

    /// Merge the provided fields into `task`
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = &self.description {
            task.set_description(Some(description));
        }
    }
}

pub(crate) fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_status_display() {
        assert_eq!(TaskStatus::Todo.to_string(), "todo");
        assert_eq!(TaskStatus::InProgress.to_string(), "in-progress");
        assert_eq!(TaskStatus::Done.to_string(), "done");
    }

    #[test]
    fn test_task_status_parse() {
        assert_eq!("todo".parse::<TaskStatus>().unwrap(), TaskStatus::Todo);
        assert_eq!("To-Do".parse::<TaskStatus>().unwrap(), TaskStatus::Todo);
        assert_eq!(
            "in-progress".parse::<TaskStatus>().unwrap(),
            TaskStatus::InProgress
        );
        assert_eq!(
            "doing".parse::<TaskStatus>().unwrap(),
            TaskStatus::InProgress
        );
        assert_eq!("done".parse::<TaskStatus>().unwrap(), TaskStatus::Done);
        assert_eq!("completed".parse::<TaskStatus>().unwrap(), TaskStatus::Done);
        assert!("archived".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_column_id_is_exact() {
        assert_eq!(
            TaskStatus::from_column_id("in-progress"),
            Some(TaskStatus::InProgress)
        );
        assert_eq!(TaskStatus::from_column_id("doing"), None);
        assert_eq!(TaskStatus::from_column_id("Done"), None);
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn test_task_new() {
        let task = Task::new("abc", "Fix authentication bug", TaskStatus::Todo);
        assert_eq!(task.id, "abc");
        assert_eq!(task.title, "Fix authentication bug");
        assert_eq!(task.status, TaskStatus::Todo);
        assert!(task.description.is_none());
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_task_json_field_names() {
        let mut task = Task::new("abc", "Write report", TaskStatus::InProgress);
        task.set_description(Some("quarterly"));

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["description"], "quarterly");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }

    #[test]
    fn test_blank_description_is_none() {
        let mut task = Task::new("abc", "Test", TaskStatus::Todo);
        task.set_description(Some("   "));
        assert!(task.description.is_none());

        task.set_description(Some("  notes "));
        assert_eq!(task.description.as_deref(), Some("notes"));
    }

    #[test]
    fn test_matches_query() {
        let mut task = Task::new("abc", "Buy Milk", TaskStatus::Todo);
        assert!(task.matches_query("milk"));
        assert!(!task.matches_query("bread"));

        task.set_description(Some("Whole grain Bread"));
        assert!(task.matches_query("bread"));
    }

    #[test]
    fn test_touch_never_precedes_creation() {
        let mut task = Task::new("abc", "Test", TaskStatus::Todo);
        task.touch();
        assert!(task.updated_at >= task.created_at);
    }

    #[test]
    fn test_update_apply() {
        let mut task = Task::new("abc", "Old", TaskStatus::Todo);
        TaskUpdate {
            title: Some("  New title ".to_string()),
            description: Some("details".to_string()),
        }
        .apply_to(&mut task);

        assert_eq!(task.title, "New title");
        assert_eq!(task.description.as_deref(), Some("details"));

        TaskUpdate::description("").apply_to(&mut task);
        assert_eq!(task.title, "New title");
        assert!(task.description.is_none());
    }

    #[test]
    fn test_update_blank_title() {
        assert!(TaskUpdate::title("  ").has_blank_title());
        assert!(!TaskUpdate::title("ok").has_blank_title());
        assert!(!TaskUpdate::description("").has_blank_title());
    }
}
