//! Bounded activity history

use crate::models::task::TaskStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of history entries kept
pub const HISTORY_LIMIT: usize = 5;

/// Kind of mutation a history entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    Created,
    Moved,
    Edited,
    Deleted,
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryAction::Created => write!(f, "created"),
            HistoryAction::Moved => write!(f, "moved"),
            HistoryAction::Edited => write!(f, "edited"),
            HistoryAction::Deleted => write!(f, "deleted"),
        }
    }
}

/// One audit record of a task mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub action: HistoryAction,
    pub task_id: String,
    /// Title of the task at the time of the action
    pub task_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_status: Option<TaskStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_status: Option<TaskStatus>,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        id: impl Into<String>,
        action: HistoryAction,
        task_id: impl Into<String>,
        task_title: impl Into<String>,
    ) -> Self {
        HistoryEntry {
            id: id.into(),
            action,
            task_id: task_id.into(),
            task_title: task_title.into(),
            from_status: None,
            to_status: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach the statuses of a move
    pub fn with_move(mut self, from: TaskStatus, to: TaskStatus) -> Self {
        self.from_status = Some(from);
        self.to_status = Some(to);
        self
    }

    /// One-line description for display
    pub fn summary(&self) -> String {
        match (self.action, self.from_status, self.to_status) {
            (HistoryAction::Moved, Some(from), Some(to)) => format!(
                "Moved \"{}\" from {} to {}",
                self.task_title,
                from.title(),
                to.title()
            ),
            (HistoryAction::Created, ..) => format!("Created \"{}\"", self.task_title),
            (HistoryAction::Edited, ..) => format!("Edited \"{}\"", self.task_title),
            (HistoryAction::Deleted, ..) => format!("Deleted \"{}\"", self.task_title),
            (HistoryAction::Moved, ..) => format!("Moved \"{}\"", self.task_title),
        }
    }
}

/// Most-recent-first history capped at [`HISTORY_LIMIT`] entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored entries, dropping anything past the cap
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(HISTORY_LIMIT);
        History { entries }
    }

    /// Put `entry` at the front, evicting the oldest past the cap
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
