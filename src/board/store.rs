//! The board store: single source of truth for tasks, columns and history
//!
//! All mutation goes through [`Store`]. Each operation updates the flat task
//! list, the per-column copies and the persisted documents before it
//! returns. Invalid input and unknown ids are silent no-ops that record no
//! history; operations report whether they applied by returning `Option`.

use crate::board::drag::BoardMutation;
use crate::models::{
    Column, History, HistoryAction, HistoryEntry, Task, TaskStatus, TaskUpdate, initial_columns,
    task::normalize_description,
};
use crate::storage::{IdGenerator, Persistence, StorageBackend};
use thiserror::Error;

/// Errors resolving a user-supplied task id
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Task not found: {0}")]
    NotFound(String),
    #[error("Task id '{0}' is ambiguous ({1} matches)")]
    Ambiguous(String, usize),
}

/// Task counts per column
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BoardStats {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

/// Owned board state persisted through a storage backend
#[derive(Debug)]
pub struct Store<B> {
    tasks: Vec<Task>,
    columns: Vec<Column>,
    history: History,
    persistence: Persistence<B>,
}

impl<B: StorageBackend> Store<B> {
    /// Load the board from `backend`, starting empty if nothing is stored
    pub fn open(backend: B) -> Self {
        let persistence = Persistence::new(backend);
        let tasks = persistence.load_tasks();
        let stored_columns = persistence.load_columns();
        let history = History::from_entries(persistence.load_history());

        let columns = reconcile_columns(&tasks, stored_columns);

        log::debug!(
            "Opened board with {} tasks and {} history entries",
            tasks.len(),
            history.len()
        );

        Store {
            tasks,
            columns,
            history,
            persistence,
        }
    }

    /// All tasks in creation order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The three columns in board order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, status: TaskStatus) -> &Column {
        // reconcile_columns guarantees one column per status
        &self.columns[column_index(status)]
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn persistence(&self) -> &Persistence<B> {
        &self.persistence
    }

    /// Resolve an exact id or a unique id prefix
    pub fn resolve_id(&self, id: &str) -> Result<String, LookupError> {
        if self.task(id).is_some() {
            return Ok(id.to_string());
        }

        let matches: Vec<&Task> = if id.is_empty() {
            Vec::new()
        } else {
            self.tasks.iter().filter(|t| t.id.starts_with(id)).collect()
        };

        match matches.as_slice() {
            [task] => Ok(task.id.clone()),
            [] => Err(LookupError::NotFound(id.to_string())),
            many => Err(LookupError::Ambiguous(id.to_string(), many.len())),
        }
    }

    /// Count tasks per column
    pub fn stats(&self) -> BoardStats {
        BoardStats {
            total: self.tasks.len(),
            todo: self.column(TaskStatus::Todo).len(),
            in_progress: self.column(TaskStatus::InProgress).len(),
            done: self.column(TaskStatus::Done).len(),
        }
    }

    /// Create a task at the end of the `status` column.
    ///
    /// Returns `None` without touching state when the trimmed title is empty.
    pub fn add_task(
        &mut self,
        title: &str,
        description: Option<&str>,
        status: TaskStatus,
    ) -> Option<Task> {
        let title = title.trim();
        if title.is_empty() {
            log::debug!("Ignoring task with empty title");
            return None;
        }

        let id = IdGenerator::next_id(|candidate| self.task(candidate).is_some());
        let mut task = Task::new(id, title, status);
        task.description = normalize_description(description);

        self.tasks.push(task.clone());
        self.columns[column_index(status)].tasks.push(task.clone());
        self.save_board();

        self.record(HistoryAction::Created, &task, None);
        log::debug!("Created task {} in {}", task.id, status);
        Some(task)
    }

    /// Merge `update` into the task with `id`
    pub fn update_task(&mut self, id: &str, update: &TaskUpdate) -> Option<Task> {
        if update.has_blank_title() {
            log::debug!("Ignoring edit of {} with empty title", id);
            return None;
        }

        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        update.apply_to(task);
        task.touch();
        let updated = task.clone();

        for column in &mut self.columns {
            for copy in column.tasks.iter_mut().filter(|t| t.id == id) {
                *copy = updated.clone();
            }
        }
        self.save_board();

        self.record(HistoryAction::Edited, &updated, None);
        Some(updated)
    }

    /// Remove the task with `id` from the board
    pub fn delete_task(&mut self, id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        let removed = self.tasks.remove(index);

        for column in &mut self.columns {
            column.tasks.retain(|t| t.id != id);
        }
        self.save_board();

        self.record(HistoryAction::Deleted, &removed, None);
        log::debug!("Deleted task {}", id);
        Some(removed)
    }

    /// Move a task to the end of the `to` column
    pub fn move_task(&mut self, id: &str, from: TaskStatus, to: TaskStatus) -> Option<Task> {
        if from == to {
            return None;
        }

        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.status = to;
        task.touch();
        let moved = task.clone();

        for column in &mut self.columns {
            column.tasks.retain(|t| t.id != id);
        }
        self.columns[column_index(to)].tasks.push(moved.clone());
        self.save_board();

        self.record(HistoryAction::Moved, &moved, Some((from, to)));
        log::debug!("Moved task {} from {} to {}", id, from, to);
        Some(moved)
    }

    /// Reorder a column to follow `ordered_ids`.
    ///
    /// Ids not in the column are dropped and repeats collapse to their first
    /// occurrence. Tasks the list leaves out stay in the column after the
    /// listed ones, in their existing order.
    pub fn reorder_tasks(&mut self, column: TaskStatus, ordered_ids: &[String]) {
        let column = &mut self.columns[column_index(column)];
        let mut remaining = std::mem::take(&mut column.tasks);
        let mut reordered = Vec::with_capacity(remaining.len());

        for id in ordered_ids {
            if let Some(pos) = remaining.iter().position(|t| &t.id == id) {
                reordered.push(remaining.remove(pos));
            }
        }
        reordered.append(&mut remaining);
        column.tasks = reordered;

        self.persistence.save_columns(&self.columns);
    }

    /// Execute a mutation produced by drag reconciliation
    pub fn apply(&mut self, mutation: &BoardMutation) {
        match mutation {
            BoardMutation::Move { task_id, from, to } => {
                self.move_task(task_id, *from, *to);
            }
            BoardMutation::Reorder { column, task_ids } => {
                self.reorder_tasks(*column, task_ids);
            }
        }
    }

    /// Wipe persisted data and return to an empty board
    pub fn reset(&mut self) {
        self.persistence.clear_all();
        self.tasks.clear();
        self.columns = initial_columns();
        self.history.clear();
        log::debug!("Board reset");
    }

    fn save_board(&mut self) {
        self.persistence.save_tasks(&self.tasks);
        self.persistence.save_columns(&self.columns);
    }

    fn record(
        &mut self,
        action: HistoryAction,
        task: &Task,
        statuses: Option<(TaskStatus, TaskStatus)>,
    ) {
        let id = IdGenerator::next_id(|candidate| self.history.contains_id(candidate));
        let mut entry = HistoryEntry::new(id, action, task.id.as_str(), task.title.as_str());
        if let Some((from, to)) = statuses {
            entry = entry.with_move(from, to);
        }

        self.history.record(entry);
        self.persistence.save_history(self.history.entries());
    }
}

fn column_index(status: TaskStatus) -> usize {
    match status {
        TaskStatus::Todo => 0,
        TaskStatus::InProgress => 1,
        TaskStatus::Done => 2,
    }
}

/// Rebuild the three columns so they agree with the flat task list.
///
/// Stored column order is kept for tasks that still exist with that status;
/// any other task of the status is appended in flat-list order. Copies are
/// refreshed from the flat list.
fn reconcile_columns(tasks: &[Task], stored: Vec<Column>) -> Vec<Column> {
    let mut columns = initial_columns();
    let mut placed = std::collections::HashSet::new();

    for stored_column in stored {
        let index = column_index(stored_column.status);
        for copy in stored_column.tasks {
            let Some(task) = tasks.iter().find(|t| t.id == copy.id) else {
                continue;
            };
            if task.status == stored_column.status && placed.insert(task.id.clone()) {
                columns[index].tasks.push(task.clone());
            }
        }
    }

    for task in tasks {
        if placed.insert(task.id.clone()) {
            columns[column_index(task.status)].tasks.push(task.clone());
        }
    }

    columns
}
