//! Drag-and-drop reconciliation
//!
//! Turns a drag gesture into at most one store mutation. The decision is a
//! pure function of the gesture state, a snapshot of the columns and the
//! incoming event, so it can be driven by any front end (or a test) without
//! simulating pointer input.

use crate::models::{Column, TaskStatus, column_of};

/// Where a dragged task was released
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// The body of a column
    Column(TaskStatus),
    /// Another task card
    Task(String),
}

impl DropTarget {
    /// Interpret a raw drop-target id: column ids name columns, anything
    /// else is a task id
    pub fn parse(raw: &str) -> Self {
        match TaskStatus::from_column_id(raw) {
            Some(status) => DropTarget::Column(status),
            None => DropTarget::Task(raw.to_string()),
        }
    }
}

/// Events of a single drag gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Start { task_id: String },
    Over { target: Option<DropTarget> },
    End { target: Option<DropTarget> },
}

/// State of the in-flight gesture
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { task_id: String },
}

impl DragState {
    pub fn dragged_task(&self) -> Option<&str> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { task_id } => Some(task_id.as_str()),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// A store mutation decided by a finished gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardMutation {
    Move {
        task_id: String,
        from: TaskStatus,
        to: TaskStatus,
    },
    Reorder {
        column: TaskStatus,
        task_ids: Vec<String>,
    },
}

/// Advance the gesture by one event.
///
/// Returns the next state and the mutation to apply, if any. Only `End`
/// ever produces a mutation.
pub fn reconcile(
    state: &DragState,
    columns: &[Column],
    event: &DragEvent,
) -> (DragState, Option<BoardMutation>) {
    match event {
        DragEvent::Start { task_id } => (
            DragState::Dragging {
                task_id: task_id.clone(),
            },
            None,
        ),
        DragEvent::Over { .. } => (state.clone(), None),
        DragEvent::End { target } => {
            let mutation = match (state.dragged_task(), target) {
                (Some(task_id), Some(target)) => resolve_drop(columns, task_id, target),
                _ => None,
            };
            (DragState::Idle, mutation)
        }
    }
}

fn resolve_drop(columns: &[Column], task_id: &str, target: &DropTarget) -> Option<BoardMutation> {
    let source = column_of(columns, task_id)?;

    match target {
        DropTarget::Column(status) => {
            (source.status != *status).then(|| BoardMutation::Move {
                task_id: task_id.to_string(),
                from: source.status,
                to: *status,
            })
        }
        DropTarget::Task(over_id) => {
            let destination = column_of(columns, over_id)?;

            if source.status != destination.status {
                // Lands at the end of the destination; no reorder this gesture
                return Some(BoardMutation::Move {
                    task_id: task_id.to_string(),
                    from: source.status,
                    to: destination.status,
                });
            }

            let original = source.task_ids();
            let from_index = source.position(task_id)?;
            let to_index = source.position(over_id)?;

            let mut reordered = original.clone();
            let moved = reordered.remove(from_index);
            reordered.insert(to_index, moved);

            (reordered != original).then_some(BoardMutation::Reorder {
                column: source.status,
                task_ids: reordered,
            })
        }
    }
}
