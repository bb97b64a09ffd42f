//! Data models for taskboard

pub mod column;
pub mod history;
pub mod task;

pub use column::{Column, column_of, initial_columns};
pub use history::{HISTORY_LIMIT, History, HistoryAction, HistoryEntry};
pub use task::{Task, TaskStatus, TaskUpdate};
