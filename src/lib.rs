//! taskboard - a three-column kanban board persisted to local JSON documents
//!
//! This library provides the board store (task CRUD, moves, reordering and a
//! short activity history), drag-and-drop reconciliation, search-filtered
//! views, and the key-value persistence the store writes through.

pub mod board;
pub mod cli;
pub mod models;
pub mod storage;

pub use board::{BoardView, Session, Store};
pub use models::{Column, HistoryEntry, Task, TaskStatus, TaskUpdate};
pub use storage::{BoardLocation, FileBackend, MemoryBackend, StorageBackend};
