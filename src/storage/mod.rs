//! Storage layer for board state

pub mod backend;
pub mod id_generator;
pub mod location;
pub mod persistence;

pub use backend::{BackendError, FileBackend, MemoryBackend, StorageBackend};
pub use id_generator::IdGenerator;
pub use location::{BoardLocation, BoardLocationError};
pub use persistence::{COLUMNS_KEY, HISTORY_KEY, Persistence, TASKS_KEY};
