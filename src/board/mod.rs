//! Board state, drag reconciliation and derived views

pub mod drag;
pub mod session;
pub mod store;
pub mod view;

pub use drag::{BoardMutation, DragEvent, DragState, DropTarget, reconcile};
pub use session::{KeyPress, Session, Shortcut, shortcut_for};
pub use store::{BoardStats, LookupError, Store};
pub use view::{BoardView, filter_columns, progress_percentage};
