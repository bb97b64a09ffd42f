//! Interactive session state: search, history panel, keyboard and drag

use crate::board::drag::{DragEvent, DragState, DropTarget, reconcile};
use crate::board::store::Store;
use crate::board::view::BoardView;
use crate::storage::StorageBackend;

/// A key press as delivered by the front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    /// Whether focus is in an editable text field
    pub in_text_field: bool,
}

impl KeyPress {
    pub fn plain(key: &str) -> Self {
        KeyPress {
            key: key.to_string(),
            ctrl: false,
            meta: false,
            in_text_field: false,
        }
    }

    pub fn ctrl(key: &str) -> Self {
        KeyPress {
            ctrl: true,
            ..Self::plain(key)
        }
    }

    pub fn in_text_field(mut self) -> Self {
        self.in_text_field = true;
        self
    }

    fn has_command_modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Board-level keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd+K
    FocusSearch,
    /// Ctrl/Cmd+H
    ToggleHistory,
    /// Escape while a search query is active
    ClearSearch,
}

/// Map a key press to a shortcut. Presses inside text fields are left to
/// the field.
pub fn shortcut_for(press: &KeyPress, search_has_content: bool) -> Option<Shortcut> {
    if press.in_text_field {
        return None;
    }

    match press.key.as_str() {
        "k" | "K" if press.has_command_modifier() => Some(Shortcut::FocusSearch),
        "h" | "H" if press.has_command_modifier() => Some(Shortcut::ToggleHistory),
        "Escape" if search_has_content => Some(Shortcut::ClearSearch),
        _ => None,
    }
}

/// UI state that lives for one session and is never persisted
#[derive(Debug, Clone, Default)]
pub struct Session {
    filter_query: String,
    show_history: bool,
    search_focused: bool,
    drag: DragState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter_query(&self) -> &str {
        &self.filter_query
    }

    pub fn set_filter_query(&mut self, query: impl Into<String>) {
        self.filter_query = query.into();
    }

    pub fn show_history(&self) -> bool {
        self.show_history
    }

    pub fn toggle_history(&mut self) {
        self.show_history = !self.show_history;
    }

    pub fn search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Filtered view of `store` for the current query
    pub fn view<B: StorageBackend>(&self, store: &Store<B>) -> BoardView {
        BoardView::compute(store.columns(), &self.filter_query)
    }

    /// Dispatch a key press; returns the shortcut that fired, if any
    pub fn handle_key(&mut self, press: &KeyPress) -> Option<Shortcut> {
        let shortcut = shortcut_for(press, !self.filter_query.is_empty())?;
        match shortcut {
            Shortcut::FocusSearch => self.search_focused = true,
            Shortcut::ToggleHistory => self.toggle_history(),
            Shortcut::ClearSearch => {
                self.filter_query.clear();
                self.search_focused = false;
            }
        }
        Some(shortcut)
    }

    pub fn begin_drag(&mut self, task_id: &str) {
        let start = DragEvent::Start {
            task_id: task_id.to_string(),
        };
        let (state, _) = reconcile(&self.drag, &[], &start);
        self.drag = state;
    }

    /// Hover feedback only; never changes the board
    pub fn drag_over(&mut self, target: Option<DropTarget>) {
        let (state, _) = reconcile(&self.drag, &[], &DragEvent::Over { target });
        self.drag = state;
    }

    /// Finish the gesture and apply whatever it amounts to
    pub fn end_drag<B: StorageBackend>(
        &mut self,
        target: Option<DropTarget>,
        store: &mut Store<B>,
    ) -> bool {
        let (state, mutation) = reconcile(&self.drag, store.columns(), &DragEvent::End { target });
        self.drag = state;

        match mutation {
            Some(mutation) => {
                log::debug!("Applying drag result {:?}", mutation);
                store.apply(&mutation);
                true
            }
            None => false,
        }
    }
}
