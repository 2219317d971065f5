//! Application state and logic for the TUI.
//!
//! The [`App`] glues the store to the terminal: it owns the [`TodoStore`]
//! and the view-local state, reads snapshots, and issues intents. A dirty
//! flag shared with a store subscription drives redraws - every dispatch and
//! every view-state change marks the app dirty, and the event loop redraws
//! exactly when dirty.

mod handlers;
mod types;

pub use types::Focus;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{count_by_status, filter_todos, Filter};
use crate::models::TodoItem;
use crate::store::{Intent, TodoStore};
use crate::view_state::TodoViewState;

/// Main application state
pub struct App {
    /// The centralized item store (sole writer of the collection)
    pub store: TodoStore,
    /// View-local state: filter, pending input, list cursor
    pub view: TodoViewState,
    /// Which component receives key events
    pub focus: Focus,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Redraw flag, shared with the store subscription
    dirty: Arc<AtomicBool>,
    terminal_width: u16,
    terminal_height: u16,
}

impl App {
    pub fn new() -> Self {
        let mut store = TodoStore::new();

        // Subscribe the redraw flag so every dispatch triggers a re-render.
        let dirty = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&dirty);
        store.subscribe(Box::new(move |_| {
            flag.store(true, Ordering::Release);
        }));

        Self {
            store,
            view: TodoViewState::new(),
            focus: Focus::default(),
            should_quit: false,
            dirty,
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    // ========================================================================
    // Derived view data
    // ========================================================================

    /// The full item collection, in insertion order.
    pub fn todos(&self) -> &[TodoItem] {
        self.store.snapshot()
    }

    /// The displayed subset under the active filter.
    pub fn visible_todos(&self) -> Vec<&TodoItem> {
        filter_todos(self.view.filter, self.store.snapshot())
    }

    /// Number of done items.
    pub fn done_count(&self) -> usize {
        count_by_status(true, self.store.snapshot())
    }

    /// Number of undone items.
    pub fn undone_count(&self) -> usize {
        count_by_status(false, self.store.snapshot())
    }

    /// The id of the item under the list cursor, if any.
    pub fn selected_id(&self) -> Option<Uuid> {
        self.visible_todos().get(self.view.selected).map(|t| t.id)
    }

    // ========================================================================
    // Intents
    // ========================================================================

    /// Submit the pending title: dispatch `AddTodo` with the buffer contents
    /// (unconditionally - empty titles pass through) and reset the buffer.
    pub fn submit_pending_title(&mut self) {
        let title = self.view.input.take();
        self.store.dispatch(Intent::AddTodo { title });
    }

    /// Toggle the item under the list cursor.
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.dispatch(Intent::ToggleTodo { id });
            self.clamp_selection();
        }
    }

    /// Remove the item under the list cursor.
    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.dispatch(Intent::RemoveTodo { id });
            self.clamp_selection();
        }
    }

    /// Remove every done item.
    pub fn clear_completed(&mut self) {
        self.store.dispatch(Intent::ClearCompleted);
        self.clamp_selection();
    }

    /// Set the active filter.
    pub fn set_filter(&mut self, filter: Filter) {
        self.view.set_filter(filter);
        self.mark_dirty();
    }

    fn clamp_selection(&mut self) {
        let visible_len = self.visible_todos().len();
        self.view.clamp_selection(visible_len);
    }

    // ========================================================================
    // Redraw tracking
    // ========================================================================

    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    pub fn mark_rendered(&self) {
        self.dirty.store(false, Ordering::Release);
    }

    // ========================================================================
    // Terminal dimensions
    // ========================================================================

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    pub fn terminal_width(&self) -> u16 {
        self.terminal_width
    }

    pub fn terminal_height(&self) -> u16 {
        self.terminal_height
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
