//! The centralized to-do store.
//!
//! The store is the sole owner and sole writer of the item collection. Views
//! read snapshots and request mutations by dispatching an [`Intent`]; after
//! every dispatch the store notifies its subscribed listeners with the
//! post-mutation snapshot. Mutations are applied synchronously, so from the
//! caller's perspective each dispatch is atomic.

use crate::models::TodoItem;
use tracing::debug;
use uuid::Uuid;

/// A named request for a state mutation, issued by the view.
///
/// Intents are fire-and-forget: no return value is observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Append a new item with the given title. The title is taken verbatim;
    /// empty titles are accepted.
    AddTodo { title: String },
    /// Remove the item with the given id. Unknown ids are a no-op.
    RemoveTodo { id: Uuid },
    /// Flip the `done` flag of the item with the given id. Unknown ids are a
    /// no-op.
    ToggleTodo { id: Uuid },
    /// Remove every item where `done == true`.
    ClearCompleted,
}

/// Callback invoked with the post-mutation snapshot after every dispatch.
pub type Listener = Box<dyn FnMut(&[TodoItem]) + Send>;

/// Handle returned by [`TodoStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

/// Owns the item collection and serializes all mutations.
#[derive(Default)]
pub struct TodoStore {
    todos: Vec<TodoItem>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl TodoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Immutable read of the current item collection, in insertion order.
    pub fn snapshot(&self) -> &[TodoItem] {
        &self.todos
    }

    /// Register a listener; it fires after every subsequent dispatch.
    pub fn subscribe(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a previously registered listener.
    ///
    /// Returns `false` if the id was already unsubscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Apply an intent and notify listeners.
    pub fn dispatch(&mut self, intent: Intent) {
        debug!(?intent, "dispatch");
        match intent {
            Intent::AddTodo { title } => {
                self.todos.push(TodoItem::new(title));
            }
            Intent::RemoveTodo { id } => {
                self.todos.retain(|t| t.id != id);
            }
            Intent::ToggleTodo { id } => {
                if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
                    todo.done = !todo.done;
                }
            }
            Intent::ClearCompleted => {
                self.todos.retain(|t| !t.done);
            }
        }
        self.notify();
    }

    fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener(&self.todos);
        }
    }
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore")
            .field("todos", &self.todos)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(store: &mut TodoStore, title: &str) -> Uuid {
        store.dispatch(Intent::AddTodo {
            title: title.to_string(),
        });
        store.snapshot().last().unwrap().id
    }

    #[test]
    fn test_add_appends_in_insertion_order() {
        let mut store = TodoStore::new();
        add(&mut store, "first");
        add(&mut store, "second");
        add(&mut store, "third");

        let titles: Vec<&str> = store.snapshot().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_add_accepts_empty_title() {
        let mut store = TodoStore::new();
        add(&mut store, "");
        assert_eq!(store.snapshot().len(), 1);
        assert_eq!(store.snapshot()[0].title, "");
    }

    #[test]
    fn test_remove_matches_by_id() {
        let mut store = TodoStore::new();
        let a = add(&mut store, "a");
        let b = add(&mut store, "b");

        store.dispatch(Intent::RemoveTodo { id: a });

        assert_eq!(store.snapshot().len(), 1);
        assert_eq!(store.snapshot()[0].id, b);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = TodoStore::new();
        add(&mut store, "a");

        store.dispatch(Intent::RemoveTodo { id: Uuid::new_v4() });

        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn test_toggle_flips_done_in_place() {
        let mut store = TodoStore::new();
        let id = add(&mut store, "a");

        store.dispatch(Intent::ToggleTodo { id });
        assert!(store.snapshot()[0].done);

        store.dispatch(Intent::ToggleTodo { id });
        assert!(!store.snapshot()[0].done);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = TodoStore::new();
        add(&mut store, "a");

        store.dispatch(Intent::ToggleTodo { id: Uuid::new_v4() });

        assert!(!store.snapshot()[0].done);
    }

    #[test]
    fn test_toggle_then_clear_removes_only_done_items() {
        let mut store = TodoStore::new();
        let one = add(&mut store, "one");
        let two = add(&mut store, "two");

        store.dispatch(Intent::ToggleTodo { id: two });
        store.dispatch(Intent::ClearCompleted);

        assert_eq!(store.snapshot().len(), 1);
        assert_eq!(store.snapshot()[0].id, one);
        assert!(!store.snapshot()[0].done);
    }

    #[test]
    fn test_clear_on_all_undone_is_noop() {
        let mut store = TodoStore::new();
        add(&mut store, "a");
        add(&mut store, "b");

        store.dispatch(Intent::ClearCompleted);

        assert_eq!(store.snapshot().len(), 2);
    }

    #[test]
    fn test_listener_fires_once_per_dispatch() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let mut store = TodoStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        store.subscribe(Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        add(&mut store, "a");
        store.dispatch(Intent::ClearCompleted);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_listener_sees_post_mutation_snapshot() {
        use std::sync::{Arc, Mutex};

        let mut store = TodoStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(Box::new(move |todos| {
            sink.lock().unwrap().push(todos.len());
        }));

        add(&mut store, "a");
        add(&mut store, "b");

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let mut store = TodoStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let id = store.subscribe(Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        add(&mut store, "a");
        assert!(store.unsubscribe(id));
        add(&mut store, "b");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!store.unsubscribe(id));
    }
}
