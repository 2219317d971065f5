//! List filtering and counting.
//!
//! The filter is a display-only predicate: it selects the subset of items to
//! show and never touches the underlying collection.

use crate::models::TodoItem;

/// Which subset of the list is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Show every item
    #[default]
    All,
    /// Show items that are not done
    Active,
    /// Show items that are done
    Completed,
}

impl Filter {
    /// All filters in display order.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Parse a filter name; anything unrecognized falls back to `All`.
    pub fn parse(s: &str) -> Filter {
        match s {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    /// Display label for the filter control.
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }
}

/// Count the items whose `done` flag equals `done`.
pub fn count_by_status(done: bool, todos: &[TodoItem]) -> usize {
    todos.iter().filter(|t| t.done == done).count()
}

/// Select the displayed subset for `filter`, preserving relative order.
pub fn filter_todos(filter: Filter, todos: &[TodoItem]) -> Vec<&TodoItem> {
    match filter {
        Filter::All => todos.iter().collect(),
        Filter::Active => todos.iter().filter(|t| !t.done).collect(),
        Filter::Completed => todos.iter().filter(|t| t.done).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TodoItem> {
        let mut a = TodoItem::new("A");
        a.done = false;
        let mut b = TodoItem::new("B");
        b.done = true;
        vec![a, b]
    }

    #[test]
    fn test_parse_known_names() {
        assert_eq!(Filter::parse("all"), Filter::All);
        assert_eq!(Filter::parse("active"), Filter::Active);
        assert_eq!(Filter::parse("completed"), Filter::Completed);
    }

    #[test]
    fn test_parse_unknown_falls_back_to_all() {
        assert_eq!(Filter::parse("bogus"), Filter::All);
        assert_eq!(Filter::parse(""), Filter::All);
        assert_eq!(Filter::parse("Completed"), Filter::All);
    }

    #[test]
    fn test_count_by_status_splits_the_list() {
        let todos = sample();
        assert_eq!(count_by_status(true, &todos), 1);
        assert_eq!(count_by_status(false, &todos), 1);
    }

    #[test]
    fn test_count_by_status_empty_list() {
        assert_eq!(count_by_status(true, &[]), 0);
        assert_eq!(count_by_status(false, &[]), 0);
    }

    #[test]
    fn test_filter_all_is_identity() {
        let todos = sample();
        let shown = filter_todos(Filter::All, &todos);
        assert_eq!(shown.len(), todos.len());
        assert!(shown.iter().zip(todos.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filter_completed_selects_done_items() {
        let todos = sample();
        let shown = filter_todos(Filter::Completed, &todos);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "B");
    }

    #[test]
    fn test_filter_active_selects_undone_items() {
        let todos = sample();
        let shown = filter_todos(Filter::Active, &todos);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "A");
    }
}
