//! Pure domain logic with no UI or store dependencies.

mod filter;

pub use filter::{count_by_status, filter_todos, Filter};
