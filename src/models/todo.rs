//! The to-do item model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item.
///
/// Items live in the [`TodoStore`](crate::store::TodoStore) and are only
/// mutated through dispatched intents. The `id` is assigned at creation and
/// never changes; list position is insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    /// Stable unique identifier
    pub id: Uuid,
    /// Human-readable text; only replaced by recreating the item
    pub title: String,
    /// Completion flag, toggled in place
    pub done: bool,
    /// When the item was created
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Create a new undone item with a fresh id.
    ///
    /// The title is taken as-is; empty titles are allowed.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            done: false,
            created_at: Utc::now(),
        }
    }
}
