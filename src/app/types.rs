//! Type definitions for the application state.

/// Represents which UI component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The pending-title input field
    #[default]
    Input,
    /// The item list
    List,
}
