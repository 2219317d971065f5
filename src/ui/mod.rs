//! UI rendering for the to-do list.
//!
//! Rendering is a pure function of the app state: the event loop calls
//! [`render`] whenever the app is marked dirty, and nothing in this module
//! mutates state.

pub mod components;
pub mod footer;
pub mod page;
pub mod theme;
pub mod todo_list;

use ratatui::Frame;

use crate::app::App;

/// Render the UI.
pub fn render(frame: &mut Frame, app: &App) {
    page::render(frame, app);
}
