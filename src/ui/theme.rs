//! Color theme constants for the to-do list UI.
//!
//! Minimal dark palette.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and the selection marker
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Checkbox mark for done items - green
pub const COLOR_DONE: Color = Color::Rgb(4, 181, 117);

/// Background for the input field
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);
