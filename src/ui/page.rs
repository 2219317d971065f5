//! Page wrapper around the to-do list component.
//!
//! The page has no logic of its own: on mount it sets the terminal window
//! title (once, before the first frame), and on every frame it renders a
//! static heading and embeds the list component.

use std::io::{self, Write};

use crossterm::{execute, terminal::SetTitle};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::theme::COLOR_HEADER;
use crate::ui::todo_list;

/// Fixed window title set when the page mounts.
pub const PAGE_TITLE: &str = "Todos";

/// Mount side effect: set the terminal window title.
///
/// Called exactly once, before the first frame is drawn.
pub fn set_terminal_title<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, SetTitle(PAGE_TITLE))
}

/// Render the page: heading on top, the to-do list below.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(frame.area());

    let heading = Paragraph::new(Line::from(Span::styled(
        PAGE_TITLE,
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, chunks[0]);

    todo_list::render(frame, chunks[1], app);
}
