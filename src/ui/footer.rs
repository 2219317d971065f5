//! Footer: remaining-item count, filter controls, clear-completed, hints.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use crate::domain::Filter;
use crate::ui::components::{render_tab_selector, TabItem};
use crate::ui::theme::COLOR_DIM;

/// Label on the clear-completed control.
pub const CLEAR_COMPLETED_LABEL: &str = "Clear completed (x)";

/// Remaining-count text with singular/plural noun agreement.
///
/// Exactly 1 undone item reads "1 item left"; anything else uses "items".
pub fn items_left_text(undone: usize) -> String {
    let noun = if undone == 1 { "item" } else { "items" };
    format!("{} {} left", undone, noun)
}

/// Context-aware keybinding hint for the current focus.
pub fn footer_hint(focus: Focus) -> &'static str {
    match focus {
        Focus::Input => "enter add · tab list · ctrl-c quit",
        Focus::List => "space toggle · d delete · 1/2/3 filter · x clear · tab input · q quit",
    }
}

/// Render the footer into `area` (expects a height of 2).
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Min(10),
            Constraint::Length(CLEAR_COMPLETED_LABEL.len() as u16 + 1),
        ])
        .split(rows[0]);

    let counts = Paragraph::new(items_left_text(app.undone_count()));
    frame.render_widget(counts, columns[0]);

    let tabs: Vec<TabItem> = Filter::ALL
        .iter()
        .map(|f| TabItem::new(f.label(), f.label()))
        .collect();
    let selected = Filter::ALL
        .iter()
        .position(|f| *f == app.view.filter)
        .unwrap_or(0);
    let tab_line = Paragraph::new(render_tab_selector(&tabs, selected)).alignment(Alignment::Center);
    frame.render_widget(tab_line, columns[1]);

    // The clear control only exists while something is done.
    if app.done_count() > 0 {
        let clear = Paragraph::new(Line::from(Span::styled(
            CLEAR_COMPLETED_LABEL,
            Style::default().fg(COLOR_DIM),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(clear, columns[2]);
    }

    let hint = Paragraph::new(Line::from(Span::styled(
        footer_hint(app.focus),
        Style::default().fg(COLOR_DIM),
    )));
    frame.render_widget(hint, rows[1]);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_left_singular() {
        assert_eq!(items_left_text(1), "1 item left");
    }

    #[test]
    fn test_items_left_plural() {
        assert_eq!(items_left_text(0), "0 items left");
        assert_eq!(items_left_text(2), "2 items left");
        assert_eq!(items_left_text(42), "42 items left");
    }

    #[test]
    fn test_footer_hint_input_focus() {
        assert!(footer_hint(Focus::Input).contains("enter add"));
    }

    #[test]
    fn test_footer_hint_list_focus() {
        let hint = footer_hint(Focus::List);
        assert!(hint.contains("space toggle"));
        assert!(hint.contains("1/2/3 filter"));
    }
}
