//! Tab Selector Component
//!
//! A horizontal selector with a `▶` marker for the selected item. Used for
//! the filter controls; all items stay visible, only the marker moves.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Unique identifier for the tab
    pub id: &'a str,
    /// Label displayed for the tab
    pub label: &'a str,
}

impl<'a> TabItem<'a> {
    pub fn new(id: &'a str, label: &'a str) -> Self {
        Self { id, label }
    }
}

/// Render a horizontal tab selector as a single line.
///
/// The selected item carries a bold `▶` marker; the rest are dimmed.
pub fn render_tab_selector<'a>(items: &[TabItem<'a>], selected: usize) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    for (idx, item) in items.iter().enumerate() {
        if idx == selected {
            spans.push(Span::styled(
                "▶ ".to_string(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                item.label.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled("  ".to_string(), Style::default().fg(COLOR_DIM)));
            spans.push(Span::styled(
                item.label.to_string(),
                Style::default().fg(COLOR_DIM),
            ));
        }

        if idx < items.len() - 1 {
            spans.push(Span::raw("  ".to_string()));
        }
    }

    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_items() -> Vec<TabItem<'static>> {
        vec![
            TabItem::new("all", "All"),
            TabItem::new("active", "Active"),
            TabItem::new("completed", "Completed"),
        ]
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_all_labels_always_visible() {
        let items = create_test_items();
        let line = render_tab_selector(&items, 0);
        let text = line_text(&line);
        assert!(text.contains("All"));
        assert!(text.contains("Active"));
        assert!(text.contains("Completed"));
    }

    #[test]
    fn test_marker_on_first_item() {
        let items = create_test_items();
        let line = render_tab_selector(&items, 0);
        let text = line_text(&line);
        let marker = text.find('▶').unwrap();
        assert!(marker < text.find("All").unwrap());
    }

    #[test]
    fn test_marker_moves_with_selection() {
        let items = create_test_items();
        let line = render_tab_selector(&items, 2);
        let text = line_text(&line);
        let marker = text.find('▶').unwrap();
        assert!(marker > text.find("Active").unwrap());
        assert!(marker < text.find("Completed").unwrap());
    }

    #[test]
    fn test_exactly_one_marker() {
        let items = create_test_items();
        for selected in 0..items.len() {
            let line = render_tab_selector(&items, selected);
            let text = line_text(&line);
            assert_eq!(text.matches('▶').count(), 1);
        }
    }
}
