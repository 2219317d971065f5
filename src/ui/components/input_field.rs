//! Input Field Component
//!
//! A single-line text input with focus handling, placeholder text, and a
//! block cursor that tracks the edit position. Rounded borders.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Current value of the input
    pub value: &'a str,
    /// Cursor position as a character index into `value`
    pub cursor: usize,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(value: &'a str, cursor: usize) -> Self {
        Self {
            value,
            cursor,
            focused: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Render the input field into `area` (expects a height of 3: border,
/// content, border).
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) {
    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let line = if config.value.is_empty() {
        placeholder_line(config)
    } else {
        value_line(config)
    };

    let input = Paragraph::new(line).block(block);
    frame.render_widget(input, area);
}

fn placeholder_line(config: &InputFieldConfig) -> Line<'static> {
    let mut spans = Vec::new();
    if config.focused {
        spans.push(Span::styled(
            " ".to_string(),
            Style::default().add_modifier(Modifier::REVERSED),
        ));
    }
    if let Some(placeholder) = config.placeholder {
        spans.push(Span::styled(
            placeholder.to_string(),
            Style::default().fg(COLOR_DIM),
        ));
    }
    Line::from(spans)
}

fn value_line(config: &InputFieldConfig) -> Line<'static> {
    let text_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    if !config.focused {
        return Line::from(Span::styled(config.value.to_string(), text_style));
    }

    // Split the value around the cursor so the character under it can be
    // rendered reversed; at end-of-line the cursor is a reversed space.
    let chars: Vec<char> = config.value.chars().collect();
    let cursor = config.cursor.min(chars.len());
    let before: String = chars[..cursor].iter().collect();
    let under: String = chars.get(cursor).map(|c| c.to_string()).unwrap_or_else(|| " ".to_string());
    let after: String = if cursor < chars.len() {
        chars[cursor + 1..].iter().collect()
    } else {
        String::new()
    };

    Line::from(vec![
        Span::styled(before, text_style),
        Span::styled(under, text_style.add_modifier(Modifier::REVERSED)),
        Span::styled(after, text_style),
    ])
}

// ============================================================================
// Tests
// ============================================================================
