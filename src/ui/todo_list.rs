//! The to-do list component: input field, item list, footer.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, Focus};
use crate::models::TodoItem;
use crate::ui::components::{render_input_field, InputFieldConfig};
use crate::ui::footer;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_DONE};

/// Placeholder shown in the empty input field.
pub const INPUT_PLACEHOLDER: &str = "What needs to be done?";

/// Columns consumed by the row marker and the checkbox prefix.
const ROW_PREFIX_WIDTH: usize = 6;

/// Render the whole component into `area`.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(area);

    let input_config = InputFieldConfig::new(app.view.input.value(), app.view.input.cursor())
        .focused(app.focus == Focus::Input)
        .placeholder(INPUT_PLACEHOLDER);
    render_input_field(frame, chunks[0], &input_config);

    render_items(frame, chunks[1], app);

    footer::render(frame, chunks[2], app);
}

fn render_items(frame: &mut Frame, area: Rect, app: &App) {
    let visible = app.visible_todos();
    let height = area.height as usize;
    let offset = scroll_offset(app.view.selected, visible.len(), height);
    let list_focused = app.focus == Focus::List;

    let lines: Vec<Line> = visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(idx, todo)| {
            todo_line(
                todo,
                list_focused && idx == app.view.selected,
                area.width as usize,
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Build the display line for one item.
fn todo_line(todo: &TodoItem, selected: bool, width: usize) -> Line<'static> {
    let marker = if selected {
        Span::styled(
            "▶ ".to_string(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("  ".to_string())
    };

    let checkbox = if todo.done {
        Span::styled("[x] ".to_string(), Style::default().fg(COLOR_DONE))
    } else {
        Span::styled("[ ] ".to_string(), Style::default().fg(COLOR_DIM))
    };

    let mut title_style = if todo.done {
        Style::default()
            .fg(COLOR_DIM)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(Color::White)
    };
    if selected {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let title = truncate_to_width(&todo.title, width.saturating_sub(ROW_PREFIX_WIDTH));

    Line::from(vec![marker, checkbox, Span::styled(title, title_style)])
}

/// First visible row so the cursor stays inside the viewport.
fn scroll_offset(selected: usize, len: usize, height: usize) -> usize {
    if height == 0 || len <= height {
        return 0;
    }
    let max_offset = len - height;
    selected.saturating_sub(height - 1).min(max_offset)
}

/// Truncate to a display width, ending in an ellipsis when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

// ============================================================================
// Tests
// ============================================================================
