//! Key and paste event handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::domain::Filter;

use super::{App, Focus};

impl App {
    /// Handle a key event, routed by the current focus.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        // Ctrl+C quits from anywhere.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    /// Handle pasted text while the input field is focused.
    pub fn handle_paste(&mut self, text: &str) {
        if self.focus == Focus::Input {
            self.view.input.insert_str(text);
            self.mark_dirty();
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            // The only commit path: Enter submits the pending title.
            KeyCode::Enter => self.submit_pending_title(),
            KeyCode::Tab | KeyCode::Down | KeyCode::Esc => {
                self.focus = Focus::List;
                self.mark_dirty();
            }
            KeyCode::Backspace => {
                self.view.input.backspace();
                self.mark_dirty();
            }
            KeyCode::Delete => {
                self.view.input.delete_char();
                self.mark_dirty();
            }
            KeyCode::Left => {
                self.view.input.move_left();
                self.mark_dirty();
            }
            KeyCode::Right => {
                self.view.input.move_right();
                self.mark_dirty();
            }
            KeyCode::Home => {
                self.view.input.move_home();
                self.mark_dirty();
            }
            KeyCode::End => {
                self.view.input.move_end();
                self.mark_dirty();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.view.input.insert_char(c);
                self.mark_dirty();
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Esc | KeyCode::Char('i') => {
                self.focus = Focus::Input;
                self.mark_dirty();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.view.select_prev();
                self.mark_dirty();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let visible_len = self.visible_todos().len();
                self.view.select_next(visible_len);
                self.mark_dirty();
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => self.remove_selected(),
            KeyCode::Char('x') => self.clear_completed(),
            KeyCode::Char('1') => self.set_filter(Filter::All),
            KeyCode::Char('2') => self.set_filter(Filter::Active),
            KeyCode::Char('3') => self.set_filter(Filter::Completed),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}
