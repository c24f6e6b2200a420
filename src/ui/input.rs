//! Single-line username input backed by `tui-textarea`.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Text input widget for the username filter.
pub(crate) struct SearchInput<'a> {
    textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
    pub(crate) fn new(initial: String) -> Self {
        let mut textarea = TextArea::new(vec![initial]);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("GitHub Username");
        textarea.move_cursor(CursorMove::End);
        Self { textarea }
    }

    /// Feed a key event into the textarea. Returns whether the text changed.
    pub(crate) fn input(&mut self, key: KeyEvent) -> bool {
        // Single-line input: swallow Enter instead of inserting a newline.
        if key.code == KeyCode::Enter {
            return false;
        }
        self.textarea.input(key)
    }

    /// The current keyword.
    pub(crate) fn text(&self) -> &str {
        self.textarea.lines().first().map_or("", String::as_str)
    }

    pub(crate) fn widget(&self) -> &TextArea<'a> {
        &self.textarea
    }
}
