//! Color assignments for the terminal UI. One slate-flavored palette.

use ratatui::style::Color;

/// Colors used by the renderer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Theme {
    pub border: Color,
    pub title: Color,
    pub header: Color,
    pub muted: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::DarkGray,
            title: Color::Magenta,
            header: Color::Cyan,
            muted: Color::DarkGray,
            error: Color::Red,
        }
    }
}
