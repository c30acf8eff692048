//! # Search Bar Component
//!
//! Single-line query input. The buffer is internal state; every edit emits
//! [`SearchEvent::QueryChanged`] so the parent can feed the reducer. The
//! cursor is a byte offset into the buffer and always sits on a char
//! boundary.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::ui::Palette;

/// High-level events emitted by the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The query text changed; carries the full new value.
    QueryChanged(String),
}

pub struct SearchBar {
    /// Query text (internal state).
    pub buffer: String,
    /// Cursor as a byte offset into `buffer` (0..=buffer.len()).
    cursor: usize,
    /// Whether the bar currently has keyboard focus (prop).
    pub focused: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            focused: true,
        }
    }

    fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn backspace(&mut self) -> bool {
        let Some(prev) = self.buffer[..self.cursor].chars().next_back() else {
            return false;
        };
        self.cursor -= prev.len_utf8();
        self.buffer.remove(self.cursor);
        true
    }

    fn move_left(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    fn move_right(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    /// Render inside `area` (expects a height-3 bordered row) and place
    /// the terminal cursor when focused.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, palette: Palette) {
        let border_style = if self.focused {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.border)
        };
        let block = Block::bordered().title(" Search ").border_style(border_style);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(Span::styled(
                "Search games",
                Style::default().fg(palette.dim).add_modifier(Modifier::ITALIC),
            ))
        } else {
            Paragraph::new(Span::styled(
                self.buffer.as_str(),
                Style::default().fg(palette.text),
            ))
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            // Position after the border, offset by the display width of
            // the text left of the cursor.
            let prefix_width = self.buffer[..self.cursor].width() as u16;
            let x = (area.x + 1 + prefix_width).min(area.x + area.width.saturating_sub(2));
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.insert(*c);
                Some(SearchEvent::QueryChanged(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                if self.backspace() {
                    Some(SearchEvent::QueryChanged(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::Paste(data) => {
                // Queries are single-line; drop pasted newlines.
                for c in data.chars().filter(|c| *c != '\n' && *c != '\r') {
                    self.insert(c);
                }
                Some(SearchEvent::QueryChanged(self.buffer.clone()))
            }
            TuiEvent::CursorLeft => {
                self.move_left();
                None
            }
            TuiEvent::CursorRight => {
                self.move_right();
                None
            }
            _ => None,
        }
    }
}
