//! Crossterm event translation into TUI-level input events.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C — quits regardless of mode.
    ForceQuit,
    Escape,
    Submit,

    InputChar(char),
    Paste(String), // Bracketed paste - newlines are stripped by the search bar
    Backspace,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    ScrollUp,
    ScrollDown,

    /// Tab — cycle the active rail.
    NextRail,
    /// Ctrl+T — toggle the color theme.
    ToggleTheme,
    /// Ctrl+L — reload the catalog file.
    ReloadCatalog,

    /// Terminal resized; carries the new width in columns.
    Resize(u16),
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    let raw = match event::read() {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("Failed to read terminal event: {e}");
            return None;
        }
    };
    translate(raw)
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

fn translate(raw: Event) -> Option<TuiEvent> {
    match raw {
        Event::Key(key_event) => {
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (KeyModifiers::CONTROL, KeyCode::Char('t')) => Some(TuiEvent::ToggleTheme),
                (KeyModifiers::CONTROL, KeyCode::Char('l')) => Some(TuiEvent::ReloadCatalog),
                (_, KeyCode::Tab) => Some(TuiEvent::NextRail),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(columns, _rows) => Some(TuiEvent::Resize(columns)),
        _ => None,
    }
}
