//! # Game Grid Component
//!
//! Scrollable card list of every game that passed the filter. Follows the
//! persistent state + transient wrapper pattern:
//! - `GameGridState` (selection, scroll offset) lives in `TuiState`
//! - `GameGrid` is created each frame with the freshly filtered items
//!
//! Cards have a uniform height, which keeps selection-to-pixel math and
//! scroll clamping trivial. An empty filter result renders a message, not
//! an error.

use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::GameRecord;
use crate::tui::components::{format_plays, truncate_str};
use crate::tui::event::TuiEvent;
use crate::tui::ui::Palette;

/// Height of one card in rows, borders included.
pub const CARD_HEIGHT: u16 = 5;

/// Persistent grid state.
pub struct GameGridState {
    /// Index into the filtered list, `None` when nothing is highlighted.
    pub selected: Option<usize>,
    pub scroll_state: ScrollViewState,
    /// Viewport height cached from the last render, for scroll-to-selected.
    viewport_height: u16,
}

impl GameGridState {
    pub fn new() -> Self {
        Self {
            selected: None,
            scroll_state: ScrollViewState::default(),
            viewport_height: 0,
        }
    }

    /// Move the highlight up one card.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
        self.scroll_to_selected();
    }

    /// Move the highlight down one card.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
        self.scroll_to_selected();
    }

    /// Keep the highlight valid after the filtered list changed size.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = match (self.selected, len) {
            (_, 0) => None,
            (Some(idx), _) => Some(idx.min(len - 1)),
            (None, _) => None,
        };
    }

    /// Scroll so the selected card is fully visible.
    fn scroll_to_selected(&mut self) {
        let Some(idx) = self.selected else { return };
        let item_top = idx as u16 * CARD_HEIGHT;
        let item_bottom = item_top + CARD_HEIGHT;
        let offset_y = self.scroll_state.offset().y;

        if item_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: item_top });
        } else if self.viewport_height > 0 && item_bottom > offset_y + self.viewport_height {
            self.scroll_state.set_offset(Position {
                x: 0,
                y: item_bottom - self.viewport_height,
            });
        }
    }

    /// Clamp the scroll offset so it never exceeds the content bounds.
    fn clamp_scroll(&mut self, content_height: u16, viewport_height: u16) {
        let max_offset = content_height.saturating_sub(viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_offset {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_offset,
            });
        }
    }

    /// Mouse-wheel scrolling; selection is untouched.
    pub fn handle_event(&mut self, event: &TuiEvent) {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            _ => {}
        }
    }
}

/// Transient render wrapper over the filtered items.
pub struct GameGrid<'a> {
    state: &'a mut GameGridState,
    games: &'a [&'a GameRecord],
    palette: Palette,
}

impl<'a> GameGrid<'a> {
    pub fn new(
        state: &'a mut GameGridState,
        games: &'a [&'a GameRecord],
        palette: Palette,
    ) -> Self {
        Self {
            state,
            games,
            palette,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.viewport_height = area.height;

        if self.games.is_empty() {
            let empty = Paragraph::new("No games match your search.")
                .style(Style::default().fg(self.palette.dim))
                .centered();
            frame.render_widget(empty, area);
            return;
        }

        // Reserve a column for the scrollbar.
        let content_width = area.width.saturating_sub(1);
        let content_height = self.games.len() as u16 * CARD_HEIGHT;
        self.state.clamp_scroll(content_height, area.height);

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (idx, game) in self.games.iter().enumerate() {
            let card_rect = Rect::new(0, idx as u16 * CARD_HEIGHT, content_width, CARD_HEIGHT);
            let is_selected = self.state.selected == Some(idx);
            scroll_view.render_widget(self.card(game, card_rect.width, is_selected), card_rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }

    fn card(&self, game: &GameRecord, width: u16, is_selected: bool) -> Paragraph<'static> {
        let inner_width = width.saturating_sub(2) as usize;

        let (border_style, title_style) = if is_selected {
            (
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
        } else {
            (
                Style::default().fg(self.palette.border),
                Style::default()
                    .fg(self.palette.text)
                    .add_modifier(Modifier::BOLD),
            )
        };

        let block = Block::bordered()
            .title(Span::styled(format!(" {} ", game.title), title_style))
            .border_style(border_style);

        let meta = format!(
            "{} • {} • ★ {:.1} • {} plays",
            game.category.label(),
            game.difficulty.label(),
            game.rating,
            format_plays(game.plays)
        );
        let badges = if game.badges.is_empty() {
            String::new()
        } else {
            game.badges.join(" · ")
        };

        let lines = vec![
            Line::from(Span::styled(
                truncate_str(&meta, inner_width),
                Style::default().fg(self.palette.dim),
            )),
            Line::from(Span::styled(
                truncate_str(&game.description, inner_width),
                Style::default().fg(self.palette.text),
            )),
            Line::from(Span::styled(
                truncate_str(&badges, inner_width),
                Style::default().fg(self.palette.accent),
            )),
        ];

        Paragraph::new(lines).block(block)
    }
}
