//! # Rail Tabs Component
//!
//! The three rail tabs (Featured / Trending / New) plus a horizontal card
//! row for the active rail. Stateless: the active kind and the already-
//! selected items arrive as props; Tab-key cycling lives in the event
//! loop via `RailKind::next`.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::core::catalog::GameRecord;
use crate::core::rail::RailKind;
use crate::tui::components::{format_plays, truncate_str};
use crate::tui::ui::Palette;

/// Width of one rail card in columns.
const RAIL_CARD_WIDTH: u16 = 30;

/// Transient render wrapper: built each frame from the active rail.
pub struct RailTabs<'a> {
    pub active: RailKind,
    pub items: &'a [&'a GameRecord],
    pub palette: Palette,
}

impl<'a> RailTabs<'a> {
    pub fn new(active: RailKind, items: &'a [&'a GameRecord], palette: Palette) -> Self {
        Self {
            active,
            items,
            palette,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [tabs_area, cards_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        self.render_tabs(frame, tabs_area);
        self.render_cards(frame, cards_area);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for kind in RailKind::ALL {
            let style = if kind == self.active {
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(self.palette.dim)
            };
            spans.push(Span::styled(format!(" {} ", kind.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            "(Tab to switch)",
            Style::default().fg(self.palette.dim),
        ));
        frame.render_widget(Line::from(spans), area);
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect) {
        if self.items.is_empty() {
            let empty = Paragraph::new("Nothing to show here.")
                .style(Style::default().fg(self.palette.dim));
            frame.render_widget(empty, area);
            return;
        }

        // As many fixed-width cards as fit; the rail is already bounded
        // by the configured limit.
        let fitting = (area.width / RAIL_CARD_WIDTH).max(1) as usize;
        let shown = self.items.len().min(fitting);
        let constraints: Vec<Constraint> = (0..shown)
            .map(|_| Constraint::Length(RAIL_CARD_WIDTH))
            .collect();
        let slots = Layout::horizontal(constraints).split(area);

        for (game, slot) in self.items.iter().zip(slots.iter()) {
            self.render_card(frame, *slot, game);
        }
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, game: &GameRecord) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let title = truncate_str(&game.title, inner_width);

        let block = Block::bordered()
            .title(Span::styled(
                format!(" {title} "),
                Style::default()
                    .fg(self.palette.text)
                    .add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(self.palette.border));

        let meta = format!(
            "{} • {}",
            game.category.label(),
            game.difficulty.label()
        );
        let badges = game.badges.join(" · ");
        let stats = format!(
            "★ {:.1}  {} plays",
            game.rating,
            format_plays(game.plays)
        );

        let lines = vec![
            Line::from(Span::styled(
                truncate_str(&meta, inner_width),
                Style::default().fg(self.palette.dim),
            )),
            Line::from(Span::styled(
                truncate_str(&badges, inner_width),
                Style::default().fg(self.palette.accent),
            )),
            Line::from(Span::styled(
                truncate_str(&stats, inner_width),
                Style::default().fg(self.palette.text),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Theme;
    use crate::core::filter::{filter, CategoryFilter};
    use crate::core::rail::{select_rail, DEFAULT_RAIL_LIMIT};
    use crate::test_support::sample_catalog;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_text(active: RailKind, width: u16) -> String {
        let catalog = sample_catalog();
        let filtered = filter(catalog.games(), "", CategoryFilter::All);
        let items = select_rail(&filtered, active, DEFAULT_RAIL_LIMIT);
        let backend = TestBackend::new(width, 7);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut tabs = RailTabs::new(active, &items, Palette::for_theme(Theme::Dark));
                let area = f.area();
                tabs.render(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_tabs_line_shows_all_kinds() {
        let text = render_to_text(RailKind::Featured, 130);
        assert!(text.contains("Featured"));
        assert!(text.contains("Trending"));
        assert!(text.contains("New"));
    }

    #[test]
    fn test_featured_cards_show_first_games() {
        let text = render_to_text(RailKind::Featured, 130);
        assert!(text.contains("Neon Runner"));
        assert!(text.contains("12,840 plays"));
    }

    #[test]
    fn test_trending_leads_with_most_played() {
        let text = render_to_text(RailKind::Trending, 130);
        let tactics = text.find("Starforge Tactics").unwrap();
        let runner = text.find("Neon Runner").unwrap();
        assert!(tactics < runner);
    }

    #[test]
    fn test_empty_rail_renders_placeholder() {
        let backend = TestBackend::new(60, 7);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut tabs =
                    RailTabs::new(RailKind::New, &[], Palette::for_theme(Theme::Dark));
                let area = f.area();
                tabs.render(f, area);
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Nothing to show here."));
    }
}
