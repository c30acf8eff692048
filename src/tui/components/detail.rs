//! # Detail Component
//!
//! Overlay for the currently open game. The viewport mode decides the
//! shape: a centered modal on desktop widths, a bottom sheet on mobile
//! widths. The mode is a prop computed by the classifier — this component
//! never inspects the terminal itself.
//!
//! Launching is a placeholder: there is no game runtime behind the view.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::catalog::GameRecord;
use crate::core::viewport::ViewportMode;
use crate::tui::components::format_plays;
use crate::tui::ui::Palette;

/// Transient render wrapper for the detail overlay.
pub struct Detail<'a> {
    pub game: &'a GameRecord,
    pub viewport: ViewportMode,
    pub palette: Palette,
}

impl<'a> Detail<'a> {
    pub fn new(game: &'a GameRecord, viewport: ViewportMode, palette: Palette) -> Self {
        Self {
            game,
            viewport,
            palette,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let body = self.body();

        let overlay = match self.viewport {
            ViewportMode::Desktop => centered_rect(60, 60, area),
            ViewportMode::Mobile => bottom_sheet(&body, area),
        };

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border))
            .title(" Game ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Esc Close ").centered())
            .padding(Padding::horizontal(1));

        frame.render_widget(body.block(block), overlay);
    }

    fn body(&self) -> Paragraph<'static> {
        let game = self.game;
        let mut lines = vec![Line::from(Span::styled(
            game.title.clone(),
            Style::default()
                .fg(self.palette.text)
                .add_modifier(Modifier::BOLD),
        ))];

        if !game.badges.is_empty() {
            lines.push(Line::from(Span::styled(
                game.badges.join(" · "),
                Style::default().fg(self.palette.accent),
            )));
        }

        lines.push(Line::from(Span::styled(
            format!(
                "{} • {} • ★ {:.1} • {} plays",
                game.category.label(),
                game.difficulty.label(),
                game.rating,
                format_plays(game.plays)
            ),
            Style::default().fg(self.palette.dim),
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            game.description.clone(),
            Style::default().fg(self.palette.text),
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Coming soon — this is a placeholder. Hook a game canvas or route here.",
            Style::default().fg(self.palette.dim),
        )));

        Paragraph::new(lines).wrap(Wrap { trim: false })
    }
}

/// Compute a centered rect using percentages of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

/// Anchor a full-width sheet to the bottom edge, sized to the content
/// (borders included) but never more than 60% of the viewport.
fn bottom_sheet(body: &Paragraph<'_>, outer: Rect) -> Rect {
    let inner_width = outer.width.saturating_sub(4); // borders + padding
    let content_height = body.line_count(inner_width) as u16 + 2;
    let max_height = (outer.height * 3 / 5).max(6);
    let height = content_height.clamp(6, max_height).min(outer.height);

    Rect {
        x: outer.x,
        y: outer.y + outer.height - height,
        width: outer.width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Theme;
    use crate::test_support::sample_catalog;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn draw(viewport: ViewportMode, width: u16, height: u16) -> Buffer {
        let catalog = sample_catalog();
        let game = catalog.get("g1").unwrap();
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut detail =
                    Detail::new(game, viewport, Palette::for_theme(Theme::Dark));
                let area = f.area();
                detail.render(f, area);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        let width = buffer.area.width as usize;
        buffer.content()[y as usize * width..(y as usize + 1) * width]
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_desktop_modal_is_centered() {
        let buffer = draw(ViewportMode::Desktop, 100, 30);
        // Top rows stay untouched; the modal floats in the middle.
        assert!(row_text(&buffer, 0).trim().is_empty());
        assert!(row_text(&buffer, 29).trim().is_empty());
        let all: String = (0..30).map(|y| row_text(&buffer, y)).collect();
        assert!(all.contains("Neon Runner"));
    }

    #[test]
    fn test_mobile_sheet_sticks_to_bottom() {
        let buffer = draw(ViewportMode::Mobile, 60, 24);
        // The bottom row belongs to the sheet border, the top row does not.
        assert!(!row_text(&buffer, 23).trim().is_empty());
        assert!(row_text(&buffer, 0).trim().is_empty());
        let all: String = (0..24).map(|y| row_text(&buffer, y)).collect();
        assert!(all.contains("Neon Runner"));
        assert!(all.contains("Esc Close"));
    }

    #[test]
    fn test_sheet_spans_full_width() {
        let buffer = draw(ViewportMode::Mobile, 60, 24);
        let bottom = row_text(&buffer, 23);
        // Border corners at both edges.
        assert!(!bottom.starts_with(' '));
        assert!(!bottom.ends_with(' '));
    }
}
