//! Full-frame layout: title bar, search + category strip, rail section,
//! all-games grid, help bar, and the detail overlay on top. The viewport
//! mode picks the arrangement — search and category strip sit side by
//! side on desktop widths and stack on mobile ones — and decides whether
//! the detail view is a modal or a bottom sheet.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::core::config::Theme;
use crate::core::state::App;
use crate::core::viewport::ViewportMode;
use crate::tui::component::Component;
use crate::tui::components::{CategoryStrip, Detail, GameGrid, RailTabs, TitleBar};
use crate::tui::{InputMode, TuiState};

/// Theme-derived colors, threaded into every component as a prop.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                text: Color::White,
                dim: Color::DarkGray,
                accent: Color::Magenta,
                border: Color::DarkGray,
            },
            Theme::Light => Self {
                text: Color::Black,
                dim: Color::Gray,
                accent: Color::Blue,
                border: Color::Gray,
            },
        }
    }
}

/// Rows taken by the rail tabs line plus its card row.
const RAIL_SECTION_HEIGHT: u16 = 6;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let palette = Palette::for_theme(app.theme);
    let filtered = app.filtered();
    let rail_items = app.rail_items();

    use Constraint::{Length, Min};
    let (title_area, search_area, strip_area, rail_area, header_area, grid_area, help_area) =
        match app.viewport {
            ViewportMode::Desktop => {
                let [title, controls, rail, header, grid, help] = Layout::vertical([
                    Length(1),
                    Length(3),
                    Length(RAIL_SECTION_HEIGHT),
                    Length(1),
                    Min(0),
                    Length(1),
                ])
                .areas(frame.area());
                let [search, strip] =
                    Layout::horizontal([Length(40), Min(0)]).areas(controls);
                // Vertically center the one-line strip beside the bordered input.
                let strip = Rect {
                    y: strip.y + 1,
                    height: 1,
                    ..strip
                };
                (title, search, strip, rail, header, grid, help)
            }
            ViewportMode::Mobile => {
                let [title, search, strip, rail, header, grid, help] = Layout::vertical([
                    Length(1),
                    Length(3),
                    Length(1),
                    Length(RAIL_SECTION_HEIGHT),
                    Length(1),
                    Min(0),
                    Length(1),
                ])
                .areas(frame.area());
                (title, search, strip, rail, header, grid, help)
            }
        };

    TitleBar::new(filtered.len(), app.status_message.clone()).render(frame, title_area);
    tui.search.render(frame, search_area, palette);
    CategoryStrip::new(app.category, palette).render(frame, strip_area);
    RailTabs::new(app.rail, &rail_items, palette).render(frame, rail_area);

    let header = Paragraph::new(Span::styled(
        "All Games",
        Style::default().fg(palette.text),
    ));
    frame.render_widget(header, header_area);

    GameGrid::new(&mut tui.grid, &filtered, palette).render(frame, grid_area);

    draw_help_bar(frame, help_area, tui.input_mode, palette);

    // Detail overlay last, on top of everything. The selection resolves
    // through the live catalog; a stale id simply renders nothing.
    if let Some(game) = app.active_game() {
        let overlay_area = frame.area();
        Detail::new(game, app.viewport, palette).render(frame, overlay_area);
    }
}

fn draw_help_bar(frame: &mut Frame, area: Rect, mode: InputMode, palette: Palette) {
    let help = match mode {
        InputMode::Search => "Esc Browse  Tab Rail  ^T Theme  ^C Quit",
        InputMode::Browse => {
            "↑↓ Select  ←→ Category  Tab Rail  Enter Open  ^T Theme  ^C Quit"
        }
    };
    let paragraph = Paragraph::new(Span::styled(help, Style::default().fg(palette.dim)))
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{update, Action};
    use crate::test_support::test_app;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw_to_text(app: &App, tui: &mut TuiState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_mobile_layout() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui, 80, 40);
        assert!(text.contains("Marquee (6 results)"));
        assert!(text.contains("Featured"));
        assert!(text.contains("All Games"));
        assert!(text.contains("Neon Runner"));
    }

    #[test]
    fn test_draw_ui_desktop_layout() {
        let mut app = test_app();
        update(&mut app, Action::ViewportResized(1280));
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui, 160, 45);
        assert!(text.contains("Marquee (6 results)"));
        assert!(text.contains("Starforge Tactics"));
    }

    #[test]
    fn test_draw_ui_with_detail_open() {
        let mut app = test_app();
        update(&mut app, Action::OpenItem("g2".to_string()));
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui, 80, 40);
        assert!(text.contains("Esc Close"));
        assert!(text.contains("Coming soon"));
    }

    #[test]
    fn test_draw_ui_empty_results() {
        let mut app = test_app();
        update(&mut app, Action::QueryChanged("zzz".to_string()));
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui, 80, 40);
        assert!(text.contains("Marquee (0 results)"));
        assert!(text.contains("No games match your search."));
    }
}
