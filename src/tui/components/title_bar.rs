//! # TitleBar Component
//!
//! Top status line: app name, result count, and the transient status
//! message. Stateless — all three values arrive as props, so the bar
//! renders identically wherever they came from.

use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::Frame;

use crate::tui::component::Component;

pub struct TitleBar {
    pub result_count: usize,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(result_count: usize, status_message: String) -> Self {
        Self {
            result_count,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let plural = if self.result_count == 1 { "" } else { "s" };
        let title_text = if self.status_message.is_empty() {
            format!("Marquee ({} result{plural})", self.result_count)
        } else {
            format!(
                "Marquee ({} result{plural}) | {}",
                self.result_count, self.status_message
            )
        };
        frame.render_widget(Span::raw(title_text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                title_bar.render(f, area);
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
    fn test_title_bar_with_status() {
        let mut bar = TitleBar::new(6, "Type to search".to_string());
        let text = render_to_text(&mut bar);
        assert!(text.contains("Marquee (6 results)"));
        assert!(text.contains("Type to search"));
    }

    #[test]
    fn test_title_bar_singular_result() {
        let mut bar = TitleBar::new(1, String::new());
        let text = render_to_text(&mut bar);
        assert!(text.contains("(1 result)"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_title_bar_zero_results() {
        let mut bar = TitleBar::new(0, String::new());
        let text = render_to_text(&mut bar);
        assert!(text.contains("(0 results)"));
    }
}
