//! # Category Strip Component
//!
//! One-line toggle strip: "All" plus the six known categories, with the
//! active filter rendered as a highlighted pill. Stateless — the selected
//! value is a prop; ←/→ cycling is handled by the event loop through
//! `CategoryFilter::next`/`prev`.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::core::filter::CategoryFilter;
use crate::tui::component::Component;
use crate::tui::ui::Palette;

pub struct CategoryStrip {
    pub selected: CategoryFilter,
    pub palette: Palette,
}

impl CategoryStrip {
    pub fn new(selected: CategoryFilter, palette: Palette) -> Self {
        Self { selected, palette }
    }
}

impl Component for CategoryStrip {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for filter in CategoryFilter::all() {
            let style = if filter == self.selected {
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(self.palette.dim)
            };
            spans.push(Span::styled(format!(" {} ", filter.label()), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
