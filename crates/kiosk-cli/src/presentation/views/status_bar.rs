//! Bottom status bar: key hints plus the latest non-fatal notice.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;
use crate::presentation::views::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);

        let line = match &self.model.notice {
            Some(notice) => Line::from(vec![
                Span::styled(
                    notice.clone(),
                    Style::default().fg(status_level_to_color(self.model.level)),
                ),
                Span::raw("  |  "),
                Span::styled(
                    self.model.key_hints.clone(),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]),
            None => Line::from(Span::styled(
                self.model.key_hints.clone(),
                Style::default().add_modifier(Modifier::DIM),
            )),
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}
