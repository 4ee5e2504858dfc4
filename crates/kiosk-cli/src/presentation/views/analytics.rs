//! Analytics panel view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::AnalyticsViewModel;

pub struct AnalyticsPanelView<'a> {
    model: &'a AnalyticsViewModel,
}

impl<'a> AnalyticsPanelView<'a> {
    pub fn new(model: &'a AnalyticsViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for AnalyticsPanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title("Analytics").borders(Borders::ALL);

        let paragraph = match self.model {
            AnalyticsViewModel::Loading => Paragraph::new(Span::styled(
                "Loading analytics...",
                Style::default().add_modifier(Modifier::DIM),
            )),
            AnalyticsViewModel::Ready { lines } => {
                Paragraph::new(lines.iter().map(|l| Line::raw(l.as_str())).collect::<Vec<_>>())
            }
            AnalyticsViewModel::Unavailable { message } => Paragraph::new(Span::styled(
                format!("Analytics unavailable: {}", message),
                Style::default().fg(Color::Yellow),
            )),
        };

        paragraph.block(block).render(area, buf);
    }
}
