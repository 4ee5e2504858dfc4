//! Error message / booking summary view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::{OutcomeViewModel, PaymentViewModel};

pub struct OutcomeView<'a> {
    model: &'a OutcomeViewModel,
}

impl<'a> OutcomeView<'a> {
    pub fn new(model: &'a OutcomeViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for OutcomeView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.model {
            OutcomeViewModel::None => {
                let block = Block::default().borders(Borders::ALL);
                let hint = Paragraph::new(Span::styled(
                    "Pick a date and quantities, then press Enter to book.",
                    Style::default().add_modifier(Modifier::DIM),
                ))
                .block(block);
                hint.render(area, buf);
            }
            OutcomeViewModel::Error { message } => {
                let error = Paragraph::new(Span::styled(
                    message.as_str(),
                    Style::default().fg(Color::Red),
                ))
                .block(Block::default().title("Error").borders(Borders::ALL));
                error.render(area, buf);
            }
            OutcomeViewModel::Summary(summary) => {
                let mut lines = vec![Line::raw(summary.date_line.as_str())];
                for ticket_line in &summary.ticket_lines {
                    lines.push(Line::raw(ticket_line.as_str()));
                }
                lines.push(Line::from(Span::styled(
                    summary.total_line.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(match &summary.payment {
                    PaymentViewModel::Pending { action } => Line::from(Span::styled(
                        format!("[ {} - press p ]", action),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )),
                    PaymentViewModel::Completed { message } => {
                        Line::from(Span::styled(message.clone(), Style::default().fg(Color::Green)))
                    }
                    PaymentViewModel::Failed { message } => {
                        Line::from(Span::styled(message.clone(), Style::default().fg(Color::Red)))
                    }
                });

                let summary_widget = Paragraph::new(lines).block(
                    Block::default()
                        .title("Booking Summary")
                        .borders(Borders::ALL),
                );
                summary_widget.render(area, buf);
            }
        }
    }
}
