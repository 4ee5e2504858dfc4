//! Booking form view: date picker, ticket quantity rows, show picker.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::FormViewModel;

/// Which form row has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Date,
    Ticket(usize),
    Show,
}

pub struct FormView<'a> {
    model: &'a FormViewModel,
    focus: FormFocus,
}

impl<'a> FormView<'a> {
    pub fn new(model: &'a FormViewModel, focus: FormFocus) -> Self {
        Self { model, focus }
    }

    /// Rows this form renders, for layout sizing (borders excluded)
    pub fn line_count(model: &FormViewModel) -> u16 {
        (model.ticket_rows.len() as u16) + 2
    }

    fn row_line(&self, label: &str, value: String, focused: bool) -> Line<'a> {
        let marker = if focused { "> " } else { "  " };
        let value_style = if focused {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::raw(marker.to_string()),
            Span::styled(
                format!("{} ", label),
                Style::default().add_modifier(Modifier::DIM),
            ),
            Span::styled(value, value_style),
        ])
    }
}

impl<'a> Widget for FormView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title("Booking Form").borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();

        lines.push(self.row_line(
            "Select Date:",
            self.model.date_display.clone(),
            self.focus == FormFocus::Date,
        ));

        for (index, row) in self.model.ticket_rows.iter().enumerate() {
            lines.push(self.row_line(
                &row.label,
                row.quantity.to_string(),
                self.focus == FormFocus::Ticket(index),
            ));
        }

        lines.push(self.row_line(
            "Select Show (Optional):",
            self.model.show_display.clone(),
            self.focus == FormFocus::Show,
        ));

        Paragraph::new(lines).render(inner, buf);
    }
}
