//! TUI renderer for the booking screen.
//!
//! ## Design:
//! - Renderer owns UI state (focus position, quit flag)
//! - Renderer does NOT own data (receives ViewModels via channel)
//! - Keyboard input is translated to `UiSignal`s and sent to the handler;
//!   the handler owns all booking state and sends back fresh screens

use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use crate::presentation::view_models::ScreenViewModel;
use crate::presentation::views::{
    status_level_to_color, AnalyticsPanelView, FormFocus, FormView, OutcomeView, StatusBarView,
};

/// TUI events sent from handler to renderer
pub enum TuiEvent {
    /// Update screen with new ViewModel
    Update(Box<ScreenViewModel>),
    /// Fatal error occurred
    Error(String),
}

/// User intents sent from renderer to handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiSignal {
    /// Move the selected date through the available list
    CycleDate { step: i32 },
    /// Change the quantity for one ticket category
    AdjustQuantity { category: String, delta: i32 },
    /// Move the selected show through the available list (including "none")
    CycleShow { step: i32 },
    Submit,
    Pay,
    ToggleAnalytics,
    DismissNotice,
    Quit,
}

/// TUI renderer application state
pub struct TuiRenderer {
    /// Current screen data (received from handler)
    current_screen: Option<ScreenViewModel>,

    /// UI state: which form row has focus
    focus: FormFocus,

    /// UI state: should quit flag
    should_quit: bool,

    /// Error message to display (if any)
    error_message: Option<String>,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            current_screen: None,
            focus: FormFocus::Date,
            should_quit: false,
            error_message: None,
        }
    }

    /// Main event loop for TUI rendering
    ///
    /// Sets up the terminal in raw mode, receives ViewModel updates over
    /// `rx`, translates keyboard input into signals on `tx`, and restores
    /// the terminal on exit.
    pub fn run(mut self, rx: Receiver<TuiEvent>, tx: Sender<UiSignal>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, rx, &tx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        // Tell the handler we are gone even if the loop failed.
        let _ = tx.send(UiSignal::Quit);

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: Receiver<TuiEvent>,
        tx: &Sender<UiSignal>,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            // Poll with timeout so channel updates still get picked up
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key_event(key, tx);
                }
            }

            if let Ok(tui_event) = rx.try_recv() {
                self.apply_event(tui_event);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn apply_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Update(screen_vm) => {
                self.clamp_focus(&screen_vm);
                self.current_screen = Some(*screen_vm);
                self.error_message = None;
            }
            TuiEvent::Error(msg) => {
                self.error_message = Some(msg);
            }
        }
    }

    /// Keep the focused ticket row valid when the category list changes.
    fn clamp_focus(&mut self, screen: &ScreenViewModel) {
        if let FormFocus::Ticket(index) = self.focus {
            if index >= screen.form.ticket_rows.len() {
                self.focus = FormFocus::Show;
            }
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, tx: &Sender<UiSignal>) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // A modal swallows every key as an acknowledgement.
        if let Some(screen) = &self.current_screen {
            if screen.modal.is_some() {
                let _ = tx.send(UiSignal::DismissNotice);
                return;
            }
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                let _ = tx.send(UiSignal::Quit);
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
            }
            KeyCode::Left | KeyCode::Char('-') => {
                let _ = tx.send(self.adjust_signal(-1));
            }
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                let _ = tx.send(self.adjust_signal(1));
            }
            KeyCode::Enter => {
                let _ = tx.send(UiSignal::Submit);
            }
            KeyCode::Char('p') => {
                let _ = tx.send(UiSignal::Pay);
            }
            KeyCode::Char('a') => {
                let _ = tx.send(UiSignal::ToggleAnalytics);
            }
            _ => {}
        }
    }

    fn ticket_row_count(&self) -> usize {
        self.current_screen
            .as_ref()
            .map(|s| s.form.ticket_rows.len())
            .unwrap_or(0)
    }

    fn focus_next(&mut self) {
        let rows = self.ticket_row_count();
        self.focus = match self.focus {
            FormFocus::Date if rows > 0 => FormFocus::Ticket(0),
            FormFocus::Date => FormFocus::Show,
            FormFocus::Ticket(i) if i + 1 < rows => FormFocus::Ticket(i + 1),
            FormFocus::Ticket(_) => FormFocus::Show,
            FormFocus::Show => FormFocus::Date,
        };
    }

    fn focus_prev(&mut self) {
        let rows = self.ticket_row_count();
        self.focus = match self.focus {
            FormFocus::Date => FormFocus::Show,
            FormFocus::Ticket(0) => FormFocus::Date,
            FormFocus::Ticket(i) => FormFocus::Ticket(i - 1),
            FormFocus::Show if rows > 0 => FormFocus::Ticket(rows - 1),
            FormFocus::Show => FormFocus::Date,
        };
    }

    fn adjust_signal(&self, step: i32) -> UiSignal {
        match self.focus {
            FormFocus::Date => UiSignal::CycleDate { step },
            FormFocus::Ticket(index) => {
                let category = self
                    .current_screen
                    .as_ref()
                    .and_then(|s| s.form.ticket_rows.get(index))
                    .map(|row| row.category.clone())
                    .unwrap_or_default();
                UiSignal::AdjustQuantity {
                    category,
                    delta: step,
                }
            }
            FormFocus::Show => UiSignal::CycleShow { step },
        }
    }

    /// Render the screen using Views
    fn render(&self, f: &mut Frame) {
        let size = f.area();

        if let Some(error_msg) = &self.error_message {
            use ratatui::style::Color;

            let error = Paragraph::new(Span::styled(
                error_msg.as_str(),
                Style::default().fg(Color::Red),
            ))
            .block(Block::default().title("Error").borders(Borders::ALL));

            f.render_widget(error, size);
            return;
        }

        let Some(screen) = &self.current_screen else {
            let loading = Paragraph::new("Connecting to backend...")
                .block(Block::default().title("Loading").borders(Borders::ALL));

            f.render_widget(loading, size);
            return;
        };

        let form_height = FormView::line_count(&screen.form) + 2;

        // Main layout: [Header | Form | Outcome (+ Analytics) | Status bar]
        let main_chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(form_height),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(size);

        let header = Paragraph::new(Span::styled(
            format!("{}  ({})", screen.header.title, screen.header.backend_url),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(header, main_chunks[0]);

        f.render_widget(FormView::new(&screen.form, self.focus), main_chunks[1]);

        match &screen.analytics {
            Some(analytics) => {
                let content_chunks = Layout::horizontal([
                    Constraint::Percentage(60),
                    Constraint::Percentage(40),
                ])
                .split(main_chunks[2]);

                f.render_widget(OutcomeView::new(&screen.outcome), content_chunks[0]);
                f.render_widget(AnalyticsPanelView::new(analytics), content_chunks[1]);
            }
            None => {
                f.render_widget(OutcomeView::new(&screen.outcome), main_chunks[2]);
            }
        }

        f.render_widget(StatusBarView::new(&screen.status_bar), main_chunks[3]);

        if let Some(modal) = &screen.modal {
            let popup = centered_rect(40, 5, size);
            f.render_widget(Clear, popup);
            let body = Paragraph::new(vec![
                ratatui::text::Line::from(Span::styled(
                    modal.message.clone(),
                    Style::default()
                        .fg(status_level_to_color(modal.level))
                        .add_modifier(Modifier::BOLD),
                )),
                ratatui::text::Line::from(Span::styled(
                    "press any key",
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ])
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(body, popup);
        }
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_engine::{AnalyticsPanel, BookingState, CatalogEvent};
    use kiosk_types::PriceList;

    use crate::presentation::presenters::build_screen;

    fn screen_with_categories(categories: &[(&str, f64)]) -> Box<ScreenViewModel> {
        let mut state = BookingState::new();
        let prices: PriceList = categories
            .iter()
            .map(|(category, price)| (category.to_string(), *price))
            .collect();
        state.apply_catalog(CatalogEvent::PricesLoaded(prices));
        Box::new(build_screen(
            &state,
            &AnalyticsPanel::Hidden,
            "http://b",
            None,
            None,
        ))
    }

    fn renderer_with_two_rows() -> TuiRenderer {
        let mut renderer = TuiRenderer::new();
        renderer.apply_event(TuiEvent::Update(screen_with_categories(&[
            ("adult", 15.0),
            ("child", 8.0),
        ])));
        renderer
    }

    #[test]
    fn fatal_error_event_replaces_the_screen_until_the_next_update() {
        let mut renderer = renderer_with_two_rows();
        renderer.apply_event(TuiEvent::Error("backend runtime failed".to_string()));
        assert_eq!(
            renderer.error_message.as_deref(),
            Some("backend runtime failed")
        );

        renderer.apply_event(TuiEvent::Update(screen_with_categories(&[("adult", 15.0)])));
        assert!(renderer.error_message.is_none());
    }

    #[test]
    fn focus_cycles_forward_through_every_row_and_wraps() {
        let mut renderer = renderer_with_two_rows();
        assert_eq!(renderer.focus, FormFocus::Date);

        renderer.focus_next();
        assert_eq!(renderer.focus, FormFocus::Ticket(0));
        renderer.focus_next();
        assert_eq!(renderer.focus, FormFocus::Ticket(1));
        renderer.focus_next();
        assert_eq!(renderer.focus, FormFocus::Show);
        renderer.focus_next();
        assert_eq!(renderer.focus, FormFocus::Date);
    }

    #[test]
    fn focus_cycles_backward_and_wraps() {
        let mut renderer = renderer_with_two_rows();

        renderer.focus_prev();
        assert_eq!(renderer.focus, FormFocus::Show);
        renderer.focus_prev();
        assert_eq!(renderer.focus, FormFocus::Ticket(1));
        renderer.focus_prev();
        assert_eq!(renderer.focus, FormFocus::Ticket(0));
        renderer.focus_prev();
        assert_eq!(renderer.focus, FormFocus::Date);
    }

    #[test]
    fn focus_on_a_vanished_ticket_row_falls_back_to_show() {
        let mut renderer = renderer_with_two_rows();
        renderer.focus_next();
        renderer.focus_next();
        assert_eq!(renderer.focus, FormFocus::Ticket(1));

        renderer.apply_event(TuiEvent::Update(screen_with_categories(&[("adult", 15.0)])));
        assert_eq!(renderer.focus, FormFocus::Show);
    }
}
