//! Handler for the interactive booking screen.
//!
//! Owns all domain state (booking flow, analytics panel, the API client and
//! its runtime) and runs on the main thread. The renderer runs on its own
//! thread and owns only UI state; the two exchange `TuiEvent`s and
//! `UiSignal`s over channels.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};

use kiosk_client::ApiClient;
use kiosk_engine::{
    AnalyticsPanel, BookingState, CatalogEvent, FormEvent, SubmitOutcome,
};
use kiosk_types::{PaymentOutcome, ShowId};

use crate::presentation::presenters;
use crate::presentation::renderers::{TuiEvent, TuiRenderer, UiSignal};
use crate::presentation::view_models::{ModalViewModel, StatusLevel};

pub fn handle(client: ApiClient) -> Result<()> {
    let (event_tx, event_rx) = mpsc::channel(); // Handler -> Renderer
    let (signal_tx, signal_rx) = mpsc::channel(); // Renderer -> Handler

    let renderer_handle = thread::spawn(move || TuiRenderer::new().run(event_rx, signal_tx));

    let handler_result = run_handler(client, event_tx.clone(), signal_rx);
    if let Err(err) = &handler_result {
        // Put the failure on screen; the renderer stays up until quit.
        let _ = event_tx.send(TuiEvent::Error(err.to_string()));
    }
    drop(event_tx);

    // A renderer that could not set up the terminal must not exit 0 silently.
    renderer_handle
        .join()
        .map_err(|panic| anyhow!("renderer thread panicked: {:?}", panic))??;

    handler_result
}

struct KioskHandler {
    client: ApiClient,
    runtime: tokio::runtime::Runtime,
    state: BookingState,
    panel: AnalyticsPanel,
    /// Latest non-fatal notice for the status bar
    notice: Option<String>,
    /// Blocking acknowledgement (payment result)
    modal: Option<ModalViewModel>,
    tx: Sender<TuiEvent>,
}

fn run_handler(
    client: ApiClient,
    tx: Sender<TuiEvent>,
    signal_rx: Receiver<UiSignal>,
) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut handler = KioskHandler {
        client,
        runtime,
        state: BookingState::new(),
        panel: AnalyticsPanel::Hidden,
        notice: None,
        modal: None,
        tx,
    };

    handler.load_catalog();
    handler.send_update();

    loop {
        match signal_rx.recv_timeout(Duration::from_millis(200)) {
            Ok(UiSignal::Quit) => break,
            Ok(signal) => {
                handler.handle_signal(signal);
                handler.send_update();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

impl KioskHandler {
    /// Run the three independent catalog fetches. Each fills its own slot;
    /// a failure leaves that slot untouched and only surfaces a notice.
    fn load_catalog(&mut self) {
        let (dates, prices, shows) = self.runtime.block_on(async {
            tokio::join!(self.client.dates(), self.client.prices(), self.client.shows())
        });

        let mut failed = Vec::new();

        match dates {
            Ok(dates) => self.state.apply_catalog(CatalogEvent::DatesLoaded(dates)),
            Err(_) => failed.push("dates"),
        }
        match prices {
            Ok(prices) => self.state.apply_catalog(CatalogEvent::PricesLoaded(prices)),
            Err(_) => failed.push("prices"),
        }
        match shows {
            Ok(shows) => self.state.apply_catalog(CatalogEvent::ShowsLoaded(shows)),
            Err(_) => failed.push("shows"),
        }

        if !failed.is_empty() {
            self.notice = Some(format!("Could not load: {}", failed.join(", ")));
        }
    }

    fn handle_signal(&mut self, signal: UiSignal) {
        // Any key while a modal is up just dismisses it.
        if self.modal.is_some() {
            self.modal = None;
            return;
        }

        match signal {
            UiSignal::CycleDate { step } => self.cycle_date(step),
            UiSignal::AdjustQuantity { category, delta } => {
                let current = self.state.form.tickets.quantity(&category);
                let quantity = current.saturating_add_signed(delta);
                self.state
                    .apply_form(FormEvent::QuantityChanged { category, quantity });
            }
            UiSignal::CycleShow { step } => self.cycle_show(step),
            UiSignal::Submit => self.submit(),
            UiSignal::Pay => self.pay(),
            UiSignal::ToggleAnalytics => self.toggle_analytics(),
            UiSignal::DismissNotice => {
                self.notice = None;
            }
            UiSignal::Quit => {}
        }
    }

    /// Step the selected date through the available list, wrapping around.
    fn cycle_date(&mut self, step: i32) {
        let dates = &self.state.catalog.dates;
        if dates.is_empty() {
            return;
        }

        let len = dates.len() as i32;
        let current = self
            .state
            .form
            .date
            .and_then(|selected| dates.iter().position(|d| *d == selected))
            .map(|i| i as i32);

        let next = match current {
            Some(index) => (index + step).rem_euclid(len),
            // First touch lands on an end depending on direction
            None if step >= 0 => 0,
            None => len - 1,
        };

        let date = dates[next as usize];
        self.state.apply_form(FormEvent::DateSelected(date));
    }

    /// Step through "no show" plus each offered show, wrapping around.
    fn cycle_show(&mut self, step: i32) {
        let shows = &self.state.catalog.shows;
        if shows.is_empty() {
            return;
        }

        // Position 0 is "no show"; offered shows follow.
        let len = shows.len() as i32 + 1;
        let current = match &self.state.form.show {
            None => 0,
            Some(id) => shows
                .iter()
                .position(|s| &s.id == id)
                .map(|i| i as i32 + 1)
                .unwrap_or(0),
        };

        let next = (current + step).rem_euclid(len);
        let selection: Option<ShowId> = if next == 0 {
            None
        } else {
            Some(shows[(next - 1) as usize].id.clone())
        };

        self.state.apply_form(FormEvent::ShowSelected(selection));
    }

    fn submit(&mut self) {
        let Some(request) = self.state.prepare_submit() else {
            // Refused locally; the phase already carries the message.
            return;
        };

        let outcome = match self.runtime.block_on(self.client.book(&request)) {
            Ok(booking) => SubmitOutcome::Accepted(booking),
            Err(kiosk_client::Error::Rejected(message)) => {
                SubmitOutcome::RejectedByBackend(message)
            }
            Err(_) => SubmitOutcome::TransportFailed,
        };

        self.state.apply_submit(outcome);
    }

    fn pay(&mut self) {
        let Some(booking) = self.state.phase.booking() else {
            return;
        };
        if !self.state.phase.can_pay() {
            return;
        }

        let payment_id = booking.payment_id.clone();
        let outcome = match self.runtime.block_on(self.client.process_payment(&payment_id)) {
            Ok(receipt) => PaymentOutcome::from_receipt(&receipt),
            Err(_) => PaymentOutcome::Failed,
        };

        self.state.apply_payment(outcome);

        self.modal = Some(match outcome {
            PaymentOutcome::Succeeded => ModalViewModel {
                message: "Payment successful!".to_string(),
                level: StatusLevel::Success,
            },
            PaymentOutcome::Failed => ModalViewModel {
                message: "Payment failed. Please try again.".to_string(),
                level: StatusLevel::Error,
            },
        });
    }

    fn toggle_analytics(&mut self) {
        let (panel, fetch_needed) = std::mem::take(&mut self.panel).toggled();
        self.panel = panel;

        if fetch_needed {
            // Show the Loading state before the request blocks this thread.
            self.send_update();

            let result = self
                .runtime
                .block_on(self.client.analytics())
                .map_err(|e| e.to_string());
            self.panel = std::mem::take(&mut self.panel).resolve(result);
        }
    }

    fn send_update(&self) {
        let screen = presenters::build_screen(
            &self.state,
            &self.panel,
            self.client.base_url(),
            self.notice.as_deref(),
            self.modal.as_ref(),
        );
        // Renderer may already be gone on shutdown
        let _ = self.tx.send(TuiEvent::Update(Box::new(screen)));
    }
}
