//! Scriptable in-process stand-in for the museum ticketing backend.
//!
//! Implements the six routes the client depends on, with per-route failure
//! injection. Booking totals are computed server-side from the scripted
//! price list, exactly like the real backend — the client must never do
//! that arithmetic itself.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;

use kiosk_types::{AnalyticsSummary, ShowOption};

use crate::fixtures;

/// What the mock backend should serve, route by route.
#[derive(Debug, Clone)]
pub struct BackendScript {
    pub dates: Vec<NaiveDate>,
    pub prices: Vec<(String, f64)>,
    pub shows: Vec<ShowOption>,
    pub analytics: AnalyticsSummary,
    /// Reply 500 on the matching GET route
    pub fail_dates: bool,
    pub fail_prices: bool,
    pub fail_shows: bool,
    pub fail_analytics: bool,
    /// Reply 500 on POST /api/book
    pub fail_booking: bool,
    /// Reply 200 with `{error: ...}` on POST /api/book
    pub reject_booking_with: Option<String>,
    /// Status string for POST /api/payment/process
    pub payment_status: String,
    /// Reply 500 on POST /api/payment/process
    pub fail_payment: bool,
}

impl Default for BackendScript {
    fn default() -> Self {
        fixtures::sample_script()
    }
}

struct Inner {
    script: BackendScript,
    booking_requests: Mutex<Vec<serde_json::Value>>,
}

/// A running mock backend on an ephemeral localhost port.
///
/// Runs on its own thread with its own runtime so both async tests and
/// spawned CLI processes can reach it. Shuts down on drop.
pub struct MockBackend {
    addr: SocketAddr,
    inner: Arc<Inner>,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
    thread: Option<std::thread::JoinHandle<()>>,
}

impl MockBackend {
    pub fn start(script: BackendScript) -> anyhow::Result<Self> {
        let inner = Arc::new(Inner {
            script,
            booking_requests: Mutex::new(Vec::new()),
        });

        let app = router(inner.clone());
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        let (addr_tx, addr_rx) = std::sync::mpsc::channel::<SocketAddr>();

        let thread = std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("mock backend runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind mock backend");
                let addr = listener.local_addr().expect("mock backend addr");
                let _ = addr_tx.send(addr);
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await
                    .expect("mock backend serve");
            });
        });

        let addr = addr_rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .map_err(|_| anyhow::anyhow!("mock backend did not start"))?;

        Ok(Self {
            addr,
            inner,
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
        })
    }

    pub fn start_default() -> anyhow::Result<Self> {
        Self::start(BackendScript::default())
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Raw bodies received on POST /api/book, for wire-format assertions.
    pub fn booking_requests(&self) -> Vec<serde_json::Value> {
        self.inner.booking_requests.lock().unwrap().clone()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn router(inner: Arc<Inner>) -> Router {
    Router::new()
        .route("/api/dates", get(list_dates))
        .route("/api/prices", get(list_prices))
        .route("/api/shows", get(list_shows))
        .route("/api/analytics", get(list_analytics))
        .route("/api/book", post(create_booking))
        .route("/api/payment/process", post(process_payment))
        .with_state(inner)
}

fn server_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "backend exploded").into_response()
}

async fn list_dates(State(inner): State<Arc<Inner>>) -> Response {
    if inner.script.fail_dates {
        return server_error();
    }
    Json(&inner.script.dates).into_response()
}

async fn list_prices(State(inner): State<Arc<Inner>>) -> Response {
    if inner.script.fail_prices {
        return server_error();
    }
    let prices: serde_json::Map<String, serde_json::Value> = inner
        .script
        .prices
        .iter()
        .map(|(category, price)| (category.clone(), serde_json::json!(price)))
        .collect();
    Json(serde_json::Value::Object(prices)).into_response()
}

async fn list_shows(State(inner): State<Arc<Inner>>) -> Response {
    if inner.script.fail_shows {
        return server_error();
    }
    Json(&inner.script.shows).into_response()
}

async fn list_analytics(State(inner): State<Arc<Inner>>) -> Response {
    if inner.script.fail_analytics {
        return server_error();
    }
    Json(&inner.script.analytics).into_response()
}

async fn create_booking(
    State(inner): State<Arc<Inner>>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    inner
        .booking_requests
        .lock()
        .unwrap()
        .push(body.clone());

    if inner.script.fail_booking {
        return server_error();
    }
    if let Some(message) = &inner.script.reject_booking_with {
        return Json(serde_json::json!({ "error": message })).into_response();
    }

    let date = body.get("date").cloned().unwrap_or(serde_json::Value::Null);
    let tickets = body
        .get("tickets")
        .cloned()
        .unwrap_or_else(|| serde_json::json!({}));

    let mut total = 0.0;
    if let Some(map) = tickets.as_object() {
        for (category, quantity) in map {
            let unit_price = inner
                .script
                .prices
                .iter()
                .find(|(c, _)| c == category)
                .map(|(_, p)| *p)
                .unwrap_or(0.0);
            total += unit_price * quantity.as_f64().unwrap_or(0.0);
        }
    }
    if let Some(show_id) = body.get("show").and_then(|s| s.as_str()) {
        if !show_id.is_empty() {
            if let Some(show) = inner.script.shows.iter().find(|s| s.id.as_str() == show_id) {
                total += show.price;
            }
        }
    }

    Json(serde_json::json!({
        "date": date,
        "tickets": tickets,
        "total_cost": total,
        "payment_id": uuid::Uuid::new_v4().to_string(),
    }))
    .into_response()
}

async fn process_payment(
    State(inner): State<Arc<Inner>>,
    Json(_body): Json<serde_json::Value>,
) -> Response {
    if inner.script.fail_payment {
        return server_error();
    }
    Json(serde_json::json!({ "status": inner.script.payment_status })).into_response()
}
