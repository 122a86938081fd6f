// app.rs — Router, shared state, and the goal API handlers.
//
// Both goal endpoints always answer 200 with the full list. The POST
// handler reads the raw body and parses it leniently: an unparseable body
// behaves exactly like a blank append (unchanged list back, no error
// status). The system degrades to stale or seeded data rather than
// failing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use gt_goal::{EventDispatcher, Goal, GoalEvent, GoalStatus, GoalStore};

use crate::config::ServeConfig;
use crate::error::ServerError;

/// Installable-web-app manifest, embedded at compile time.
const MANIFEST: &str = include_str!("../assets/manifest.json");

/// Shared state for the goal API: the store plus the event dispatcher.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<GoalStore>>,
    events: Arc<Mutex<EventDispatcher>>,
}

impl AppState {
    pub fn new(store: GoalStore, events: EventDispatcher) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            events: Arc::new(Mutex::new(events)),
        }
    }

    /// State with the seeded example goals and no sinks.
    pub fn seeded() -> Self {
        Self::new(GoalStore::seeded(), EventDispatcher::new())
    }

    fn dispatch(&self, event: &GoalEvent) {
        let events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        events.dispatch(event);
    }
}

/// Wire shape of both goal endpoints' response.
#[derive(Debug, Serialize, Deserialize)]
pub struct GoalsResponse {
    pub goals: Vec<Goal>,
}

/// Wire shape of the append request body. Every field is optional — the
/// handler fills the gaps instead of rejecting.
#[derive(Debug, Default, Deserialize)]
struct AppendRequest {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// Build the API router.
pub fn router(state: AppState, cors: bool) -> Router {
    let router = Router::new()
        .route("/api/goals", get(list_goals).post(append_goal))
        .route("/manifest.json", get(manifest))
        .with_state(state);
    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

async fn list_goals(State(state): State<AppState>) -> Json<GoalsResponse> {
    let store = state.store.lock().unwrap_or_else(PoisonError::into_inner);
    Json(GoalsResponse {
        goals: store.list(),
    })
}

async fn append_goal(State(state): State<AppState>, body: String) -> Json<GoalsResponse> {
    let req: AppendRequest = serde_json::from_str(&body).unwrap_or_default();
    let text = req.text.unwrap_or_default();

    // Absent and empty status are both falsy; unknown strings degrade to
    // pending rather than erroring.
    let status = req
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<GoalStatus>().unwrap_or_default());

    let (goals, appended) = {
        let mut store = state.store.lock().unwrap_or_else(PoisonError::into_inner);
        let before = store.len();
        let goals = store.append(&text, status);
        (goals, store.len() > before)
    };

    if appended {
        tracing::info!(text = %text.trim(), status = %status.unwrap_or_default(), "goal appended");
        state.dispatch(&GoalEvent::goal_added(
            text.trim(),
            status.unwrap_or_default(),
        ));
    } else {
        tracing::debug!("append dropped: blank text");
        state.dispatch(&GoalEvent::append_dropped("blank text"));
    }

    Json(GoalsResponse { goals })
}

async fn manifest() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        MANIFEST,
    )
}

/// Bind the first free port in `[start_port, start_port + 10)`.
pub async fn bind_with_fallback(start_port: u16) -> std::io::Result<(TcpListener, SocketAddr)> {
    for port in start_port..start_port.saturating_add(10) {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                let addr = listener.local_addr()?;
                return Ok((listener, addr));
            }
            Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => continue,
            Err(e) => return Err(e),
        }
    }
    Err(std::io::Error::new(
        std::io::ErrorKind::AddrInUse,
        "all fallback ports in use",
    ))
}

/// Bind and run the API server until the task is cancelled.
pub async fn serve(config: &ServeConfig, state: AppState) -> Result<(), ServerError> {
    let app = router(state, config.cors);
    let (listener, addr) = bind_with_fallback(config.port).await?;
    tracing::info!("goal API listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
