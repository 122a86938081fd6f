//! # gt-server
//!
//! The GoalTrack HTTP API.
//!
//! Two endpoints carry all goal traffic, both always answering 200:
//!
//! - `GET /api/goals` — the current ordered list
//! - `POST /api/goals` — lenient append: blank or missing text (and
//!   unparseable bodies) are silently ignored and the unchanged list is
//!   returned; unknown status strings degrade to pending
//!
//! `GET /manifest.json` serves the installable-web-app manifest. There are
//! deliberately no update/delete/reorder endpoints — those interactions
//! are client-local only.
//!
//! The goal list lives in an [`AppState`]-owned store shared across
//! handlers; every change (and every dropped append) emits a
//! [`gt_goal::GoalEvent`] to the configured sinks.

pub mod app;
pub mod config;
pub mod error;

pub use app::{bind_with_fallback, router, serve, AppState, GoalsResponse};
pub use config::{AppConfig, ServeConfig};
pub use error::ServerError;
