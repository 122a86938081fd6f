//! # gt-board
//!
//! Client-side view state for GoalTrack.
//!
//! The goal page and the dashboard both render a goal list fetched once
//! from the API; everything after that is local, transient state. No
//! update/delete/reorder endpoint exists, so none of these mutations sync
//! back — a reload discards local edits and re-seeds from the server.
//!
//! ## Key components
//!
//! - [`BoardView`] — the goal page's state machine: per-row actions menu
//!   and status picker (mutually exclusive), drag-reorder with a live
//!   preview, status change, delete, optimistic add
//! - [`MenuState`] — which row menu is open, if any
//! - [`DashboardView`] — status counts and the goals-overview slice

pub mod board;
pub mod dashboard;

pub use board::{BoardView, MenuState};
pub use dashboard::DashboardView;
