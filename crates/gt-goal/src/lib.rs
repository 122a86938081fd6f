//! # gt-goal
//!
//! Goal records and the in-memory goal store for GoalTrack.
//!
//! A [`Goal`] is a tracked user objective: a line of text plus a
//! [`GoalStatus`]. Goals live in a [`GoalStore`] — the process-wide source
//! of truth for both the HTTP API and the client views. There is no
//! persistence: a restart resets the list to the seeded defaults.
//!
//! ## Key components
//!
//! - [`Goal`] / [`GoalStatus`] — the record and its three-state lifecycle
//!   (pending → in progress → completed, freely switchable)
//! - [`GoalStore`] — owned, injectable in-memory list; append inserts at
//!   the front and silently drops blank text
//! - [`GoalEvent`] — activity events emitted when the list changes
//! - [`EventDispatcher`] / [`NotificationSink`] — fan-out of events to
//!   sinks (JSONL log file, etc.)

pub mod error;
pub mod events;
pub mod goal;
pub mod store;

pub use error::GoalError;
pub use events::{EventDispatcher, GoalEvent, LogSink, NotificationSink};
pub use goal::{Goal, GoalStatus};
pub use store::GoalStore;
