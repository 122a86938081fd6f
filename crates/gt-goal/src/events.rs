// events.rs — Goal activity events and notification dispatch.
//
// The server emits an event whenever the shared list changes (or an append
// is dropped). Notification sinks subscribe to these; the always-on sink
// appends JSONL to a log file under the data directory. Sink errors are
// logged and never stop the request.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GoalError;
use crate::goal::GoalStatus;

/// Events emitted when the goal list changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum GoalEvent {
    /// A goal was appended to the front of the list.
    GoalAdded {
        text: String,
        status: GoalStatus,
        timestamp: DateTime<Utc>,
    },

    /// An append was dropped (blank text or unparseable body).
    AppendDropped {
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

impl GoalEvent {
    /// Get the event type name as a string.
    pub fn event_type(&self) -> &str {
        match self {
            GoalEvent::GoalAdded { .. } => "goal_added",
            GoalEvent::AppendDropped { .. } => "append_dropped",
        }
    }

    /// Helper to create a GoalAdded event.
    pub fn goal_added(text: &str, status: GoalStatus) -> Self {
        GoalEvent::GoalAdded {
            text: text.to_string(),
            status,
            timestamp: Utc::now(),
        }
    }

    /// Helper to create an AppendDropped event.
    pub fn append_dropped(reason: &str) -> Self {
        GoalEvent::AppendDropped {
            reason: reason.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Trait for receiving goal events.
///
/// Implementations decide what to do with each event: log to a file, call
/// a webhook, etc.
pub trait NotificationSink: Send {
    /// Handle an event. Errors are logged but don't stop the system.
    fn send(&self, event: &GoalEvent) -> Result<(), GoalError>;
}

/// Logs events as JSONL to a file (always-on sink).
pub struct LogSink {
    path: PathBuf,
}

impl LogSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl NotificationSink for LogSink {
    fn send(&self, event: &GoalEvent) -> Result<(), GoalError> {
        // Ensure parent directory exists.
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| GoalError::IoError {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| GoalError::IoError {
                path: self.path.display().to_string(),
                source,
            })?;

        let json = serde_json::to_string(event)?;
        writeln!(file, "{}", json).map_err(|source| GoalError::IoError {
            path: self.path.display().to_string(),
            source,
        })?;

        Ok(())
    }
}

/// Dispatches events to multiple sinks.
///
/// Errors from individual sinks are logged (via tracing) but don't prevent
/// other sinks from receiving the event.
#[derive(Default)]
pub struct EventDispatcher {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl EventDispatcher {
    /// Create a new dispatcher with no sinks.
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Add a notification sink.
    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    /// Dispatch an event to all sinks.
    pub fn dispatch(&self, event: &GoalEvent) {
        for sink in &self.sinks {
            if let Err(e) = sink.send(event) {
                tracing::warn!("notification sink error: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn event_serialization_round_trip() {
        let event = GoalEvent::goal_added("Read a book", GoalStatus::Pending);
        let json = serde_json::to_string(&event).unwrap();
        let restored: GoalEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event.event_type(), restored.event_type());
        assert!(json.contains("\"goal_added\""));
    }

    #[test]
    fn log_sink_appends_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let sink = LogSink::new(&path);

        sink.send(&GoalEvent::goal_added("Goal 1", GoalStatus::Pending))
            .unwrap();
        sink.send(&GoalEvent::append_dropped("blank text")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("goal_added"));
        assert!(lines[1].contains("append_dropped"));
    }

    #[test]
    fn log_sink_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".goaltrack").join("events.jsonl");
        let sink = LogSink::new(&path);

        sink.send(&GoalEvent::goal_added("Goal", GoalStatus::Pending))
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn dispatcher_sends_to_all_sinks() {
        let dir = tempdir().unwrap();
        let path1 = dir.path().join("sink1.jsonl");
        let path2 = dir.path().join("sink2.jsonl");

        let mut dispatcher = EventDispatcher::new();
        dispatcher.add_sink(Box::new(LogSink::new(&path1)));
        dispatcher.add_sink(Box::new(LogSink::new(&path2)));

        dispatcher.dispatch(&GoalEvent::goal_added("Test", GoalStatus::Pending));

        assert!(fs::read_to_string(&path1).unwrap().contains("goal_added"));
        assert!(fs::read_to_string(&path2).unwrap().contains("goal_added"));
    }

    #[test]
    fn event_type_names() {
        assert_eq!(
            GoalEvent::goal_added("x", GoalStatus::Pending).event_type(),
            "goal_added"
        );
        assert_eq!(
            GoalEvent::append_dropped("blank").event_type(),
            "append_dropped"
        );
    }
}
