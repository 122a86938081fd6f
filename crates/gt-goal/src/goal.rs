// goal.rs — Goal: a tracked objective with a three-state status.
//
// Goals have no stable identifier: identity is positional within the list,
// so reordering or deleting shifts identity. That is acceptable here because
// nothing persists beyond process memory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GoalError;

/// The tracking status of a goal.
///
/// Serializes to the wire form used by the API and the client:
/// `"pending"`, `"inprogress"`, `"completed"`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    /// Not started yet — the creation default.
    #[default]
    Pending,

    /// Actively being worked on.
    InProgress,

    /// Done.
    Completed,
}

impl GoalStatus {
    /// All statuses, in display order.
    pub const ALL: [GoalStatus; 3] = [
        GoalStatus::Pending,
        GoalStatus::InProgress,
        GoalStatus::Completed,
    ];

    /// Human-readable label ("Pending", "In Progress", "Completed").
    pub fn label(&self) -> &'static str {
        match self {
            GoalStatus::Pending => "Pending",
            GoalStatus::InProgress => "In Progress",
            GoalStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalStatus::Pending => write!(f, "pending"),
            GoalStatus::InProgress => write!(f, "inprogress"),
            GoalStatus::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for GoalStatus {
    type Err = GoalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(GoalStatus::Pending),
            "inprogress" => Ok(GoalStatus::InProgress),
            "completed" => Ok(GoalStatus::Completed),
            other => Err(GoalError::UnknownStatus(other.to_string())),
        }
    }
}

/// A tracked user objective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goal {
    /// The goal text (non-empty for server-stored goals).
    pub text: String,

    /// Current status.
    #[serde(default)]
    pub status: GoalStatus,

    /// Client-side marker for a just-added goal ("New" badge). Cleared on
    /// the first status change; never set on server-stored goals.
    #[serde(default, rename = "isNew", skip_serializing_if = "is_false")]
    pub is_new: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Goal {
    /// Create a goal with the given status.
    pub fn new(text: impl Into<String>, status: GoalStatus) -> Self {
        Self {
            text: text.into(),
            status,
            is_new: false,
        }
    }

    /// A just-added client-side goal: pending, carrying the "New" badge
    /// until its status changes.
    pub fn just_added(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: GoalStatus::Pending,
            is_new: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(GoalStatus::default(), GoalStatus::Pending);
        let g = Goal::just_added("Run 5k");
        assert_eq!(g.status, GoalStatus::Pending);
        assert!(g.is_new);
    }

    #[test]
    fn status_wire_form() {
        assert_eq!(GoalStatus::Pending.to_string(), "pending");
        assert_eq!(GoalStatus::InProgress.to_string(), "inprogress");
        assert_eq!(GoalStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn status_labels() {
        assert_eq!(GoalStatus::Pending.label(), "Pending");
        assert_eq!(GoalStatus::InProgress.label(), "In Progress");
        assert_eq!(GoalStatus::Completed.label(), "Completed");
    }

    #[test]
    fn status_parses_wire_form() {
        assert_eq!("pending".parse::<GoalStatus>().unwrap(), GoalStatus::Pending);
        assert_eq!(
            "inprogress".parse::<GoalStatus>().unwrap(),
            GoalStatus::InProgress
        );
        assert_eq!(
            "completed".parse::<GoalStatus>().unwrap(),
            GoalStatus::Completed
        );
    }

    #[test]
    fn unknown_status_is_an_error() {
        let result = "paused".parse::<GoalStatus>();
        assert!(matches!(result, Err(GoalError::UnknownStatus(_))));
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&GoalStatus::InProgress).unwrap();
        assert_eq!(json, "\"inprogress\"");
    }

    #[test]
    fn goal_serialization_round_trip() {
        let g = Goal::new("Read a book", GoalStatus::Completed);
        let json = serde_json::to_string(&g).unwrap();
        let restored: Goal = serde_json::from_str(&json).unwrap();
        assert_eq!(g, restored);
    }

    #[test]
    fn is_new_omitted_from_json_when_false() {
        let g = Goal::new("Read a book", GoalStatus::Pending);
        let json = serde_json::to_string(&g).unwrap();
        assert!(!json.contains("isNew"));

        // Deserializing JSON without the marker produces false.
        let restored: Goal = serde_json::from_str(r#"{"text":"x","status":"pending"}"#).unwrap();
        assert!(!restored.is_new);
    }

    #[test]
    fn is_new_serialized_when_set() {
        let g = Goal::just_added("Stretch daily");
        let json = serde_json::to_string(&g).unwrap();
        assert!(json.contains("\"isNew\":true"));
    }

    #[test]
    fn goal_without_status_field_deserializes_as_pending() {
        let g: Goal = serde_json::from_str(r#"{"text":"x"}"#).unwrap();
        assert_eq!(g.status, GoalStatus::Pending);
    }
}
