// store.rs — GoalStore: the in-memory list of goals.
//
// The store is the process-wide source of truth for both the API and the
// client views. It is plain owned data — callers decide how to share it
// (the server wraps it in Arc<Mutex<_>>). Nothing is persisted: a restart
// resets the list to the seeded defaults.
//
// Append is deliberately lenient: blank text is dropped silently and the
// unchanged list is returned. No uniqueness check, no size limit.

use crate::goal::{Goal, GoalStatus};

/// In-memory store of goals, newest first.
#[derive(Debug, Clone)]
pub struct GoalStore {
    goals: Vec<Goal>,
}

impl GoalStore {
    /// The four example goals shown when no data has been added yet.
    pub fn seeded() -> Self {
        Self {
            goals: vec![
                Goal::new("Read a book", GoalStatus::Pending),
                Goal::new("Finish project report", GoalStatus::InProgress),
                Goal::new("Workout 3x this week", GoalStatus::Pending),
                Goal::new("Submit tax documents", GoalStatus::Completed),
            ],
        }
    }

    /// An empty store.
    pub fn empty() -> Self {
        Self { goals: Vec::new() }
    }

    /// Snapshot of the current ordered list.
    pub fn list(&self) -> Vec<Goal> {
        self.goals.clone()
    }

    /// Append a goal to the front of the list and return the full updated
    /// list.
    ///
    /// Text is trimmed; blank text leaves the list unchanged (no error —
    /// the caller gets the same list back). A missing status defaults to
    /// [`GoalStatus::Pending`].
    pub fn append(&mut self, text: &str, status: Option<GoalStatus>) -> Vec<Goal> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return self.list();
        }
        self.goals
            .insert(0, Goal::new(trimmed, status.unwrap_or_default()));
        self.list()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

impl Default for GoalStore {
    fn default() -> Self {
        Self::seeded()
    }
}
