// dashboard.rs — DashboardView: status counts and the overview slice.

use gt_goal::{Goal, GoalStatus};

/// Dashboard summary over a fetched goal list: the three status-count
/// widgets plus the goals-overview list (first few goals).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    goals: Vec<Goal>,
}

/// How many goals the overview section shows.
const OVERVIEW_LIMIT: usize = 5;

impl DashboardView {
    pub fn new(goals: Vec<Goal>) -> Self {
        Self { goals }
    }

    pub fn pending_count(&self) -> usize {
        self.count(GoalStatus::Pending)
    }

    pub fn in_progress_count(&self) -> usize {
        self.count(GoalStatus::InProgress)
    }

    pub fn completed_count(&self) -> usize {
        self.count(GoalStatus::Completed)
    }

    /// The first few goals, for the overview list.
    pub fn overview(&self) -> &[Goal] {
        let end = self.goals.len().min(OVERVIEW_LIMIT);
        &self.goals[..end]
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    fn count(&self, status: GoalStatus) -> usize {
        self.goals.iter().filter(|g| g.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gt_goal::GoalStore;

    #[test]
    fn counts_over_the_seeded_list() {
        let view = DashboardView::new(GoalStore::seeded().list());
        assert_eq!(view.pending_count(), 2);
        assert_eq!(view.in_progress_count(), 1);
        assert_eq!(view.completed_count(), 1);
    }

    #[test]
    fn overview_caps_at_five() {
        let goals: Vec<Goal> = (0..8)
            .map(|i| Goal::new(format!("Goal {i}"), GoalStatus::Pending))
            .collect();
        let view = DashboardView::new(goals);
        assert_eq!(view.overview().len(), 5);
        assert_eq!(view.overview()[0].text, "Goal 0");
    }

    #[test]
    fn overview_of_a_short_list_is_the_whole_list() {
        let view = DashboardView::new(GoalStore::seeded().list());
        assert_eq!(view.overview().len(), 4);
    }

    #[test]
    fn empty_dashboard() {
        let view = DashboardView::new(Vec::new());
        assert!(view.is_empty());
        assert_eq!(view.pending_count(), 0);
        assert!(view.overview().is_empty());
    }
}
