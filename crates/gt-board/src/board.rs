// board.rs — BoardView: transient view state for the goal page.
//
// One actions menu or status picker may be open at a time, tied to a row
// index. Dragging keeps a live pointer to the dragged row and reorders the
// list as the pointer crosses other rows — there is no undo. All indices
// are positional; out-of-range operations are ignored rather than panicking.

use gt_goal::{Goal, GoalStatus, GoalStore};

/// Which row menu is open, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// No menu open.
    Closed,

    /// Row's actions menu (Update Status / Delete) is open.
    Actions(usize),

    /// Row's status picker submenu is open.
    StatusPicker(usize),
}

impl MenuState {
    /// The row whose menu or picker is open, if any.
    pub fn open_row(&self) -> Option<usize> {
        match self {
            MenuState::Closed => None,
            MenuState::Actions(idx) | MenuState::StatusPicker(idx) => Some(*idx),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, MenuState::Closed)
    }
}

/// Transient view state for the goal page.
#[derive(Debug)]
pub struct BoardView {
    goals: Vec<Goal>,
    dragged: Option<usize>,
    menu: MenuState,
}

impl BoardView {
    /// Build the board from a fetched goal list.
    ///
    /// An empty fetch falls back to the seeded defaults, so the page never
    /// starts blank (matches the fetch-else-defaults behavior on mount).
    pub fn seeded(fetched: Vec<Goal>) -> Self {
        let goals = if fetched.is_empty() {
            GoalStore::seeded().list()
        } else {
            fetched
        };
        Self {
            goals,
            dragged: None,
            menu: MenuState::Closed,
        }
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn dragged(&self) -> Option<usize> {
        self.dragged
    }

    // ── Menus ────────────────────────────────────────────────────

    /// Toggle row `idx`'s actions menu.
    ///
    /// Opening one row's menu closes any other open menu or picker;
    /// clicking the already-open row's button closes it.
    pub fn toggle_actions_menu(&mut self, idx: usize) {
        if idx >= self.goals.len() {
            tracing::debug!(idx, "menu toggle ignored: no such row");
            return;
        }
        self.menu = match self.menu {
            MenuState::Actions(open) if open == idx => MenuState::Closed,
            _ => MenuState::Actions(idx),
        };
    }

    /// Move from row `idx`'s actions menu to its status picker.
    pub fn open_status_picker(&mut self, idx: usize) {
        if idx >= self.goals.len() {
            tracing::debug!(idx, "status picker ignored: no such row");
            return;
        }
        self.menu = MenuState::StatusPicker(idx);
    }

    /// The statuses offered by row `idx`'s picker: every status except the
    /// row's current one.
    pub fn status_options(&self, idx: usize) -> Vec<GoalStatus> {
        let Some(goal) = self.goals.get(idx) else {
            return Vec::new();
        };
        GoalStatus::ALL
            .into_iter()
            .filter(|s| *s != goal.status)
            .collect()
    }

    /// A click landed somewhere on the page. `target_row` is the row whose
    /// menu region contains the click, if any; a click anywhere else closes
    /// all open menus (containment check against the open row).
    pub fn click_outside(&mut self, target_row: Option<usize>) {
        if let Some(open) = self.menu.open_row() {
            if target_row != Some(open) {
                self.menu = MenuState::Closed;
            }
        }
    }

    // ── Mutations ────────────────────────────────────────────────

    /// Set row `idx`'s status, clearing its "New" badge, and close all
    /// menus. Other rows are untouched.
    pub fn set_status(&mut self, idx: usize, status: GoalStatus) {
        if let Some(goal) = self.goals.get_mut(idx) {
            goal.status = status;
            goal.is_new = false;
        }
        self.menu = MenuState::Closed;
    }

    /// Remove row `idx` and close all menus.
    pub fn delete(&mut self, idx: usize) {
        if idx < self.goals.len() {
            self.goals.remove(idx);
        }
        self.menu = MenuState::Closed;
    }

    /// Optimistically add a goal at the front with the "New" badge.
    ///
    /// The blank check trims, but the stored text is kept as typed; only
    /// the server-side append trims.
    pub fn add(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        self.goals.insert(0, Goal::just_added(text));
    }

    // ── Drag and drop ────────────────────────────────────────────

    /// Record the dragged row.
    pub fn drag_start(&mut self, idx: usize) {
        if idx < self.goals.len() {
            self.dragged = Some(idx);
        }
    }

    /// The pointer crossed row `idx`: move the dragged row there and keep
    /// dragging from the new position (live reordering preview).
    pub fn drag_over(&mut self, idx: usize) {
        let Some(from) = self.dragged else {
            return;
        };
        if from == idx || idx >= self.goals.len() || from >= self.goals.len() {
            return;
        }
        let moved = self.goals.remove(from);
        self.goals.insert(idx, moved);
        self.dragged = Some(idx);
    }

    /// Drop: clear the dragged pointer. The preview order is final.
    pub fn drag_end(&mut self) {
        self.dragged = None;
    }
}
