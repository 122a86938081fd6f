// nav.rs — Navigation shell model: sidebar and bottom-nav items.
//
// Pure presentation data. The profile entry only appears in the bottom nav
// (on desktop the sidebar itself hosts the profile actions).

/// One navigation menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
    pub mobile_only: bool,
}

impl NavItem {
    /// Active-item marking: exact path match.
    pub fn is_active(&self, path: &str) -> bool {
        self.href == path
    }
}

const MENU_ITEMS: [NavItem; 4] = [
    NavItem {
        title: "Dashboard",
        href: "/",
        mobile_only: false,
    },
    NavItem {
        title: "Goals",
        href: "/goals",
        mobile_only: false,
    },
    NavItem {
        title: "Subscription",
        href: "/subscription",
        mobile_only: false,
    },
    NavItem {
        title: "Profile",
        href: "/profile",
        mobile_only: true,
    },
];

/// Sidebar entries (desktop): everything except mobile-only items.
pub fn sidebar_items() -> impl Iterator<Item = &'static NavItem> {
    MENU_ITEMS.iter().filter(|item| !item.mobile_only)
}

/// Bottom-nav entries (mobile): all items.
pub fn bottom_nav_items() -> &'static [NavItem] {
    &MENU_ITEMS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_excludes_mobile_only_entries() {
        let titles: Vec<&str> = sidebar_items().map(|i| i.title).collect();
        assert_eq!(titles, ["Dashboard", "Goals", "Subscription"]);
    }

    #[test]
    fn bottom_nav_shows_all_entries() {
        let items = bottom_nav_items();
        assert_eq!(items.len(), 4);
        assert_eq!(items[3].title, "Profile");
        assert!(items[3].mobile_only);
    }

    #[test]
    fn active_marking_is_an_exact_path_match() {
        let goals = &bottom_nav_items()[1];
        assert!(goals.is_active("/goals"));
        assert!(!goals.is_active("/"));
        assert!(!goals.is_active("/goals/archive"));
    }
}
