// profile.rs — The fixed demo identity.

use serde::Serialize;

/// The identity shown in the sidebar and on the profile page. There is no
/// authentication, so this is always the same demo user.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Profile {
    pub display_name: String,
    pub email: String,
}

impl Profile {
    pub fn demo() -> Self {
        Self {
            display_name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        }
    }
}

/// The two-tone brand wordmark parts ("Goal" + "Tracker").
pub const WORDMARK: (&str, &str) = ("Goal", "Tracker");
