// theme.rs — Theme flag and its file-backed preference.
//
// The saved value wins; when no file exists the caller's system-preference
// default applies (mirrors the saved-else-media-query check on mount).
// Unreadable or malformed files also fall back to the default rather than
// erroring — losing a theme choice is not worth failing startup over.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Light or dark. The whole theme system is this one flag.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// On-disk shape of the preference file.
#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

/// The persisted theme preference.
///
/// `toggle` and `set` write through to disk immediately, so the choice
/// survives a restart — the only thing in the app that does.
pub struct ThemePreference {
    path: PathBuf,
    theme: Theme,
}

impl ThemePreference {
    /// Load the preference from `path`, falling back to `system_default`
    /// when the file is absent or unreadable.
    pub fn load_or(path: impl AsRef<Path>, system_default: Theme) -> Self {
        let path = path.as_ref().to_path_buf();
        let theme = fs::read_to_string(&path)
            .ok()
            .and_then(|content| toml::from_str::<ThemeFile>(&content).ok())
            .map(|file| file.theme)
            .unwrap_or(system_default);
        Self { path, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist it. Returns the new value.
    pub fn toggle(&mut self) -> Result<Theme, ProfileError> {
        self.set(self.theme.toggle())?;
        Ok(self.theme)
    }

    /// Set the theme and persist it.
    pub fn set(&mut self, theme: Theme) -> Result<(), ProfileError> {
        self.theme = theme;
        self.save()
    }

    fn save(&self) -> Result<(), ProfileError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ProfileError::IoError {
                path: parent.display().to_string(),
                source,
            })?;
        }
        let content = toml::to_string(&ThemeFile { theme: self.theme })?;
        fs::write(&self.path, content).map_err(|source| ProfileError::IoError {
            path: self.path.display().to_string(),
            source,
        })?;
        tracing::debug!(theme = %self.theme, "theme preference saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn toggle_flips_between_light_and_dark() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn missing_file_falls_back_to_system_default() {
        let dir = tempdir().unwrap();
        let pref = ThemePreference::load_or(dir.path().join("theme.toml"), Theme::Dark);
        assert_eq!(pref.theme(), Theme::Dark);
    }

    #[test]
    fn saved_value_wins_over_system_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.toml");

        let mut pref = ThemePreference::load_or(&path, Theme::Light);
        pref.set(Theme::Dark).unwrap();

        // Reload with the opposite default: the saved value applies.
        let reloaded = ThemePreference::load_or(&path, Theme::Light);
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn toggle_persists_immediately() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.toml");

        let mut pref = ThemePreference::load_or(&path, Theme::Light);
        let next = pref.toggle().unwrap();
        assert_eq!(next, Theme::Dark);

        let reloaded = ThemePreference::load_or(&path, Theme::Light);
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn malformed_file_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        fs::write(&path, "not really toml = = =").unwrap();

        let pref = ThemePreference::load_or(&path, Theme::Light);
        assert_eq!(pref.theme(), Theme::Light);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".goaltrack").join("theme.toml");

        let mut pref = ThemePreference::load_or(&path, Theme::Light);
        pref.set(Theme::Dark).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn theme_displays_lowercase() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
