// config.rs — Data-dir layout and serve settings.
//
// AppConfig determines where the app keeps its state: the event log and
// the theme preference, both under a `.goaltrack/` directory. The goal
// list itself is never written anywhere — it is in-memory only.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ServerError;

/// Filesystem layout for the app's data directory.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// The `.goaltrack/` directory itself.
    pub data_dir: PathBuf,

    /// Path to the JSONL goal-event log.
    pub events_log: PathBuf,

    /// Path to the persisted theme preference.
    pub theme_file: PathBuf,

    /// Path to the optional serve settings file.
    pub serve_file: PathBuf,
}

impl AppConfig {
    /// Create a config with the standard `.goaltrack/` layout under `root`.
    pub fn for_dir(root: impl AsRef<Path>) -> Self {
        let gt_dir = root.as_ref().join(".goaltrack");
        Self {
            events_log: gt_dir.join("events.jsonl"),
            theme_file: gt_dir.join("theme.toml"),
            serve_file: gt_dir.join("serve.toml"),
            data_dir: gt_dir,
        }
    }
}

/// Serve settings from `.goaltrack/serve.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServeConfig {
    /// Port to bind (first attempt; a short fallback scan follows).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Attach a permissive CORS layer.
    #[serde(default = "default_cors")]
    pub cors: bool,

    /// Start from the seeded example goals instead of an empty list.
    #[serde(default = "default_seed")]
    pub seed: bool,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            cors: default_cors(),
            seed: default_seed(),
        }
    }
}

// Serde default functions
fn default_port() -> u16 {
    3000
}

fn default_cors() -> bool {
    true
}

fn default_seed() -> bool {
    true
}

impl ServeConfig {
    /// Load serve settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ServerError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load settings, returning defaults if the file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn for_dir_lays_out_the_goaltrack_directory() {
        let config = AppConfig::for_dir("/home/demo");
        assert_eq!(config.data_dir, PathBuf::from("/home/demo/.goaltrack"));
        assert_eq!(
            config.events_log,
            PathBuf::from("/home/demo/.goaltrack/events.jsonl")
        );
        assert_eq!(
            config.theme_file,
            PathBuf::from("/home/demo/.goaltrack/theme.toml")
        );
    }

    #[test]
    fn serve_defaults() {
        let config = ServeConfig::default();
        assert_eq!(config.port, 3000);
        assert!(config.cors);
        assert!(config.seed);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let config = ServeConfig::load_or_default(&dir.path().join("serve.toml"));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("serve.toml");
        std::fs::write(&path, "port = 8080\n").unwrap();

        let config = ServeConfig::load(&path).unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.cors);
        assert!(config.seed);
    }
}
