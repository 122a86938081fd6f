// error.rs — Error types for profile and theme persistence.

use thiserror::Error;

/// Errors that can occur while persisting the theme preference.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },

    /// Failed to serialize the preference file.
    #[error("theme file write error: {0}")]
    SerializeError(#[from] toml::ser::Error),
}
