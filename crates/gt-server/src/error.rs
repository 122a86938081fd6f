// error.rs — Error types for server startup.
//
// The goal endpoints themselves never produce an error status: invalid
// input is dropped silently and the unchanged list is returned. Errors
// here are limited to binding, serving, and config parsing.

use thiserror::Error;

/// Errors that can occur while starting or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Binding or serving failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The serve settings file didn't parse.
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),
}
