// mod.rs — CLI subcommand implementations.

pub mod dashboard;
pub mod goal;
pub mod serve;
pub mod theme;

/// Where the CLI looks for a running server by default.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";
