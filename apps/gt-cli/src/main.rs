//! # gt-cli
//!
//! Command-line interface for GoalTrack.
//!
//! - `gt serve` — start the goal API server
//! - `gt goal list/add` — inspect and add goals over the HTTP API
//! - `gt dashboard` — status counts and the goals overview
//! - `gt theme show/toggle` — the persisted theme preference

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gt_server::AppConfig;

/// GoalTrack CLI — track your goals from the terminal.
#[derive(Parser)]
#[command(name = "gt", version, about)]
struct Cli {
    /// Directory holding the `.goaltrack/` data dir (defaults to current directory).
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the goal API server.
    Serve {
        /// Port to bind (overrides serve.toml).
        #[arg(long)]
        port: Option<u16>,
        /// Start with an empty list instead of the seeded example goals.
        #[arg(long)]
        no_seed: bool,
    },
    /// Inspect and add goals on a running server.
    Goal {
        #[command(subcommand)]
        command: commands::goal::GoalCommands,
    },
    /// Show status counts and the goals overview.
    Dashboard {
        /// Base URL of the running server.
        #[arg(long, default_value = commands::DEFAULT_SERVER_URL)]
        server_url: String,
    },
    /// Show or toggle the saved theme.
    Theme {
        #[command(subcommand)]
        command: commands::theme::ThemeCommands,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::for_dir(&cli.data_dir);

    match &cli.command {
        Commands::Serve { port, no_seed } => commands::serve::execute(&config, *port, *no_seed),
        Commands::Goal { command } => commands::goal::execute(command),
        Commands::Dashboard { server_url } => commands::dashboard::execute(server_url),
        Commands::Theme { command } => commands::theme::execute(command, &config),
    }
}
