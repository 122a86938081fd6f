// serve.rs — Start the goal API server.
//
// Logs go to stderr so piped stdout stays clean.

use tracing_subscriber::EnvFilter;

use gt_goal::{EventDispatcher, GoalStore, LogSink};
use gt_server::{AppConfig, AppState, ServeConfig};

pub fn execute(config: &AppConfig, port: Option<u16>, no_seed: bool) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gt_server=info".parse()?)
                .add_directive("gt_goal=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let mut serve = ServeConfig::load_or_default(&config.serve_file);
    if let Some(port) = port {
        serve.port = port;
    }
    if no_seed {
        serve.seed = false;
    }

    let store = if serve.seed {
        GoalStore::seeded()
    } else {
        GoalStore::empty()
    };

    let mut events = EventDispatcher::new();
    events.add_sink(Box::new(LogSink::new(&config.events_log)));
    let state = AppState::new(store, events);

    tracing::info!("Starting GoalTrack API server");
    tracing::info!("Data dir: {}", config.data_dir.display());

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(gt_server::serve(&serve, state))?;
    Ok(())
}
