use anyhow::Result;
use clap::Parser;
use infoscreen::{
    app::App,
    config::{Config, DEFAULT_CONFIG_PATH},
    event::{Event, EventHandler},
    handler::handle_key_events,
    tui::Tui,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, path::PathBuf, time::Duration};
use tracing_subscriber::EnvFilter;

/// Full-screen status dashboard for unattended server-room terminals.
#[derive(Debug, Parser)]
#[command(name = "infoscreen", version, about)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Seconds between repaints, overriding the configured value.
    #[arg(long)]
    reload: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Goes to stderr and stays silent unless RUST_LOG is set, so the
    // alternate screen is not disturbed in normal operation.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(&cli.config);
    if let Some(reload) = cli.reload {
        config.reload_secs = reload.max(1);
    }
    let reload = Duration::from_secs(config.reload_secs.max(1));

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    let events = EventHandler::new(reload);
    let mut tui = Tui::new(terminal, events);
    tui.init()?;

    let mut app = App::new(config);

    while app.running {
        tui.draw(&mut app)?;

        match tui.events.next().await? {
            Event::Tick => app.tick(),
            Event::Key(key_event) => handle_key_events(key_event, &mut app)?,
            Event::Resize(_, _) => {}
        }
    }

    tui.exit()?;
    Ok(())
}
