mod app;
mod config;
mod fetch;
mod input;
mod logging;
mod tmdb;
mod ui;

#[cfg(test)]
mod testing;

use app::App;
use clap::Parser;
use config::Config;
use crossterm::event::{self, Event, KeyEventKind};
use fetch::{Dispatcher, FetchChannels, FetchOutcome};
use std::path::PathBuf;
use std::time::Duration;
use tmdb::TmdbClient;
use tokio::sync::mpsc::UnboundedReceiver;

/// Browse, search and filter TMDB movies from the terminal
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// TMDB API key (overrides the config file)
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Path to the config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file (also CINEMA_SPHERE_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logging::init_tracing(cli.log_file.as_deref());

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config.with_api_key(cli.api_key),
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    };
    let api_key = match config.api_key() {
        Ok(key) => key.to_string(),
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    };

    let client = TmdbClient::new(config.api_base_url.clone(), api_key);
    let FetchChannels {
        outcome_tx,
        mut outcome_rx,
    } = FetchChannels::new();
    let dispatcher = Dispatcher::new(client, outcome_tx);

    let mut app = App::new(&config);
    for request in App::initial_requests() {
        dispatcher.dispatch(request);
    }

    // Init terminal
    let mut terminal = ratatui::init();

    // Main loop
    let result = run_app(&mut terminal, &mut app, &dispatcher, &mut outcome_rx).await;

    // Restore terminal
    ratatui::restore();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    dispatcher: &Dispatcher,
    outcome_rx: &mut UnboundedReceiver<FetchOutcome>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Apply whatever the workers finished since the last frame
        while let Ok(outcome) = outcome_rx.try_recv() {
            app.apply(outcome);
        }

        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Poll for events with a 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(request) = input::handle_key(app, key) {
                    dispatcher.dispatch(request);
                }
            }
        }
    }
}
