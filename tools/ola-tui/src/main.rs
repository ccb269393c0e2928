//! OLA-TUI: terminal monitor for an OLA server.
//!
//! Talks to the daemon's embedded web server only, like the browser UI
//! does.
//!
//! ## Usage
//!
//! ```bash
//! # Local server, pick a universe from the overview
//! ola-tui
//!
//! # Remote server, open universe 3 straight away
//! ola-tui --server-url http://desk.local:9090 --universe 3
//! ```

mod app;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ola_01_server_api::{ServerConfig, ServerContext};
use ola_02_channel_poller::PollerConfig;
use ola_telemetry::{init_telemetry, TelemetryConfig};
use ratatui::prelude::*;
use shared_types::UniverseId;
use tracing::info;

use app::{App, View};

/// OLA channel monitor
#[derive(Parser, Debug)]
#[command(name = "ola-tui")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the OLA web server [default: $OLA_SERVER_URL or http://localhost:9090]
    #[arg(long)]
    server_url: Option<String>,

    /// Universe to open on start
    #[arg(long)]
    universe: Option<String>,

    /// Channel poll period in milliseconds
    #[arg(long, default_value = "100")]
    poll_ms: u64,

    /// Levels above this are drawn as bright cells
    #[arg(long, default_value = "90")]
    threshold: u8,

    /// Overview refresh interval in milliseconds
    #[arg(long, default_value = "10000")]
    refresh_ms: u64,

    /// Log file (the terminal is taken by the UI)
    #[arg(long, default_value = "ola-tui.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _telemetry = init_telemetry(
        TelemetryConfig::from_env()
            .with_service_name("ola-tui")
            .with_log_file(args.log_file.clone()),
    )
    .context("Failed to initialise logging")?;

    let mut server_config = ServerConfig::from_env();
    if let Some(url) = &args.server_url {
        server_config = ServerConfig::new(url)
            .context("Invalid --server-url")?
            .with_timeout(server_config.timeout);
    }
    let context = ServerContext::new(server_config).context("Failed to create server client")?;

    let poller_config = PollerConfig::default()
        .with_period(Duration::from_millis(args.poll_ms))
        .with_display_threshold(args.threshold);
    let mut app = App::new(context, poller_config).context("Invalid poller settings")?;
    info!(server = %app.server_url(), "ola-tui starting");

    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    if let Some(universe) = args.universe {
        app.open_channels(UniverseId::new(universe))?;
    }

    let refresh_interval = Duration::from_millis(args.refresh_ms);
    let result = run_app(&mut terminal, &mut app, refresh_interval).await;

    app.close_channels();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

/// Main application loop.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    refresh_interval: Duration,
) -> Result<()> {
    app.refresh().await;

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        app.drain_events();

        handle_terminal_events(app, Duration::from_millis(50)).await?;

        if app.view == View::Overview && app.last_refresh.elapsed() >= refresh_interval {
            app.refresh().await;
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Handle terminal key events.
async fn handle_terminal_events(app: &mut App, poll_timeout: Duration) -> Result<()> {
    if !event::poll(poll_timeout)? {
        return Ok(());
    }

    let Event::Key(key) = event::read()? else {
        return Ok(());
    };

    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    match (app.view, key.code) {
        (_, KeyCode::Char('q') | KeyCode::Char('Q')) => {
            app.should_quit = true;
        }
        (View::Overview, KeyCode::Char('r') | KeyCode::Char('R')) => {
            app.refresh().await;
        }
        (View::Channels, KeyCode::Enter) => {
            app.submit_keypad().await;
        }
        _ => app.on_key(key.code)?,
    }

    Ok(())
}
