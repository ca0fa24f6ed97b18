//! Unbooked waitlist TUI
//!
//! A Ratatui-based wizard that collects a waitlist lead, projects the
//! revenue uplift of dynamic pricing, and posts the answers to an
//! ingestion endpoint.

mod app;
mod config;
mod platform;
mod revenue;
mod state;
mod submission;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use config::{WaitlistConfig, ENDPOINT_ENV};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::{AppState, Route};
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use submission::HttpSubmissionClient;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "waitlist-tui")]
#[command(about = "Join the Unbooked waitlist from your terminal")]
#[command(version)]
struct Cli {
    /// Ingestion endpoint that receives the JSON submissions
    #[arg(long, env = ENDPOINT_ENV)]
    endpoint: Option<String>,

    /// Open the register-interest page instead of the wizard
    #[arg(long)]
    register_interest: bool,

    /// Skip the loading screen
    #[arg(long)]
    no_splash: bool,

    /// Persist the resolved endpoint to the config file before starting
    #[arg(long)]
    save_config: bool,
}

/// The TUI owns stdout, so logs go to a file (or nowhere)
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist_tui=info".into());

    let log_file = WaitlistConfig::log_path().and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match log_file {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::sink))
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut config = WaitlistConfig::load().unwrap_or_else(|e| {
        warn!("Ignoring unreadable config file: {}", e);
        WaitlistConfig::default()
    });

    let endpoint = config.resolve_endpoint(cli.endpoint.as_deref());
    if cli.save_config {
        config.endpoint = Some(endpoint.clone());
        config.save()?;
        info!(%endpoint, "Saved endpoint to config");
    }

    let route = if cli.register_interest {
        Route::RegisterInterest
    } else {
        Route::Wizard
    };
    let show_splash = !(cli.no_splash || config.skip_splash());
    let client = Arc::new(HttpSubmissionClient::new(endpoint));
    info!(endpoint = client.endpoint(), "Using ingestion endpoint");
    let mut app = App::new(
        AppState::new(route, config.country_code()),
        client,
        show_splash,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let terminal_height = terminal.size()?.height;

        // Update splash animation if active
        let in_splash = app.in_splash();
        if in_splash {
            app.update_splash(terminal_height);
        }

        // Apply finished background sends before drawing
        app.drain_events();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while something animates (16ms = ~60fps)
        let poll_duration = if in_splash || app.state.is_submitting() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    info!(session_id = %app.session_id, "Quit requested");
                    return Ok(());
                }

                app.handle_key(key).await?;
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
