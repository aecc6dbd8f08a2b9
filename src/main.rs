//! RPM Wizard - terminal wizard for drafting Indonesian lesson plans
//!
//! Collects the plan data over five steps, asks a generative model for the
//! full Perencanaan Pembelajaran Mendalam and exports it to the clipboard.

mod app;
mod config;
mod generation;
mod import;
mod platform;
mod report;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::WizardConfig;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Log file in the data directory; the terminal belongs to the UI.
/// Runs before the alternate screen, so failures still reach stderr.
fn log_writer() -> Box<dyn Write + Send> {
    let Some(path) = config::log_path() else {
        eprintln!("rpm-wizard: no data directory, logging disabled");
        return Box::new(io::sink());
    };
    match open_log(&path) {
        Ok(file) => Box::new(file),
        Err(e) => {
            eprintln!("rpm-wizard: cannot open log {}: {e}", path.display());
            Box::new(io::sink())
        }
    }
}

fn open_log(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rpm_wizard=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log_writer())),
        )
        .init();

    let config = match WizardConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring unreadable config: {e:#}");
            WizardConfig::default()
        }
    }
    .with_env_overrides();
    if config.api_key.is_none() {
        warn!("No API key configured; generation requests will fail");
    }
    info!(model = config.model(), "Starting");

    let mut app = App::new(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

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
        // Results of finished generation tasks
        app.drain_completions();

        terminal.draw(|frame| {
            ui::sync_scroll(frame.area(), app);
            ui::draw(frame, app);
        })?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                // Global quit: Ctrl+C
                Event::Key(key)
                    if key.kind == KeyEventKind::Press
                        && key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    app.quit();
                }
                Event::Key(key) => app.handle_key(key).await?,
                Event::Paste(text) => app.handle_paste(&text),
                _ => {}
            }
        }

        if app.should_quit() {
            info!("Exiting");
            return Ok(());
        }
    }
}
