//! A file grid wrapped in a right-click context menu, with a per-row
//! action menu bar in its last column.
//!
//! Run the binary for the interactive view, or pass `--snapshot` to print a
//! single rendered frame and exit.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::config::AppConfig;
use crate::ui::{example, menu_bar::MenuBarTheme};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "File grid with context and row menus")]
struct Cli {
    /// Print one rendered frame to stdout and exit.
    #[arg(long)]
    snapshot: bool,

    /// Snapshot width in cells.
    #[arg(long, default_value_t = 60)]
    width: u16,

    /// Snapshot height in cells.
    #[arg(long, default_value_t = 12)]
    height: u16,

    /// Config file to read instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Menu bar theme (`default` or `tertiary`).
    #[arg(long)]
    theme: Option<MenuBarTheme>,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only emits when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref());
    if let Some(theme) = cli.theme {
        config.menu_bar_theme = Some(theme);
    }
    let mut state = AppState::new(config)?;
    tracing::debug!(theme = state.menu_bar_theme.name(), "view built");

    // ── snapshot mode ─────────────────────────────────────────
    if cli.snapshot {
        print!("{}", example::snapshot(&mut state, cli.width, cli.height));
        return Ok(());
    }

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let mut events = spawn_event_reader(Duration::from_millis(100));

    // ── event loop ────────────────────────────────────────────
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            example::render(&mut state, area, frame.buffer_mut());
        })?;

        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(k) => handler::handle_key(&mut state, k),
            AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
            AppEvent::Resize(_, _) => {}
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
