//! watchtui - terminal client for a remote video catalog
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! watchtui
//!
//! # CLI mode (for automation)
//! watchtui videos --search "music" --json
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use watchtui::api::CatalogClient;
use watchtui::app::{App, FetchIntent, FetchOutcome};
use watchtui::cli::{Cli, Command, Output};
use watchtui::commands;
use watchtui::config::Config;
use watchtui::ui::{home, ThemeFlag};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.is_cli_mode() {
        let output = Output::new(&cli);
        let exit_code = match cli.command {
            Some(Command::Videos(cmd)) => commands::videos_cmd(cmd, &output).await,
            None => watchtui::cli::ExitCode::Success,
        };
        std::process::exit(exit_code.into());
    } else {
        run_tui().await
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui() -> Result<()> {
    let config = Config::load();
    let client = match config.catalog_url {
        Some(ref url) => CatalogClient::with_base_url(url.clone()),
        None => CatalogClient::new(),
    };
    let token = config.bearer_token();

    let theme = ThemeFlag::new(config.dark_theme.unwrap_or(true));
    let mut app = App::new(theme);

    let mut terminal = init_terminal()?;
    let result = run_event_loop(&mut terminal, &mut app, client, token).await;
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, drives fetches, renders UI
async fn run_event_loop(
    terminal: &mut Tui,
    app: &mut App,
    client: CatalogClient,
    token: String,
) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    let (tx, mut rx) = mpsc::unbounded_channel::<FetchOutcome>();

    // View became active: issue the initial fetch
    let intent = app.initialize();
    spawn_fetch(&client, &token, intent, &tx);

    while app.running {
        terminal.draw(|frame| home::render(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    if let Some(intent) = app.handle_key(key) {
                        spawn_fetch(&client, &token, intent, &tx);
                    }
                }
            }
        }

        // Apply completed fetches in arrival order; the last response to
        // land wins when several are in flight
        while let Ok(outcome) = rx.try_recv() {
            app.apply_fetch(outcome);
        }
    }

    Ok(())
}

/// Run one catalog request off the UI loop and report its outcome
fn spawn_fetch(
    client: &CatalogClient,
    token: &str,
    intent: FetchIntent,
    tx: &mpsc::UnboundedSender<FetchOutcome>,
) {
    let client = client.clone();
    let token = token.to_string();
    let tx = tx.clone();

    tokio::spawn(async move {
        let outcome = match client.videos(&token, &intent.query).await {
            Ok(videos) => FetchOutcome::Loaded(videos),
            Err(_) => FetchOutcome::Failed,
        };
        // Receiver gone means the loop exited; nothing to report
        let _ = tx.send(outcome);
    });
}
