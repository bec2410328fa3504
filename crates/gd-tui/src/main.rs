mod api_client;
mod app;
mod panels;
mod poller;
mod projector;
mod state;
mod ui;
mod widgets;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::api_client::{MetricsClient, DEFAULT_METRICS_URL};
use crate::app::App;
use crate::poller::{PollUpdate, Poller, POLL_INTERVAL};

fn main() -> Result<()> {
    // Parse CLI args (simple, no clap dependency).
    let args: Vec<String> = std::env::args().collect();
    let offline = args.iter().any(|a| a == "--offline");
    let api_url = args
        .iter()
        .position(|a| a == "--api")
        .and_then(|i| args.get(i + 1))
        .cloned()
        .unwrap_or_else(|| DEFAULT_METRICS_URL.to_string());

    gd_telemetry::logging::init_logging("gd-tui", "warn");

    // Set up panic hook to restore terminal on panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let result = run(offline, &api_url);

    restore_terminal()?;
    result
}

fn run(offline: bool, api_url: &str) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(offline);
    let poller = (!offline).then(|| Poller::spawn(MetricsClient::new(api_url), POLL_INTERVAL));

    loop {
        if let Some(ref poller) = poller {
            while let Ok(update) = poller.updates().try_recv() {
                apply_logged(&mut app, update);
            }
        }

        terminal.draw(|frame| ui::render(frame, &app))?;

        if ct_event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = ct_event::read()? {
                app.on_key(key);
            }
        }

        if app.take_refresh_request() {
            if let Some(ref poller) = poller {
                poller.refresh_now();
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Dropping the poller signals its thread and joins it.
    drop(poller);
    Ok(())
}

fn apply_logged(app: &mut App, update: PollUpdate) {
    if let PollUpdate::Snapshot(ref snapshot) = update {
        tracing::debug!(empty = snapshot.is_empty(), "metrics snapshot applied");
    }
    app.apply_update(update);
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    Ok(())
}
