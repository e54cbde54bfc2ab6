//! api-term - interactive OpenAPI endpoint runner
//!
//! One thread, one loop: read a terminal event, let the app actor apply it
//! (awaiting any HTTP call in-line), redraw.

use std::io;

use clap::Parser;
use crossterm::{
    event,
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use api_term::app::AppActor;
use api_term::config::{CliArgs, Config};
use api_term::constants::LOG_FILE;
use api_term::discovery::load_catalog;
use api_term::messages::ui_events::to_ui_event;
use api_term::messages::UiEvent;
use api_term::network::client::{create_client, HttpInvoker, Invoker};
use api_term::ui::draw_ui;

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config = Config::load(CliArgs::parse())?;
    tracing::info!(
        base_url = %config.base_url,
        spec_file = %config.spec_file,
        spec_urls = ?config.spec_urls,
        global_params = config.global_params.len(),
        "Starting"
    );

    let catalog = load_catalog(
        std::slice::from_ref(&config.spec_file),
        &config.spec_urls,
        &create_client(config.timeout),
    )
    .await;
    tracing::info!(endpoints = catalog.len(), "Catalog loaded");

    let actor = AppActor::new(&config, catalog, HttpInvoker::new(config.timeout));

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run_ui_loop(&mut terminal, actor).await
}

/// Run the event loop until the actor reports quit
async fn run_ui_loop<I: Invoker>(
    terminal: &mut Terminal<impl Backend>,
    mut actor: AppActor<I>,
) -> anyhow::Result<()> {
    let (width, height) = terminal::size()?;
    actor.handle_event(UiEvent::Resize(width, height)).await;

    loop {
        terminal.draw(|f| draw_ui(f, actor.state(), actor.catalog()))?;

        let Some(event) = to_ui_event(event::read()?) else {
            continue;
        };
        if actor.handle_event(event).await {
            break;
        }
    }

    Ok(())
}
