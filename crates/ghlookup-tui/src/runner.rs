//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use ghlookup_app::config::Settings;
use ghlookup_app::process::process_message;
use ghlookup_app::signals;
use ghlookup_app::{AppState, Message};
use ghlookup_client::{DirectoryClient, HttpTransport};
use ghlookup_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI against the configured API.
///
/// When `initial_username` is given the first lookup starts immediately.
pub async fn run(settings: Settings, initial_username: Option<String>) -> Result<()> {
    let client = Arc::new(DirectoryClient::with_reqwest(
        settings.api.base_url.clone(),
        &settings.api.transport_options(),
    )?);
    info!("Using directory API at {}", client.api_base());

    let mut state = AppState::with_settings(settings);

    // Unified message channel: signal handler and lookup tasks post here
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    if let Some(login) = initial_username {
        process_message(&mut state, Message::LookupUser { login }, &msg_tx, &client);
    }

    let mut term = terminal::init()?;
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, client);
    terminal::restore();

    info!("ghlookup exiting");
    result
}

/// Main event loop
fn run_loop<T>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    client: Arc<DirectoryClient<T>>,
) -> Result<()>
where
    T: HttpTransport + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Lookup results and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &client);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &client);
        }
    }

    Ok(())
}
