//! Message processing
//!
//! Runs a message through the TEA update loop and dispatches any resulting
//! actions to background tasks.

use std::sync::Arc;

use tokio::sync::mpsc;

use ghlookup_client::{DirectoryClient, HttpTransport};

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<T>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &Arc<DirectoryClient<T>>,
) where
    T: HttpTransport + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
