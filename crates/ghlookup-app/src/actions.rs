//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every lookup runs on its own tokio task and reports back with a
//! [`Message`]. A closed channel means the event loop is gone, so send
//! failures are only logged.

use std::sync::Arc;

use tokio::sync::mpsc;

use ghlookup_client::{DirectoryClient, HttpTransport};
use ghlookup_core::prelude::*;

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<T>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    client: Arc<DirectoryClient<T>>,
) where
    T: HttpTransport + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchProfile { request, target } => {
            tokio::spawn(async move {
                let result = client.fetch_profile(&target).await;
                if let Err(e) = post(&msg_tx, Message::ProfileFetched { request, result }).await {
                    debug!("Dropping result of {}: {}", request, e);
                }
            });
        }

        UpdateAction::FetchList {
            request,
            url,
            relation,
        } => {
            tokio::spawn(async move {
                let result = client.fetch_list(&url, relation).await;
                if let Err(e) = post(&msg_tx, Message::ListFetched { request, result }).await {
                    debug!("Dropping result of {}: {}", request, e);
                }
            });
        }

        UpdateAction::FetchAvatar { view, url } => {
            tokio::spawn(async move {
                let avatar = match client.fetch_avatar(&url).await {
                    Ok(image) => {
                        debug!("Avatar for {}: {}", view, image.summary());
                        Some(image)
                    }
                    Err(e) if e.is_recoverable() => {
                        warn!("Avatar probe failed for {}: {}", url, e);
                        None
                    }
                    Err(e) => {
                        error!("Avatar probe for {} could not run: {}", url, e);
                        None
                    }
                };
                if let Err(e) = post(&msg_tx, Message::AvatarFetched { view, avatar }).await {
                    trace!("Dropping avatar for {}: {}", view, e);
                }
            });
        }
    }
}

/// Hand a message back to the event loop
pub(crate) async fn post(msg_tx: &mpsc::Sender<Message>, message: Message) -> Result<()> {
    msg_tx
        .send(message)
        .await
        .map_err(|_| Error::channel_send("event loop closed"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_post_to_closed_loop_is_channel_error() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let err = post(&tx, Message::Tick).await.unwrap_err();
        assert!(matches!(err, Error::ChannelSend { .. }));
    }
}
