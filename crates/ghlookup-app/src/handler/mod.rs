//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `lookup`: Starting lookups and applying their results

pub(crate) mod keys;
pub(crate) mod lookup;
pub(crate) mod update;


use ghlookup_core::Relation;

use crate::message::Message;
use crate::navigation::{RequestId, ViewId};

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Look up a profile by username or resource URL
    FetchProfile { request: RequestId, target: String },

    /// Fetch a followers/following list.
    ///
    /// `url` is already resolved (template removed).
    FetchList {
        request: RequestId,
        url: String,
        relation: Relation,
    },

    /// Probe the avatar of a profile view.
    ///
    /// Fire-and-forget: the result is matched back to `view` and dropped if
    /// the view is gone.
    FetchAvatar { view: ViewId, url: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
