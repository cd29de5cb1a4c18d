//! ghlookup-app - Application state and navigation for ghlookup
//!
//! This crate implements the TEA (The Elm Architecture) pattern: key events
//! and lookup results arrive as [`Message`]s, [`handler::update`] applies
//! them to [`AppState`], and any resulting [`UpdateAction`] is run on a
//! background task that reports back over the same channel.
//!
//! ## Public API
//!
//! - [`Navigator`] - View stack, pending-lookup guard, notices
//! - [`ListPresenter`], [`ProfilePresenter`] - Per-view payloads
//! - [`process::process_message`] - Update loop plus action dispatch
//! - [`config`] - `config.toml` loading

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod presenter;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{ListNav, Message};
pub use navigation::{CoordinatorState, Navigator, Notice, NoticeKind, PresentedView, ViewId};
pub use presenter::{AvatarSlot, ListPresenter, ListSource, ProfilePresenter};
pub use state::{AppPhase, AppState, UiMode};
