//! ghlookup-tui - Terminal UI for ghlookup
//!
//! This crate provides the ratatui-based terminal interface. It owns the
//! terminal, polls input, renders [`ghlookup_app::AppState`] and drives the
//! application's message loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
