//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::navigation::{CoordinatorState, Navigator};

/// Spinner frames for the loading indicator
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Longest username the input accepts
pub const MAX_QUERY_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Where keyboard input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Username input has focus
    #[default]
    Search,

    /// Navigating the view stack
    Browse,
}

/// Text typed into the username input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    query: String,
}

impl SearchInput {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn push(&mut self, c: char) {
        if !c.is_control() && self.query.chars().count() < MAX_QUERY_LEN {
            self.query.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.query.pop();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// Trimmed query, `None` when blank
    pub fn submission(&self) -> Option<String> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    pub ui_mode: UiMode,

    pub search: SearchInput,

    /// View stack, pending lookup, notice
    pub navigator: Navigator,

    /// Application settings from config file
    pub settings: Settings,

    /// Loading spinner frame counter
    pub tick: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Search,
            search: SearchInput::default(),
            navigator: Navigator::new(),
            settings,
            tick: 0,
        }
    }

    pub fn coordinator_state(&self) -> CoordinatorState {
        self.navigator.state()
    }

    pub fn is_searching(&self) -> bool {
        self.ui_mode == UiMode::Search
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.coordinator_state(), CoordinatorState::Idle);
        assert!(state.is_searching());
        assert!(!state.should_quit());
    }

    #[test]
    fn test_search_submission_trims() {
        let mut search = SearchInput::default();
        for c in "  octocat ".chars() {
            search.push(c);
        }
        assert_eq!(search.submission().as_deref(), Some("octocat"));

        search.clear();
        search.push(' ');
        assert_eq!(search.submission(), None);
    }

    #[test]
    fn test_search_input_limits() {
        let mut search = SearchInput::default();
        search.push('\n');
        assert_eq!(search.query(), "");
        for _ in 0..MAX_QUERY_LEN + 5 {
            search.push('a');
        }
        assert_eq!(search.query().len(), MAX_QUERY_LEN);
        search.backspace();
        assert_eq!(search.query().len(), MAX_QUERY_LEN - 1);
    }

    #[test]
    fn test_spinner_wraps() {
        let mut state = AppState::new();
        let first = state.spinner_frame();
        state.tick = SPINNER_FRAMES.len();
        assert_eq!(state.spinner_frame(), first);
    }
}
