//! Status bar widget
//!
//! Shows what the app is doing (idle, loading, showing a view) and the keys
//! that apply right now.

use ghlookup_app::{AppState, CoordinatorState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Status bar widget showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// State indicator with appropriate styling
    fn state_indicator(&self) -> Span<'static> {
        if let Some(pending) = self.state.navigator.pending() {
            return Span::styled(
                format!("{} {}", self.state.spinner_frame(), pending.describe()),
                styles::loading(),
            );
        }
        let label = match self.state.coordinator_state() {
            CoordinatorState::Idle => "● Ready",
            CoordinatorState::ProfileShown => "● Profile",
            CoordinatorState::ListShown => "● List",
            CoordinatorState::NotFoundShown | CoordinatorState::ErrorShown => "● Notice",
            CoordinatorState::Loading => "● Loading",
        };
        Span::styled(label, styles::ready())
    }

    /// `(key, action)` pairs for the current mode
    fn key_hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.state.navigator.notice().is_some() {
            return &[("Enter", "dismiss")];
        }
        if self.state.is_searching() {
            return &[("Enter", "look up"), ("Esc", "cancel"), ("^C", "quit")];
        }
        match self.state.coordinator_state() {
            CoordinatorState::ProfileShown => &[
                ("f", "followers"),
                ("g", "following"),
                ("/", "search"),
                ("Esc", "back"),
                ("q", "quit"),
            ],
            CoordinatorState::ListShown => &[
                ("↑↓", "move"),
                ("Enter", "open"),
                ("/", "search"),
                ("Esc", "back"),
                ("q", "quit"),
            ],
            _ => &[("/", "search"), ("q", "quit")],
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" "), self.state_indicator(), Span::raw("  ")];
        for (key, action) in self.key_hints() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
