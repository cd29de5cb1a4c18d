//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title + breadcrumb (glass container)
    pub header: Rect,

    /// Current view: profile card, user list or welcome text
    pub body: Rect,

    /// Username input (glass container)
    pub search: Rect,

    /// Single-row status and key hints
    pub status: Rect,
}

/// Split the screen top to bottom: header, body, search bar, status line
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        search: chunks[2],
        status: chunks[3],
    }
}
