//! Main render/view function (View in TEA pattern)


use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use ghlookup_app::{AppState, PresentedView};

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: everything drawn is derived from it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let crumbs = state.navigator.breadcrumbs();
    frame.render_widget(widgets::MainHeader::new(&crumbs), areas.header);

    let body_focused = !state.is_searching();
    match state.navigator.top().map(|r| &r.view) {
        Some(PresentedView::Profile(profile)) => {
            frame.render_widget(
                widgets::ProfileCard::new(profile).focused(body_focused),
                areas.body,
            );
        }
        Some(PresentedView::List(list)) => {
            frame.render_widget(
                widgets::UserList::new(list, list.title())
                    .selected(list.selected())
                    .empty_hint(list.empty_hint())
                    .focused(body_focused),
                areas.body,
            );
        }
        None => render_welcome(frame, areas.body),
    }

    frame.render_widget(
        widgets::SearchBar::new(state.search.query()).focused(state.is_searching()),
        areas.search,
    );
    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    if let Some(notice) = state.navigator.notice() {
        frame.render_widget(widgets::NoticeModal::new(notice), area);
    }
}

/// Body shown before the first successful lookup
fn render_welcome(frame: &mut Frame, area: ratatui::layout::Rect) {
    let block = styles::glass_block(false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::default(),
        Line::from(Span::styled("Look up a user", styles::title())),
        Line::default(),
        Line::from(Span::styled(
            "Type a username below and press Enter.",
            styles::text_secondary(),
        )),
        Line::from(Span::styled(
            "Browse followers and following from any profile.",
            styles::text_muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
