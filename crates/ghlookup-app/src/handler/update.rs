//! Main update function - handles state transitions (TEA pattern)

use ghlookup_core::prelude::*;

use crate::message::{ListNav, Message};
use crate::navigation::{PresentedView, Slot};
use crate::state::{AppPhase, AppState, UiMode};

use super::{keys::handle_key, lookup, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.navigator.is_loading() {
                state.tick = state.tick.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenSearch => {
            state.search.clear();
            state.ui_mode = UiMode::Search;
            UpdateResult::none()
        }

        Message::CancelSearch => {
            state.search.clear();
            if state.navigator.depth() > 0 || state.navigator.is_loading() {
                state.ui_mode = UiMode::Browse;
            }
            UpdateResult::none()
        }

        Message::SearchChar(c) => {
            state.search.push(c);
            UpdateResult::none()
        }

        Message::SearchBackspace => {
            state.search.backspace();
            UpdateResult::none()
        }

        Message::SearchClear => {
            state.search.clear();
            UpdateResult::none()
        }

        Message::SubmitSearch => {
            let Some(login) = state.search.submission() else {
                debug!("Ignoring blank username");
                return UpdateResult::none();
            };
            state.search.clear();
            state.ui_mode = UiMode::Browse;
            lookup::start_profile_lookup(state, Slot::Search, login)
        }

        Message::LookupUser { login } => {
            let login = login.trim();
            if login.is_empty() {
                debug!("Ignoring blank username");
                return UpdateResult::none();
            }
            state.ui_mode = UiMode::Browse;
            lookup::start_profile_lookup(state, Slot::Search, login.to_string())
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectRelation(relation) => lookup::handle_select_relation(state, relation),

        Message::SelectRow(index) => lookup::handle_select_row(state, index),

        Message::ListNavigate(nav) => {
            if let Some(PresentedView::List(list)) =
                state.navigator.top_mut().map(|r| &mut r.view)
            {
                match nav {
                    ListNav::Up => list.select_previous(),
                    ListNav::Down => list.select_next(),
                    ListNav::Top => list.select_first(),
                    ListNav::Bottom => list.select_last(),
                    ListNav::PageUp => list.page_up(),
                    ListNav::PageDown => list.page_down(),
                }
            }
            UpdateResult::none()
        }

        Message::ActivateSelectedRow => lookup::handle_activate_selected(state),

        Message::Back => {
            if state.navigator.notice().is_some() {
                return UpdateResult::message(Message::DismissNotice);
            }
            if state.is_searching() {
                return UpdateResult::message(Message::CancelSearch);
            }
            if let Some(record) = state.navigator.pop() {
                debug!("Popped {} ({})", record.id, record.view.label());
            }
            if state.navigator.depth() == 0 && !state.navigator.is_loading() {
                state.ui_mode = UiMode::Search;
            }
            UpdateResult::none()
        }

        Message::DismissNotice => {
            state.navigator.dismiss_notice();
            if state.navigator.depth() == 0 && !state.navigator.is_loading() {
                state.ui_mode = UiMode::Search;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Fetch Results
        // ─────────────────────────────────────────────────────────
        Message::ProfileFetched { request, result } => {
            lookup::handle_profile_fetched(state, request, result)
        }

        Message::ListFetched { request, result } => {
            lookup::handle_list_fetched(state, request, result)
        }

        Message::AvatarFetched { view, avatar } => {
            lookup::handle_avatar_fetched(state, view, avatar)
        }
    }
}
