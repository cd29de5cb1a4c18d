//! Key event handlers for different UI modes

use ghlookup_core::Relation;

use crate::input_key::InputKey;
use crate::message::{ListNav, Message};
use crate::navigation::PresentedView;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // A notice captures input until dismissed
    if state.navigator.notice().is_some() {
        return handle_key_notice(key);
    }

    match state.ui_mode {
        UiMode::Search => handle_key_search_input(key),
        UiMode::Browse => handle_key_browse(state, key),
    }
}

/// Handle key events while a notice is shown
fn handle_key_notice(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ' | 'q') => {
            Some(Message::DismissNotice)
        }
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelSearch),
        InputKey::Enter => Some(Message::SubmitSearch),
        InputKey::Backspace => Some(Message::SearchBackspace),

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::SearchClear),

        InputKey::Char(c) => Some(Message::SearchChar(c)),

        // Force quit even in search mode
        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events while browsing the view stack
fn handle_key_browse(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Char('/') | InputKey::Char('s') => return Some(Message::OpenSearch),
        InputKey::Esc | InputKey::Backspace | InputKey::Left | InputKey::Char('h') => {
            return Some(Message::Back)
        }
        _ => {}
    }

    match state.navigator.top().map(|r| &r.view) {
        Some(PresentedView::Profile(_)) => handle_key_profile(key),
        Some(PresentedView::List(_)) => handle_key_list(key),
        None => None,
    }
}

fn handle_key_profile(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('f') | InputKey::Char('1') => {
            Some(Message::SelectRelation(Relation::Followers))
        }
        InputKey::Char('g') | InputKey::Char('2') => {
            Some(Message::SelectRelation(Relation::Following))
        }
        _ => None,
    }
}

fn handle_key_list(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ListNavigate(ListNav::Up)),
        InputKey::Down | InputKey::Char('j') => Some(Message::ListNavigate(ListNav::Down)),
        InputKey::Home | InputKey::Char('g') => Some(Message::ListNavigate(ListNav::Top)),
        InputKey::End | InputKey::Char('G') => Some(Message::ListNavigate(ListNav::Bottom)),
        InputKey::PageUp => Some(Message::ListNavigate(ListNav::PageUp)),
        InputKey::PageDown => Some(Message::ListNavigate(ListNav::PageDown)),
        InputKey::Enter | InputKey::Right | InputKey::Char('l') => {
            Some(Message::ActivateSelectedRow)
        }
        _ => None,
    }
}
