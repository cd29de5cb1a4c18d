//! Lookup handlers
//!
//! Starting a lookup registers it with the navigator and hands the event
//! loop an action. Applying a result first asks the navigator whether the
//! result is still wanted.

use ghlookup_core::prelude::*;
use ghlookup_core::{AvatarImage, FetchResult, Relation, UserProfile, UserSummary};

use crate::navigation::{Notice, PendingKind, PresentedView, RequestId, Slot, ViewId};
use crate::presenter::{ListPresenter, ProfilePresenter};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Start a profile lookup from `slot`
pub fn start_profile_lookup(state: &mut AppState, slot: Slot, target: String) -> UpdateResult {
    let request = state.navigator.begin_fetch(
        slot,
        PendingKind::Profile {
            target: target.clone(),
        },
    );
    debug!("{} looks up profile '{}'", request, target);
    UpdateResult::action(UpdateAction::FetchProfile { request, target })
}

/// Followers/following activation on the top profile view
pub fn handle_select_relation(state: &mut AppState, relation: Relation) -> UpdateResult {
    let Some(record) = state.navigator.top() else {
        return UpdateResult::none();
    };
    let PresentedView::Profile(profile) = &record.view else {
        return UpdateResult::none();
    };
    let view = record.id;

    let Some(selection) = profile.select(relation) else {
        debug!("{} has no {} URL, ignoring", profile.login(), relation);
        return UpdateResult::none();
    };

    let request = state.navigator.begin_fetch(
        Slot::View(view),
        PendingKind::List {
            owner: selection.owner,
            relation,
        },
    );
    UpdateResult::action(UpdateAction::FetchList {
        request,
        url: selection.url,
        relation,
    })
}

/// Activate row `index` of the top list view; out-of-range is ignored
pub fn handle_select_row(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(record) = state.navigator.top_mut() else {
        return UpdateResult::none();
    };
    let view = record.id;
    let PresentedView::List(list) = &mut record.view else {
        return UpdateResult::none();
    };

    if !list.select(index) {
        debug!("Row {} out of range ({} rows), ignoring", index, list.users().len());
        return UpdateResult::none();
    }
    match list.activate_selected() {
        Some(row) => start_profile_lookup(state, Slot::View(view), row.login),
        None => UpdateResult::none(),
    }
}

/// Activate the row under the cursor of the top list view
pub fn handle_activate_selected(state: &mut AppState) -> UpdateResult {
    let Some(record) = state.navigator.top() else {
        return UpdateResult::none();
    };
    let view = record.id;
    let PresentedView::List(list) = &record.view else {
        return UpdateResult::none();
    };
    match list.activate_selected() {
        Some(row) => start_profile_lookup(state, Slot::View(view), row.login),
        None => UpdateResult::none(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Results
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_profile_fetched(
    state: &mut AppState,
    request: RequestId,
    result: FetchResult<UserProfile>,
) -> UpdateResult {
    let Some(pending) = state.navigator.accept(request) else {
        return UpdateResult::none();
    };

    let profile = match result {
        FetchResult::Success(profile) => profile,
        failure => {
            return show_failure(state, &failure, &pending.kind);
        }
    };

    let probe = state.settings.ui.load_avatars;
    let presenter = ProfilePresenter::new(profile, probe);
    let avatar_url = presenter.avatar_url().map(str::to_string);
    let view = state.navigator.push_profile(presenter);
    info!("Showing profile at depth {}", state.navigator.depth());

    match avatar_url {
        Some(url) => UpdateResult::action(UpdateAction::FetchAvatar { view, url }),
        None => UpdateResult::none(),
    }
}

pub fn handle_list_fetched(
    state: &mut AppState,
    request: RequestId,
    result: FetchResult<Vec<UserSummary>>,
) -> UpdateResult {
    let Some(pending) = state.navigator.accept(request) else {
        return UpdateResult::none();
    };

    let users = match result {
        FetchResult::Success(users) => users,
        failure => {
            return show_failure(state, &failure, &pending.kind);
        }
    };

    let PendingKind::List { owner, relation } = pending.kind else {
        warn!("List result for a profile lookup ({}), dropping", request);
        return UpdateResult::none();
    };

    state
        .navigator
        .push_list(ListPresenter::new(owner, relation, users));
    UpdateResult::none()
}

/// Best-effort: failures only flip the slot, never raise a notice
pub fn handle_avatar_fetched(
    state: &mut AppState,
    view: ViewId,
    avatar: Option<AvatarImage>,
) -> UpdateResult {
    match state.navigator.find_profile_mut(view) {
        Some(profile) => profile.set_avatar(avatar),
        None => trace!("Avatar for {} arrived after the view closed", view),
    }
    UpdateResult::none()
}

fn show_failure<T>(state: &mut AppState, result: &FetchResult<T>, kind: &PendingKind) -> UpdateResult {
    if let Some(notice) = Notice::for_failure(result, kind) {
        warn!("Lookup failed: {}", result.describe());
        state.navigator.show_notice(notice);
    }
    UpdateResult::none()
}
