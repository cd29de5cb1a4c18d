//! Navigation coordinator
//!
//! Owns the stack of presented views, the single in-flight lookup and the
//! notice overlay. The coordinator state (`Idle`, `Loading`, ...) is derived
//! from those three pieces rather than stored, so it cannot drift.

use std::fmt;

use ghlookup_core::prelude::*;
use ghlookup_core::{FailureKind, FetchResult, Relation};

use crate::presenter::{ListPresenter, ProfilePresenter};

/// Identifies a presented view for the lifetime of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// Identifies one lookup; results carrying an older id are stale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req#{}", self.0)
    }
}

/// Where a lookup was started from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Username input
    Search,
    /// A presented view (profile or list)
    View(ViewId),
}

/// What the in-flight lookup will produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingKind {
    Profile { target: String },
    List { owner: String, relation: Relation },
}

/// The one lookup whose result will be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    pub id: RequestId,
    pub slot: Slot,
    pub kind: PendingKind,
}

impl PendingFetch {
    /// Short status text, e.g. `"Looking up octocat…"`
    pub fn describe(&self) -> String {
        match &self.kind {
            PendingKind::Profile { target } => format!("Looking up {target}…"),
            PendingKind::List { owner, relation } => {
                format!("Loading {} of {owner}…", relation.label())
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notices
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    NotFound,
    Network,
    UnexpectedResponse,
}

impl From<FailureKind> for NoticeKind {
    fn from(kind: FailureKind) -> Self {
        match kind {
            FailureKind::NotFound => NoticeKind::NotFound,
            FailureKind::Transport => NoticeKind::Network,
            FailureKind::Decode => NoticeKind::UnexpectedResponse,
        }
    }
}

/// Dismissible failure notice shown over the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    /// Notice titled after its kind
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        let title = match kind {
            NoticeKind::NotFound => "User Not Found",
            NoticeKind::Network => "Network Error",
            NoticeKind::UnexpectedResponse => "Unexpected Response",
        };
        Self {
            kind,
            title,
            message: message.into(),
        }
    }

    /// Notice for a failed lookup; `None` on success
    pub fn for_failure<T>(result: &FetchResult<T>, pending: &PendingKind) -> Option<Self> {
        let message = match result {
            FetchResult::Success(_) => return None,
            FetchResult::NotFound => match pending {
                PendingKind::Profile { target } => format!("No user named '{target}' exists."),
                PendingKind::List { owner, relation } => {
                    format!("The {} list of {owner} could not be found.", relation.label())
                }
            },
            FetchResult::TransportError(msg) | FetchResult::DecodeError(msg) => msg.clone(),
        };
        let mut notice = Self::new(result.failure_kind()?.into(), message);
        if notice.kind == NoticeKind::NotFound && matches!(pending, PendingKind::List { .. }) {
            notice.title = "List Not Found";
        }
        Some(notice)
    }

    pub fn title(&self) -> &'static str {
        self.title
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// View Stack
// ─────────────────────────────────────────────────────────────────────────────

/// Payload of one navigation level
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentedView {
    Profile(ProfilePresenter),
    List(ListPresenter),
}

impl PresentedView {
    /// Breadcrumb label
    pub fn label(&self) -> String {
        match self {
            PresentedView::Profile(p) => p.login().to_string(),
            PresentedView::List(l) => l.relation().label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRecord {
    pub id: ViewId,
    pub view: PresentedView,
}

/// Observable coordinator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    Idle,
    Loading,
    ProfileShown,
    ListShown,
    NotFoundShown,
    ErrorShown,
}

/// Navigation stack plus the stale-result guard
#[derive(Debug, Default)]
pub struct Navigator {
    stack: Vec<ViewRecord>,
    pending: Option<PendingFetch>,
    notice: Option<Notice>,
    next_view: u64,
    next_request: u64,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CoordinatorState {
        if let Some(notice) = &self.notice {
            return match notice.kind {
                NoticeKind::NotFound => CoordinatorState::NotFoundShown,
                _ => CoordinatorState::ErrorShown,
            };
        }
        if self.pending.is_some() {
            return CoordinatorState::Loading;
        }
        match self.top().map(|r| &r.view) {
            None => CoordinatorState::Idle,
            Some(PresentedView::Profile(_)) => CoordinatorState::ProfileShown,
            Some(PresentedView::List(_)) => CoordinatorState::ListShown,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Pending lookup
    // ─────────────────────────────────────────────────────────

    /// Register a new lookup, superseding any in flight
    pub fn begin_fetch(&mut self, slot: Slot, kind: PendingKind) -> RequestId {
        self.next_request += 1;
        let id = RequestId(self.next_request);
        if let Some(old) = self.pending.replace(PendingFetch { id, slot, kind }) {
            debug!("{} supersedes {}", id, old.id);
        }
        id
    }

    /// Claim the pending lookup for a result; `None` means the result is stale
    pub fn accept(&mut self, id: RequestId) -> Option<PendingFetch> {
        match &self.pending {
            Some(pending) if pending.id == id => self.pending.take(),
            _ => {
                debug!("Discarding stale result for {}", id);
                None
            }
        }
    }

    pub fn pending(&self) -> Option<&PendingFetch> {
        self.pending.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    // ─────────────────────────────────────────────────────────
    // Stack
    // ─────────────────────────────────────────────────────────

    pub fn push_profile(&mut self, presenter: ProfilePresenter) -> ViewId {
        self.push(PresentedView::Profile(presenter))
    }

    pub fn push_list(&mut self, presenter: ListPresenter) -> ViewId {
        self.push(PresentedView::List(presenter))
    }

    fn push(&mut self, view: PresentedView) -> ViewId {
        self.next_view += 1;
        let id = ViewId(self.next_view);
        self.stack.push(ViewRecord { id, view });
        id
    }

    /// Pop one level. A lookup started from the popped view is dropped.
    pub fn pop(&mut self) -> Option<ViewRecord> {
        let record = self.stack.pop()?;
        if self
            .pending
            .as_ref()
            .is_some_and(|p| p.slot == Slot::View(record.id))
        {
            debug!("Dropping lookup started from popped {}", record.id);
            self.pending = None;
        }
        Some(record)
    }

    pub fn top(&self) -> Option<&ViewRecord> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut ViewRecord> {
        self.stack.last_mut()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn views(&self) -> &[ViewRecord] {
        &self.stack
    }

    /// Profile presenter still on the stack under `id`
    pub fn find_profile_mut(&mut self, id: ViewId) -> Option<&mut ProfilePresenter> {
        self.stack
            .iter_mut()
            .find(|r| r.id == id)
            .and_then(|r| match &mut r.view {
                PresentedView::Profile(p) => Some(p),
                PresentedView::List(_) => None,
            })
    }

    /// Labels of every level, root first
    pub fn breadcrumbs(&self) -> Vec<String> {
        self.stack.iter().map(|r| r.view.label()).collect()
    }

    // ─────────────────────────────────────────────────────────
    // Notice
    // ─────────────────────────────────────────────────────────

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Close the notice, revealing the state beneath it
    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}
