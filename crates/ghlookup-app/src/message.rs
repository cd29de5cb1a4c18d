//! Message types for the application (TEA pattern)

use ghlookup_core::{AvatarImage, FetchResult, Relation, UserProfile, UserSummary};

use crate::input_key::InputKey;
use crate::navigation::{RequestId, ViewId};

/// Cursor movement inside a user list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListNav {
    Up,
    Down,
    Top,
    Bottom,
    PageUp,
    PageDown,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Search Messages
    // ─────────────────────────────────────────────────────────
    /// Focus the username input
    OpenSearch,
    /// Leave the username input without submitting
    CancelSearch,
    /// Append a character to the query
    SearchChar(char),
    /// Delete the last character of the query
    SearchBackspace,
    /// Clear the whole query
    SearchClear,
    /// Submit the current query as a username
    SubmitSearch,

    /// Look a user up from the search slot (CLI argument, scripted input)
    LookupUser { login: String },

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Followers/following activation on the current profile
    SelectRelation(Relation),
    /// Move the cursor to a row and activate it
    SelectRow(usize),
    /// Move the cursor in the current list
    ListNavigate(ListNav),
    /// Activate the row under the cursor
    ActivateSelectedRow,
    /// Pop one level (or dismiss whatever overlays the current view)
    Back,
    /// Close the current notice
    DismissNotice,

    // ─────────────────────────────────────────────────────────
    // Fetch Results
    // ─────────────────────────────────────────────────────────
    /// A profile lookup finished
    ProfileFetched {
        request: RequestId,
        result: FetchResult<UserProfile>,
    },
    /// A followers/following lookup finished
    ListFetched {
        request: RequestId,
        result: FetchResult<Vec<UserSummary>>,
    },
    /// An avatar probe finished; `None` when it failed
    AvatarFetched {
        view: ViewId,
        avatar: Option<AvatarImage>,
    },
}
