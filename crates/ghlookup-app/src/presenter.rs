//! List and profile presenters
//!
//! Presenters own the payload they display and never fetch anything
//! themselves. They answer render queries and turn activations into the
//! data the coordinator needs to start the next lookup.

use ghlookup_core::{AvatarImage, Relation, UserProfile, UserSummary};

/// Rows moved by PageUp/PageDown
pub const LIST_PAGE_SIZE: usize = 10;

// ─────────────────────────────────────────────────────────────────────────────
// List Presenter
// ─────────────────────────────────────────────────────────────────────────────

/// A row the viewer activated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActivated {
    /// Zero-based row index
    pub index: usize,
    /// Login shown on that row
    pub login: String,
}

/// Capability interface of a selectable list
pub trait ListSource {
    fn row_count(&self) -> usize;

    /// Text of row `index`, `None` when out of range
    fn row_at(&self, index: usize) -> Option<&str>;

    /// Activation of row `index`; out-of-range indices yield nothing
    fn on_activate(&self, index: usize) -> Option<RowActivated>;

    fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}

/// Followers or following of one user, with a keyboard cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPresenter {
    owner: String,
    relation: Relation,
    users: Vec<UserSummary>,
    selected: usize,
}

impl ListPresenter {
    pub fn new(owner: impl Into<String>, relation: Relation, users: Vec<UserSummary>) -> Self {
        Self {
            owner: owner.into(),
            relation,
            users,
            selected: 0,
        }
    }

    /// Login of the profile this list belongs to
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn users(&self) -> &[UserSummary] {
        &self.users
    }

    /// `"Followers of octocat"` / `"Following of octocat"`
    pub fn title(&self) -> String {
        self.relation.title_for(&self.owner)
    }

    /// Hint rendered in place of rows when the list is empty
    pub fn empty_hint(&self) -> String {
        match self.relation {
            Relation::Followers => format!("{} has no followers", self.owner),
            Relation::Following => format!("{} is not following anyone", self.owner),
        }
    }

    /// Cursor row; meaningless when the list is empty
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the cursor to `index`; returns false when out of range
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.users.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(self.last_index());
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.last_index();
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(LIST_PAGE_SIZE);
    }

    pub fn page_down(&mut self) {
        self.selected = (self.selected + LIST_PAGE_SIZE).min(self.last_index());
    }

    /// Activation of the row under the cursor
    pub fn activate_selected(&self) -> Option<RowActivated> {
        self.on_activate(self.selected)
    }

    fn last_index(&self) -> usize {
        self.users.len().saturating_sub(1)
    }
}

impl ListSource for ListPresenter {
    fn row_count(&self) -> usize {
        self.users.len()
    }

    fn row_at(&self, index: usize) -> Option<&str> {
        self.users.get(index).map(|u| u.login.as_str())
    }

    fn on_activate(&self, index: usize) -> Option<RowActivated> {
        self.users.get(index).map(|u| RowActivated {
            index,
            login: u.login.clone(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Profile Presenter
// ─────────────────────────────────────────────────────────────────────────────

/// Best-effort avatar state of a profile view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarSlot {
    /// Probe in flight
    Pending,
    Loaded(AvatarImage),
    /// No URL, probing disabled, or the probe failed
    Unavailable,
}

/// Followers/following activation resolved against a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationRequest {
    pub owner: String,
    pub relation: Relation,
    /// Fetchable URL with any template removed
    pub url: String,
}

/// A single user's profile card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePresenter {
    profile: UserProfile,
    avatar: AvatarSlot,
}

impl ProfilePresenter {
    /// Presenter for `profile`; the avatar starts `Pending` only when it will
    /// actually be probed.
    pub fn new(profile: UserProfile, probe_avatar: bool) -> Self {
        let avatar = if probe_avatar && profile.avatar().is_some() {
            AvatarSlot::Pending
        } else {
            AvatarSlot::Unavailable
        };
        Self { profile, avatar }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn login(&self) -> &str {
        &self.profile.login
    }

    pub fn name(&self) -> &str {
        self.profile.display_name()
    }

    pub fn bio(&self) -> &str {
        self.profile.display_bio()
    }

    pub fn followers_label(&self) -> String {
        self.profile.followers_label()
    }

    pub fn following_label(&self) -> String {
        self.profile.following_label()
    }

    pub fn avatar(&self) -> &AvatarSlot {
        &self.avatar
    }

    /// URL to probe, when the avatar is still pending
    pub fn avatar_url(&self) -> Option<&str> {
        match self.avatar {
            AvatarSlot::Pending => self.profile.avatar(),
            _ => None,
        }
    }

    /// Record the probe outcome; only a pending slot accepts it
    pub fn set_avatar(&mut self, avatar: Option<AvatarImage>) {
        if self.avatar != AvatarSlot::Pending {
            return;
        }
        self.avatar = match avatar {
            Some(image) => AvatarSlot::Loaded(image),
            None => AvatarSlot::Unavailable,
        };
    }

    /// Avatar line for the card: metadata when loaded, a hint while pending
    pub fn avatar_line(&self) -> Option<String> {
        match &self.avatar {
            AvatarSlot::Pending => Some("Loading avatar…".to_string()),
            AvatarSlot::Loaded(image) => Some(format!("Avatar: {}", image.summary())),
            AvatarSlot::Unavailable => None,
        }
    }

    pub fn select_followers(&self) -> Option<RelationRequest> {
        self.select(Relation::Followers)
    }

    pub fn select_following(&self) -> Option<RelationRequest> {
        self.select(Relation::Following)
    }

    /// Resolve an activation; `None` when the profile lacks the resource URL
    pub fn select(&self, relation: Relation) -> Option<RelationRequest> {
        self.profile
            .relation_url(relation)
            .map(|url| RelationRequest {
                owner: self.profile.login.clone(),
                relation,
                url,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghlookup_core::avatar::ImageFormat;

    fn list(logins: &[&str]) -> ListPresenter {
        ListPresenter::new(
            "octocat",
            Relation::Followers,
            logins
                .iter()
                .map(|l| UserSummary::new(*l, Relation::Followers))
                .collect(),
        )
    }

    fn octocat() -> UserProfile {
        UserProfile {
            name: Some("The Octocat".to_string()),
            avatar_url: Some("https://avatars.example/u/583231".to_string()),
            followers: 10,
            following: 2,
            followers_url: Some("https://api.github.com/users/octocat/followers".to_string()),
            following_url: Some(
                "https://api.github.com/users/octocat/following{/other_user}".to_string(),
            ),
            ..UserProfile::new("octocat")
        }
    }

    #[test]
    fn test_list_rows_show_logins() {
        let list = list(&["a", "b"]);
        assert_eq!(list.row_count(), 2);
        assert_eq!(list.row_at(0), Some("a"));
        assert_eq!(list.row_at(1), Some("b"));
        assert_eq!(list.row_at(2), None);
    }

    #[test]
    fn test_list_activation_reports_index_and_login() {
        let list = list(&["a", "b", "c"]);
        assert_eq!(
            list.on_activate(1),
            Some(RowActivated {
                index: 1,
                login: "b".to_string()
            })
        );
        assert_eq!(list.on_activate(3), None);
    }

    #[test]
    fn test_empty_list_is_not_an_error() {
        let list = list(&[]);
        assert!(list.is_empty());
        assert_eq!(list.activate_selected(), None);
        assert_eq!(list.empty_hint(), "octocat has no followers");
    }

    #[test]
    fn test_list_cursor_clamps() {
        let mut list = list(&["a", "b", "c"]);
        list.select_previous();
        assert_eq!(list.selected(), 0);
        list.select_last();
        list.select_next();
        assert_eq!(list.selected(), 2);
        list.page_up();
        assert_eq!(list.selected(), 0);
        list.page_down();
        assert_eq!(list.selected(), 2);
        assert!(!list.select(7));
        assert_eq!(list.selected(), 2);
    }

    #[test]
    fn test_list_title() {
        let list = ListPresenter::new("octocat", Relation::Following, vec![]);
        assert_eq!(list.title(), "Following of octocat");
        assert_eq!(list.empty_hint(), "octocat is not following anyone");
    }

    #[test]
    fn test_profile_labels() {
        let presenter = ProfilePresenter::new(octocat(), false);
        assert_eq!(presenter.name(), "The Octocat");
        assert_eq!(presenter.login(), "octocat");
        assert_eq!(presenter.bio(), "No bio");
        assert_eq!(presenter.followers_label(), "10 followers");
        assert_eq!(presenter.following_label(), "2 following");
    }

    #[test]
    fn test_profile_selects_resolve_urls() {
        let presenter = ProfilePresenter::new(octocat(), false);
        let followers = presenter.select_followers().unwrap();
        assert_eq!(followers.url, "https://api.github.com/users/octocat/followers");
        assert_eq!(followers.owner, "octocat");

        let following = presenter.select_following().unwrap();
        assert_eq!(following.url, "https://api.github.com/users/octocat/following");
        assert_eq!(following.relation, Relation::Following);
    }

    #[test]
    fn test_profile_without_urls_ignores_selection() {
        let presenter = ProfilePresenter::new(UserProfile::new("ghost"), true);
        assert_eq!(presenter.select_followers(), None);
        assert_eq!(presenter.select_following(), None);
        assert_eq!(presenter.avatar(), &AvatarSlot::Unavailable);
    }

    #[test]
    fn test_avatar_slot_lifecycle() {
        let mut presenter = ProfilePresenter::new(octocat(), true);
        assert_eq!(presenter.avatar(), &AvatarSlot::Pending);
        assert_eq!(
            presenter.avatar_url(),
            Some("https://avatars.example/u/583231")
        );
        assert_eq!(presenter.avatar_line().as_deref(), Some("Loading avatar…"));

        let image = AvatarImage {
            format: ImageFormat::Png,
            byte_len: 2048,
            dimensions: Some((64, 64)),
        };
        presenter.set_avatar(Some(image.clone()));
        assert_eq!(presenter.avatar(), &AvatarSlot::Loaded(image));
        assert!(presenter.avatar_line().unwrap().starts_with("Avatar: png 64×64"));

        // A second result does not overwrite the first
        presenter.set_avatar(None);
        assert!(matches!(presenter.avatar(), AvatarSlot::Loaded(_)));
    }

    #[test]
    fn test_avatar_failure_hides_line() {
        let mut presenter = ProfilePresenter::new(octocat(), true);
        presenter.set_avatar(None);
        assert_eq!(presenter.avatar(), &AvatarSlot::Unavailable);
        assert_eq!(presenter.avatar_line(), None);
        assert_eq!(presenter.name(), "The Octocat");
    }

    #[test]
    fn test_avatar_disabled_by_settings() {
        let presenter = ProfilePresenter::new(octocat(), false);
        assert_eq!(presenter.avatar(), &AvatarSlot::Unavailable);
        assert_eq!(presenter.avatar_url(), None);
    }
}
