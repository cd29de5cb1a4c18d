//! User records decoded from the directory API
//!
//! Field names match the wire format byte-for-byte so that serde can decode
//! responses without any renaming.

use serde::{Deserialize, Serialize};

/// URI-template suffix the API appends to `following_url`.
///
/// It is removed, never substituted: listing the whole relation does not
/// target any particular other user.
pub const OTHER_USER_PLACEHOLDER: &str = "{/other_user}";

/// Text shown when a profile has no display name
pub const NO_NAME_FALLBACK: &str = "No name";

/// Text shown when a profile has no bio
pub const NO_BIO_FALLBACK: &str = "No bio";

/// Which edge of the follow graph a list of summaries represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Followers,
    Following,
}

impl Relation {
    /// Short lowercase label ("followers" / "following")
    pub fn label(&self) -> &'static str {
        match self {
            Relation::Followers => "followers",
            Relation::Following => "following",
        }
    }

    /// Title for a list of this relation belonging to `login`
    pub fn title_for(&self, login: &str) -> String {
        match self {
            Relation::Followers => format!("Followers of {login}"),
            Relation::Following => format!("Following of {login}"),
        }
    }

    /// Turn the resource URL advertised by a profile into a fetchable URL.
    ///
    /// Only the following relation carries the `{/other_user}` template;
    /// follower URLs are returned untouched.
    pub fn resolve_url(&self, url: &str) -> String {
        match self {
            Relation::Followers => url.to_string(),
            Relation::Following => url.replace(OTHER_USER_PLACEHOLDER, ""),
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single user's public record, as returned by `GET /users/{login}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique handle (always non-empty for a successful lookup)
    pub login: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Free-text biography
    #[serde(default)]
    pub bio: Option<String>,

    /// Avatar image URL
    #[serde(default)]
    pub avatar_url: Option<String>,

    /// Follower count
    #[serde(default)]
    pub followers: u64,

    /// Following count
    #[serde(default)]
    pub following: u64,

    /// Resource URL listing this user's followers
    #[serde(default)]
    pub followers_url: Option<String>,

    /// Resource URL listing who this user follows (URI template)
    #[serde(default)]
    pub following_url: Option<String>,
}

impl UserProfile {
    /// Minimal profile with only a login, everything else absent
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            name: None,
            bio: None,
            avatar_url: None,
            followers: 0,
            following: 0,
            followers_url: None,
            following_url: None,
        }
    }

    /// Display name, or the fallback when absent or blank
    pub fn display_name(&self) -> &str {
        non_blank(self.name.as_deref()).unwrap_or(NO_NAME_FALLBACK)
    }

    /// Bio, or the fallback when absent or blank
    pub fn display_bio(&self) -> &str {
        non_blank(self.bio.as_deref()).unwrap_or(NO_BIO_FALLBACK)
    }

    /// `"{count} followers"`
    pub fn followers_label(&self) -> String {
        format!("{} followers", self.followers)
    }

    /// `"{count} following"`
    pub fn following_label(&self) -> String {
        format!("{} following", self.following)
    }

    /// Fetchable URL for the given relation, with any template stripped.
    ///
    /// Returns `None` when the profile does not advertise the resource.
    pub fn relation_url(&self, relation: Relation) -> Option<String> {
        let raw = match relation {
            Relation::Followers => self.followers_url.as_deref(),
            Relation::Following => self.following_url.as_deref(),
        };
        non_blank(raw).map(|url| relation.resolve_url(url))
    }

    /// Avatar URL if present and non-blank
    pub fn avatar(&self) -> Option<&str> {
        non_blank(self.avatar_url.as_deref())
    }
}

/// Minimal list-entry representation of a user, tagged with the relation
/// that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub login: String,
    pub relation: Relation,
}

impl UserSummary {
    pub fn new(login: impl Into<String>, relation: Relation) -> Self {
        Self {
            login: login.into(),
            relation,
        }
    }
}

/// Wire shape of a relation-listing entry; only `login` is kept
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryRecord {
    pub login: String,
}

impl SummaryRecord {
    pub fn into_summary(self, relation: Relation) -> UserSummary {
        UserSummary::new(self.login, relation)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
