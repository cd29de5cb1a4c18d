//! User directory client
//!
//! Builds lookup URLs against a configurable API base and runs exactly one
//! GET per call. Profile and list lookups never fail past this boundary:
//! every outcome is a [`FetchResult`].

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use ghlookup_core::prelude::*;
use ghlookup_core::{AvatarImage, FetchResult, Relation, UserProfile, UserSummary};

use crate::classify::{classify_list, classify_profile};
use crate::transport::{HttpTransport, ReqwestTransport, TransportOptions};

/// Default REST API base
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Characters escaped when a username becomes a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Looks up users and their relations over a [`HttpTransport`]
#[derive(Debug)]
pub struct DirectoryClient<T> {
    api_base: String,
    transport: T,
}

impl DirectoryClient<ReqwestTransport> {
    /// Client backed by reqwest
    pub fn with_reqwest(api_base: impl Into<String>, options: &TransportOptions) -> Result<Self> {
        Ok(Self::new(api_base, ReqwestTransport::new(options)?))
    }
}

impl<T> DirectoryClient<T> {
    pub fn new(api_base: impl Into<String>, transport: T) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self {
            api_base,
            transport,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Canonical lookup URL for a username, or the input itself when it is
    /// already an absolute http(s) URL.
    ///
    /// Bare usernames are lowercased. Returns `None` for blank input.
    pub fn profile_url(&self, username_or_url: &str) -> Option<String> {
        let input = username_or_url.trim();
        if input.is_empty() {
            return None;
        }
        if is_http_url(input) {
            return Some(input.to_string());
        }

        let username = input.to_lowercase();
        Some(format!(
            "{}/users/{}",
            self.api_base,
            utf8_percent_encode(&username, PATH_SEGMENT)
        ))
    }
}

impl<T: HttpTransport + Sync> DirectoryClient<T> {
    /// Fetch a single profile by username or resource URL
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_profile(&self, username_or_url: &str) -> FetchResult<UserProfile> {
        let Some(url) = self.profile_url(username_or_url) else {
            debug!("Blank username, not issuing a request");
            return FetchResult::NotFound;
        };

        let result = match self.transport.get(&url).await {
            Ok(response) => classify_profile(&response),
            Err(e) => FetchResult::TransportError(transport_message(e)),
        };
        info!("Profile lookup {} -> {}", url, result.describe());
        result
    }

    /// Fetch the followers or following list advertised by a profile.
    ///
    /// For [`Relation::Following`] the `{/other_user}` template is removed
    /// before the request is issued.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_list(
        &self,
        resource_url: &str,
        relation: Relation,
    ) -> FetchResult<Vec<UserSummary>> {
        let url = relation.resolve_url(resource_url.trim());

        let result = match self.transport.get(&url).await {
            Ok(response) => classify_list(&response, relation),
            Err(e) => FetchResult::TransportError(transport_message(e)),
        };
        match &result {
            FetchResult::Success(users) => {
                info!("{} lookup {} -> {} users", relation, url, users.len())
            }
            other => info!("{} lookup {} -> {}", relation, url, other.describe()),
        }
        result
    }

    /// Best-effort avatar probe.
    ///
    /// Unlike profile and list lookups this returns a plain `Result`; the
    /// caller logs and drops failures.
    pub async fn fetch_avatar(&self, url: &str) -> Result<AvatarImage> {
        if !is_http_url(url) {
            return Err(Error::invalid_url(url, "not an absolute http(s) URL"));
        }

        let response = self.transport.get(url).await?;
        if !response.is_success() {
            return Err(Error::http_status(url, response.status));
        }

        AvatarImage::from_bytes(&response.body, response.content_type.as_deref()).ok_or_else(|| {
            Error::not_an_image(format!(
                "{} bytes of {}",
                response.body.len(),
                response.content_type.as_deref().unwrap_or("unknown content")
            ))
        })
    }
}

fn is_http_url(input: &str) -> bool {
    matches!(Url::parse(input), Ok(url) if matches!(url.scheme(), "http" | "https"))
}

fn transport_message(err: Error) -> String {
    match err {
        Error::Transport { message, .. } => message,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ScriptedTransport;

    fn client() -> DirectoryClient<ScriptedTransport> {
        DirectoryClient::new("https://api.github.com/", ScriptedTransport::new())
    }

    #[test]
    fn test_profile_url_lowercases_username() {
        assert_eq!(
            client().profile_url("  OctoCat ").as_deref(),
            Some("https://api.github.com/users/octocat")
        );
    }

    #[test]
    fn test_profile_url_keeps_full_url() {
        let url = "https://api.github.com/users/MixedCase";
        assert_eq!(client().profile_url(url).as_deref(), Some(url));
    }

    #[test]
    fn test_profile_url_escapes_path_characters() {
        assert_eq!(
            client().profile_url("a/b?c").as_deref(),
            Some("https://api.github.com/users/a%2Fb%3Fc")
        );
    }

    #[test]
    fn test_profile_url_blank_is_none() {
        assert_eq!(client().profile_url("   "), None);
    }

    #[test]
    fn test_api_base_trailing_slash_trimmed() {
        assert_eq!(client().api_base(), "https://api.github.com");
    }

    #[tokio::test]
    async fn test_fetch_profile_success() {
        let transport = ScriptedTransport::new().with_json(
            "https://api.github.com/users/octocat",
            200,
            r#"{"login":"octocat","name":"The Octocat","followers":10,"following":2}"#,
        );
        let client = DirectoryClient::new(DEFAULT_API_BASE, transport.clone());

        let profile = client.fetch_profile("OctoCat").await.success().unwrap();

        assert_eq!(profile.display_name(), "The Octocat");
        assert_eq!(
            transport.requests(),
            vec!["https://api.github.com/users/octocat".to_string()]
        );
    }

    #[tokio::test]
    async fn test_fetch_profile_404_is_not_found() {
        let transport = ScriptedTransport::new().with_json(
            "https://api.github.com/users/nonexistent_user_zzz",
            404,
            r#"{"message":"Not Found"}"#,
        );
        let client = DirectoryClient::new(DEFAULT_API_BASE, transport);

        assert_eq!(
            client.fetch_profile("nonexistent_user_zzz").await,
            FetchResult::NotFound
        );
    }

    #[tokio::test]
    async fn test_fetch_profile_transport_failure() {
        let transport = ScriptedTransport::new()
            .with_failure("https://api.github.com/users/octocat", "connection reset");
        let client = DirectoryClient::new(DEFAULT_API_BASE, transport);

        assert_eq!(
            client.fetch_profile("octocat").await,
            FetchResult::TransportError("connection reset".to_string())
        );
    }

    #[tokio::test]
    async fn test_fetch_profile_blank_issues_no_request() {
        let transport = ScriptedTransport::new();
        let client = DirectoryClient::new(DEFAULT_API_BASE, transport.clone());

        assert_eq!(client.fetch_profile("  ").await, FetchResult::NotFound);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_profile_is_idempotent() {
        let transport = ScriptedTransport::new().with_json(
            "https://api.github.com/users/octocat",
            200,
            r#"{"login":"octocat","bio":null,"followers":1}"#,
        );
        let client = DirectoryClient::new(DEFAULT_API_BASE, transport);

        let first = client.fetch_profile("octocat").await;
        let second = client.fetch_profile("octocat").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_fetch_following_strips_placeholder() {
        let transport = ScriptedTransport::new().with_json(
            "https://api.github.com/users/octocat/following",
            200,
            r#"[{"login":"a"}]"#,
        );
        let client = DirectoryClient::new(DEFAULT_API_BASE, transport.clone());

        let users = client
            .fetch_list(
                "https://api.github.com/users/octocat/following{/other_user}",
                Relation::Following,
            )
            .await
            .success()
            .unwrap();

        assert_eq!(users, vec![UserSummary::new("a", Relation::Following)]);
        assert_eq!(
            transport.requests(),
            vec!["https://api.github.com/users/octocat/following".to_string()]
        );
    }

    #[tokio::test]
    async fn test_fetch_followers_uses_literal_url() {
        let url = "https://api.github.com/users/octocat/followers";
        let transport = ScriptedTransport::new().with_json(url, 200, r#"[]"#);
        let client = DirectoryClient::new(DEFAULT_API_BASE, transport.clone());

        let result = client.fetch_list(url, Relation::Followers).await;

        assert_eq!(result, FetchResult::Success(vec![]));
        assert_eq!(transport.requests(), vec![url.to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_list_transport_failure() {
        let url = "https://api.github.com/users/octocat/followers";
        let transport = ScriptedTransport::new().with_failure(url, "request timed out");
        let client = DirectoryClient::new(DEFAULT_API_BASE, transport);

        assert_eq!(
            client.fetch_list(url, Relation::Followers).await,
            FetchResult::TransportError("request timed out".to_string())
        );
    }

    #[tokio::test]
    async fn test_fetch_avatar_reads_png_metadata() {
        let url = "https://avatars.example/u/1";
        let mut png = b"\x89PNG\r\n\x1a\n\0\0\0\x0dIHDR".to_vec();
        png.extend_from_slice(&64u32.to_be_bytes());
        png.extend_from_slice(&64u32.to_be_bytes());
        let transport = ScriptedTransport::new().with_bytes(url, 200, "image/png", png);
        let client = DirectoryClient::new(DEFAULT_API_BASE, transport);

        let avatar = client.fetch_avatar(url).await.unwrap();
        assert_eq!(avatar.dimensions, Some((64, 64)));
    }

    #[tokio::test]
    async fn test_fetch_avatar_failures_are_errors() {
        let url = "https://avatars.example/u/2";
        let transport = ScriptedTransport::new().with_json(url, 500, "{}");
        let client = DirectoryClient::new(DEFAULT_API_BASE, transport);

        assert!(matches!(
            client.fetch_avatar(url).await,
            Err(Error::HttpStatus { status: 500, .. })
        ));
        assert!(matches!(
            client.fetch_avatar("not a url").await,
            Err(Error::InvalidUrl { .. })
        ));
    }
}
