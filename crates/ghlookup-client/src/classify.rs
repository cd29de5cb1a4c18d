//! Response classification
//!
//! Turns a transported response into a [`FetchResult`]. Profile and list
//! lookups differ in one respect: a profile body that is JSON but lacks a
//! usable `login` reads as "no such user", while a malformed list body is
//! always a decode error.

use serde::Deserialize;
use serde_json::Value;

use ghlookup_core::prelude::*;
use ghlookup_core::{FetchResult, Relation, SummaryRecord, UserProfile, UserSummary};

use crate::transport::HttpResponse;

/// Error body the API returns alongside non-2xx statuses
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: String,
}

/// Classify the response to `GET /users/{login}`
pub fn classify_profile(response: &HttpResponse) -> FetchResult<UserProfile> {
    if response.status == 404 {
        return FetchResult::NotFound;
    }
    if !response.is_success() {
        return FetchResult::DecodeError(status_message(response));
    }

    let value: Value = match serde_json::from_slice(&response.body) {
        Ok(value) => value,
        Err(e) => return FetchResult::DecodeError(format!("response is not JSON: {e}")),
    };

    let Some(object) = value.as_object() else {
        return FetchResult::DecodeError(format!(
            "expected a user object, got {}",
            json_kind(&value)
        ));
    };

    if !object.contains_key("login") {
        if let Some(message) = object.get("message").and_then(Value::as_str) {
            return FetchResult::DecodeError(format!("API error: {message}"));
        }
        debug!("Profile body has no login field, treating as not found");
        return FetchResult::NotFound;
    }

    match serde_json::from_value::<UserProfile>(value) {
        Ok(profile) if !profile.login.trim().is_empty() => FetchResult::Success(profile),
        Ok(_) => {
            debug!("Profile body has an empty login, treating as not found");
            FetchResult::NotFound
        }
        Err(e) => {
            debug!("Profile body did not match the user shape ({}), treating as not found", e);
            FetchResult::NotFound
        }
    }
}

/// Classify the response to a followers/following listing
pub fn classify_list(response: &HttpResponse, relation: Relation) -> FetchResult<Vec<UserSummary>> {
    if response.status == 404 {
        return FetchResult::NotFound;
    }
    if !response.is_success() {
        return FetchResult::DecodeError(status_message(response));
    }

    let records: Vec<SummaryRecord> = match serde_json::from_slice(&response.body) {
        Ok(records) => records,
        Err(e) => {
            return FetchResult::DecodeError(match envelope_message(&response.body) {
                Some(message) => format!("API error: {message}"),
                None => format!("unexpected {} list: {e}", relation.label()),
            })
        }
    };

    if let Some(position) = records.iter().position(|r| r.login.trim().is_empty()) {
        return FetchResult::DecodeError(format!(
            "{} entry {} has an empty login",
            relation.label(),
            position
        ));
    }

    FetchResult::Success(
        records
            .into_iter()
            .map(|record| record.into_summary(relation))
            .collect(),
    )
}

/// `"HTTP 403: API rate limit exceeded"`, or just the status without an envelope
fn status_message(response: &HttpResponse) -> String {
    match envelope_message(&response.body) {
        Some(message) => format!("HTTP {}: {}", response.status, message),
        None => format!("HTTP {}", response.status),
    }
}

fn envelope_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.message)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(body: &str) -> HttpResponse {
        HttpResponse::new(200, body)
    }

    #[test]
    fn test_profile_success_maps_fields() {
        let result = classify_profile(&ok(
            r#"{"login":"octocat","name":"The Octocat","bio":"hi","avatar_url":"https://a/1","followers":10,"following":2}"#,
        ));
        let profile = result.success().unwrap();
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.name.as_deref(), Some("The Octocat"));
        assert_eq!(profile.bio.as_deref(), Some("hi"));
        assert_eq!(profile.avatar_url.as_deref(), Some("https://a/1"));
        assert_eq!(profile.followers, 10);
        assert_eq!(profile.following, 2);
    }

    #[test]
    fn test_profile_404_is_not_found() {
        let response = HttpResponse::new(404, r#"{"message":"Not Found"}"#);
        assert_eq!(classify_profile(&response), FetchResult::NotFound);
    }

    #[test]
    fn test_profile_missing_login_is_not_found() {
        assert_eq!(
            classify_profile(&ok(r#"{"name":"Nobody"}"#)),
            FetchResult::NotFound
        );
    }

    #[test]
    fn test_profile_empty_login_is_not_found() {
        assert_eq!(classify_profile(&ok(r#"{"login":""}"#)), FetchResult::NotFound);
    }

    #[test]
    fn test_profile_wrong_field_type_is_not_found() {
        assert_eq!(
            classify_profile(&ok(r#"{"login":"a","followers":"many"}"#)),
            FetchResult::NotFound
        );
    }

    #[test]
    fn test_profile_non_json_is_decode_error() {
        let result = classify_profile(&ok("<html>oops</html>"));
        assert!(matches!(result, FetchResult::DecodeError(msg) if msg.contains("not JSON")));
    }

    #[test]
    fn test_profile_array_is_decode_error() {
        let result = classify_profile(&ok("[]"));
        assert!(matches!(result, FetchResult::DecodeError(msg) if msg.contains("an array")));
    }

    #[test]
    fn test_profile_error_envelope_is_decode_error() {
        let result = classify_profile(&ok(r#"{"message":"Bad credentials"}"#));
        assert_eq!(
            result,
            FetchResult::DecodeError("API error: Bad credentials".to_string())
        );
    }

    #[test]
    fn test_profile_server_error_is_decode_error() {
        let response = HttpResponse::new(
            403,
            r#"{"message":"API rate limit exceeded","documentation_url":"https://docs"}"#,
        );
        assert_eq!(
            classify_profile(&response),
            FetchResult::DecodeError("HTTP 403: API rate limit exceeded".to_string())
        );
        assert_eq!(
            classify_profile(&HttpResponse::new(502, "")),
            FetchResult::DecodeError("HTTP 502".to_string())
        );
    }

    #[test]
    fn test_list_success_tags_relation() {
        let result = classify_list(&ok(r#"[{"login":"a"},{"login":"b","id":2}]"#), Relation::Following);
        let summaries = result.success().unwrap();
        assert_eq!(
            summaries,
            vec![
                UserSummary::new("a", Relation::Following),
                UserSummary::new("b", Relation::Following)
            ]
        );
    }

    #[test]
    fn test_list_empty_array_is_success() {
        assert_eq!(
            classify_list(&ok("[]"), Relation::Followers),
            FetchResult::Success(vec![])
        );
    }

    #[test]
    fn test_list_malformed_is_decode_error_not_not_found() {
        let result = classify_list(&ok(r#"{"login":"a"}"#), Relation::Followers);
        assert!(matches!(result, FetchResult::DecodeError(_)));

        let result = classify_list(&ok(r#"[{"id":1}]"#), Relation::Followers);
        assert!(matches!(result, FetchResult::DecodeError(_)));
    }

    #[test]
    fn test_list_envelope_message_is_reported() {
        let result = classify_list(&ok(r#"{"message":"Moved Permanently"}"#), Relation::Followers);
        assert_eq!(
            result,
            FetchResult::DecodeError("API error: Moved Permanently".to_string())
        );
    }

    #[test]
    fn test_list_empty_login_is_decode_error() {
        let result = classify_list(&ok(r#"[{"login":"a"},{"login":" "}]"#), Relation::Following);
        assert_eq!(
            result,
            FetchResult::DecodeError("following entry 1 has an empty login".to_string())
        );
    }

    #[test]
    fn test_list_404_is_not_found() {
        assert_eq!(
            classify_list(&HttpResponse::new(404, ""), Relation::Followers),
            FetchResult::NotFound
        );
    }
}
