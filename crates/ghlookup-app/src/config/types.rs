//! Configuration types for ghlookup
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `ApiSettings` - Directory API endpoint and HTTP options
//! - `UiSettings` - Presentation toggles

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use ghlookup_client::{TransportOptions, DEFAULT_API_BASE};
use ghlookup_core::prelude::*;

/// Global settings from config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Replace the API base, e.g. from `--api-base`
    pub fn with_api_base(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Check values that serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api.base_url)
            .map_err(|e| Error::invalid_url(&self.api.base_url, e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_url(
                &self.api.base_url,
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err(Error::config("api.timeout_secs must be at least 1"));
        }
        Ok(())
    }
}

/// Directory API settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// REST API root; lookups go to `{base_url}/users/{login}`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header; the API rejects anonymous agents
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiSettings {
    pub fn transport_options(&self) -> TransportOptions {
        TransportOptions {
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    TransportOptions::default().user_agent
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Probe avatar images when a profile opens
    #[serde(default = "default_true")]
    pub load_avatars: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            load_avatars: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, "https://api.github.com");
        assert_eq!(settings.api.timeout_secs, 10);
        assert!(settings.api.user_agent.starts_with("ghlookup/"));
        assert!(settings.ui.load_avatars);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[ui]
load_avatars = false
"#,
        )
        .unwrap();
        assert!(!settings.ui.load_avatars);
        assert_eq!(settings.api, ApiSettings::default());
    }

    #[test]
    fn test_transport_options_from_api_settings() {
        let api = ApiSettings {
            timeout_secs: 3,
            user_agent: "tester".to_string(),
            ..Default::default()
        };
        let options = api.transport_options();
        assert_eq!(options.timeout, Duration::from_secs(3));
        assert_eq!(options.user_agent, "tester");
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let settings = Settings::default().with_api_base("ftp://example.com");
        assert!(matches!(settings.validate(), Err(Error::InvalidUrl { .. })));

        let settings = Settings::default().with_api_base("not a url");
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut settings = Settings::default();
        settings.api.timeout_secs = 0;
        assert!(matches!(settings.validate(), Err(Error::Config { .. })));
    }

    #[test]
    fn test_validate_accepts_local_server() {
        let settings = Settings::default().with_api_base("http://127.0.0.1:8080/api");
        assert!(settings.validate().is_ok());
    }
}
