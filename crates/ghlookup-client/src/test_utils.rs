//! Test utilities for scripting directory responses.
//!
//! Available under `#[cfg(test)]` within this crate, and to downstream crates
//! via the `test-helpers` feature.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use ghlookup_core::{Error, Result};

use crate::transport::{HttpResponse, HttpTransport};

#[derive(Debug, Clone)]
enum Scripted {
    Respond(HttpResponse),
    Fail(String),
}

#[derive(Debug, Default)]
struct Script {
    routes: HashMap<String, Scripted>,
    requests: Vec<String>,
}

/// In-memory transport answering from a URL → response table.
///
/// Unscripted URLs answer `404` with the API's not-found envelope. Clones
/// share the same script and request log, so a test can keep a handle after
/// moving the transport into a client.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    inner: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with a JSON body
    pub fn with_json(self, url: &str, status: u16, body: &str) -> Self {
        self.route(
            url,
            Scripted::Respond(
                HttpResponse::new(status, body.as_bytes().to_vec())
                    .with_content_type("application/json; charset=utf-8"),
            ),
        )
    }

    /// Answer `url` with raw bytes
    pub fn with_bytes(self, url: &str, status: u16, content_type: &str, body: Vec<u8>) -> Self {
        self.route(
            url,
            Scripted::Respond(HttpResponse::new(status, body).with_content_type(content_type)),
        )
    }

    /// Fail `url` at the transport level
    pub fn with_failure(self, url: &str, message: &str) -> Self {
        self.route(url, Scripted::Fail(message.to_string()))
    }

    /// Every URL requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.lock().requests.clone()
    }

    fn route(self, url: &str, scripted: Scripted) -> Self {
        self.lock().routes.insert(url.to_string(), scripted);
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        // A panicking test thread must not hide the request log from others
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let scripted = {
            let mut script = self.lock();
            script.requests.push(url.to_string());
            script.routes.get(url).cloned()
        };

        match scripted {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Fail(message)) => Err(Error::transport(url, message)),
            None => Ok(HttpResponse::new(
                404,
                br#"{"message":"Not Found"}"#.to_vec(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unscripted_url_is_404() {
        let transport = ScriptedTransport::new();
        let response = transport.get("https://x/y").await.unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(transport.requests(), vec!["https://x/y".to_string()]);
    }

    #[tokio::test]
    async fn test_clones_share_request_log() {
        let transport = ScriptedTransport::new().with_json("https://x/a", 200, "{}");
        let handle = transport.clone();
        transport.get("https://x/a").await.unwrap();
        assert_eq!(handle.requests().len(), 1);
    }
}
