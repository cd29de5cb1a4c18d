//! HTTP transport seam
//!
//! The directory client only ever issues unary GETs, so the transport
//! surface is a single method. The reqwest-backed implementation is used in
//! production; tests script responses through `test_utils`.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};

use ghlookup_core::prelude::*;

/// Media type the REST API documents for JSON responses
const API_ACCEPT: &str = "application/vnd.github+json";

/// Raw response handed back by a transport.
///
/// Any status code is a successful transport outcome; only connectivity
/// failures are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues HTTP GET requests.
///
/// Implementations return `Err` only for transport-level failures (DNS,
/// connect, timeout, reset, body read). HTTP error statuses are returned as
/// ordinary responses.
#[trait_variant::make(HttpTransport: Send)]
pub trait LocalHttpTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// Options for the production transport
#[derive(Debug, Clone)]
pub struct TransportOptions {
    /// Sent on every request; the API rejects requests without one
    pub user_agent: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            user_agent: concat!("ghlookup/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Transport backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(options: &TransportOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(API_ACCEPT));

        let client = reqwest::Client::builder()
            .user_agent(options.user_agent.clone())
            .default_headers(headers)
            .timeout(options.timeout)
            .build()
            .map_err(|e| Error::http_client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::transport(url, describe_reqwest_error(&e)))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::transport(url, describe_reqwest_error(&e)))?;

        trace!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(HttpResponse {
            status,
            content_type,
            body: body.to_vec(),
        })
    }
}

fn describe_reqwest_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else if err.is_builder() {
        format!("invalid request: {err}")
    } else {
        err.to_string()
    }
}
