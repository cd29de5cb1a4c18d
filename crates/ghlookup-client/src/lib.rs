//! # ghlookup-client - User Directory Client
//!
//! Issues HTTP GETs against the directory REST API and decodes responses
//! into the records defined in [`ghlookup_core`].
//!
//! ## Public API
//!
//! ### Client
//! - [`DirectoryClient`] - `fetch_profile`, `fetch_list`, `fetch_avatar`
//! - [`DEFAULT_API_BASE`] - `https://api.github.com`
//!
//! ### Transport
//! - [`HttpTransport`] - Send-able async GET seam
//! - [`ReqwestTransport`] - Production transport
//! - [`HttpResponse`], [`TransportOptions`]
//!
//! ### Classification
//! - [`classify_profile()`], [`classify_list()`] - Response → `FetchResult`

pub mod classify;
pub mod directory;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;
pub mod transport;

pub use classify::{classify_list, classify_profile};
pub use directory::{DirectoryClient, DEFAULT_API_BASE};
pub use transport::{
    HttpResponse, HttpTransport, LocalHttpTransport, ReqwestTransport, TransportOptions,
};
