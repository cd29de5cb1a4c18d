//! # ghlookup-core - Core Domain Types
//!
//! Foundation crate for ghlookup. Provides the user records decoded from the
//! directory API, the tagged lookup outcome, avatar metadata, error handling
//! and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Users (`user`)
//! - [`UserProfile`] - A single user's public record
//! - [`UserSummary`] - A list entry tagged with its [`Relation`]
//! - [`Relation`] - Followers or following
//!
//! ### Lookups (`fetch`)
//! - [`FetchResult`] - `Success` / `NotFound` / `TransportError` / `DecodeError`
//! - [`FailureKind`] - The failure variant without its payload
//!
//! ### Avatars (`avatar`)
//! - [`AvatarImage`], [`ImageFormat`] - Metadata of a probed avatar image
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use ghlookup_core::prelude::*;
//! ```

pub mod avatar;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod prelude;
pub mod user;

// Re-export commonly used types at crate root for convenience
pub use avatar::{AvatarImage, ImageFormat};
pub use error::{Error, Result, ResultExt};
pub use fetch::{FailureKind, FetchResult};
pub use user::{
    Relation, SummaryRecord, UserProfile, UserSummary, NO_BIO_FALLBACK, NO_NAME_FALLBACK,
    OTHER_USER_PLACEHOLDER,
};
