//! Tagged outcome of a directory lookup

/// Which way a lookup failed, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    Transport,
    Decode,
}

/// Outcome of any directory lookup.
///
/// The client never returns an `Err` for profile or list lookups; every
/// failure is one of the three non-success variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult<T> {
    Success(T),
    /// Remote resource absent, or its body unusable as the expected record
    NotFound,
    /// Connectivity failure (DNS, connect, timeout, reset)
    TransportError(String),
    /// Body transported fine but structurally unexpected
    DecodeError(String),
}

impl<T> FetchResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success(_))
    }

    /// Failure kind, or `None` on success
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            FetchResult::Success(_) => None,
            FetchResult::NotFound => Some(FailureKind::NotFound),
            FetchResult::TransportError(_) => Some(FailureKind::Transport),
            FetchResult::DecodeError(_) => Some(FailureKind::Decode),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FetchResult<U> {
        match self {
            FetchResult::Success(value) => FetchResult::Success(f(value)),
            FetchResult::NotFound => FetchResult::NotFound,
            FetchResult::TransportError(msg) => FetchResult::TransportError(msg),
            FetchResult::DecodeError(msg) => FetchResult::DecodeError(msg),
        }
    }

    /// The success payload, discarding any failure
    pub fn success(self) -> Option<T> {
        match self {
            FetchResult::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Short description used in logs
    pub fn describe(&self) -> String {
        match self {
            FetchResult::Success(_) => "success".to_string(),
            FetchResult::NotFound => "not found".to_string(),
            FetchResult::TransportError(msg) => format!("transport error: {msg}"),
            FetchResult::DecodeError(msg) => format!("decode error: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kind() {
        assert_eq!(FetchResult::Success(1).failure_kind(), None);
        assert_eq!(
            FetchResult::<u8>::NotFound.failure_kind(),
            Some(FailureKind::NotFound)
        );
        assert_eq!(
            FetchResult::<u8>::TransportError("dns".into()).failure_kind(),
            Some(FailureKind::Transport)
        );
        assert_eq!(
            FetchResult::<u8>::DecodeError("bad".into()).failure_kind(),
            Some(FailureKind::Decode)
        );
    }

    #[test]
    fn test_map_keeps_failures() {
        let failed: FetchResult<u8> = FetchResult::TransportError("reset".into());
        assert_eq!(
            failed.map(|n| n * 2),
            FetchResult::TransportError("reset".into())
        );
        assert_eq!(FetchResult::Success(2).map(|n| n * 2), FetchResult::Success(4));
    }

    #[test]
    fn test_success_accessor() {
        assert_eq!(FetchResult::Success("x").success(), Some("x"));
        assert_eq!(FetchResult::<&str>::NotFound.success(), None);
    }
}
