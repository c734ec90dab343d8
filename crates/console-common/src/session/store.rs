use super::backend::{MemoryBackend, SessionBackend};
use crate::config::SessionConfig;
use std::fmt;
use std::rc::Rc;

/// A complete stored session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    /// Absolute expiry, epoch milliseconds
    pub expiry: i64,
}

impl Session {
    /// The expiry instant itself is still valid
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms > self.expiry
    }
}

/// Classification of whatever is currently stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Active(Session),
    /// Neither entry present
    Absent,
    MissingToken,
    MissingExpiry,
    /// Expiry present but not a number
    Malformed,
    Expired,
}

impl SessionState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

/// Parse a stored expiry the way a lenient numeric conversion would:
/// integers, or finite decimals truncated to whole milliseconds.
pub fn parse_expiry(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value as i64)
}

/// Handle to the persisted session. Clones share one backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn SessionBackend>,
}

impl SessionStore {
    pub fn new(backend: impl SessionBackend + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Store backed by `localStorage`, falling back to memory when the
    /// browser refuses access (private mode, sandboxed iframes, native builds).
    pub fn browser() -> Self {
        #[cfg(target_arch = "wasm32")]
        if let Some(backend) = super::backend::LocalStorageBackend::open() {
            return Self::new(backend);
        }

        tracing::warn!("localStorage unavailable, session will not survive a reload");
        Self::in_memory()
    }

    /// Persist a freshly issued session. The caller guarantees `expiry` is in the future.
    pub fn write(&self, token: &str, expiry: i64) {
        self.backend.set(SessionConfig::TOKEN_KEY, token);
        self.backend
            .set(SessionConfig::EXPIRY_KEY, &expiry.to_string());
    }

    /// Current session if both entries are present and the expiry parses
    pub fn read(&self) -> Option<Session> {
        let token = self.token()?;
        let expiry = parse_expiry(&self.raw_expiry()?)?;
        Some(Session { token, expiry })
    }

    /// Remove both entries; calling it on an empty store is a no-op
    pub fn clear(&self) {
        self.backend.remove(SessionConfig::TOKEN_KEY);
        self.backend.remove(SessionConfig::EXPIRY_KEY);
    }

    pub fn token(&self) -> Option<String> {
        non_empty(self.backend.get(SessionConfig::TOKEN_KEY))
    }

    /// Stored expiry exactly as persisted
    pub fn raw_expiry(&self) -> Option<String> {
        non_empty(self.backend.get(SessionConfig::EXPIRY_KEY))
    }

    pub fn inspect(&self, now_ms: i64) -> SessionState {
        match (self.token(), self.raw_expiry()) {
            (None, None) => SessionState::Absent,
            (None, Some(_)) => SessionState::MissingToken,
            (Some(_), None) => SessionState::MissingExpiry,
            (Some(token), Some(raw)) => match parse_expiry(&raw) {
                None => SessionState::Malformed,
                Some(expiry) => {
                    let session = Session { token, expiry };
                    if session.is_expired_at(now_ms) {
                        SessionState::Expired
                    } else {
                        SessionState::Active(session)
                    }
                }
            },
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("has_token", &self.token().is_some())
            .field("expiry", &self.raw_expiry())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    fn store_with(token: Option<&str>, expiry: Option<&str>) -> SessionStore {
        let backend = MemoryBackend::new();
        if let Some(token) = token {
            backend.set(SessionConfig::TOKEN_KEY, token);
        }
        if let Some(expiry) = expiry {
            backend.set(SessionConfig::EXPIRY_KEY, expiry);
        }
        SessionStore::new(backend)
    }

    #[test]
    fn write_then_read_returns_both_values() {
        let store = SessionStore::in_memory();
        store.write("abc", NOW + 60_000);

        assert_eq!(
            store.read(),
            Some(Session {
                token: "abc".into(),
                expiry: NOW + 60_000
            })
        );
        assert_eq!(store.raw_expiry().as_deref(), Some("1700000060000"));
    }

    #[test]
    fn read_reports_absence() {
        assert_eq!(SessionStore::in_memory().read(), None);
        assert_eq!(store_with(Some("abc"), None).read(), None);
        assert_eq!(store_with(None, Some("1")).read(), None);
        assert_eq!(store_with(Some("abc"), Some("soon")).read(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let store = SessionStore::in_memory();
        store.write("abc", NOW);

        store.clear();
        assert_eq!(store.inspect(NOW), SessionState::Absent);
        store.clear();
        assert_eq!(store.inspect(NOW), SessionState::Absent);
        assert_eq!(store.token(), None);
        assert_eq!(store.raw_expiry(), None);
    }

    #[test]
    fn clones_share_the_backend() {
        let store = SessionStore::in_memory();
        let other = store.clone();
        store.write("abc", NOW);

        assert_eq!(other.token().as_deref(), Some("abc"));
        assert_eq!(store, other);
        assert_ne!(store, SessionStore::in_memory());
    }

    #[test]
    fn inspect_classifies_stored_pairs() {
        assert_eq!(store_with(None, None).inspect(NOW), SessionState::Absent);
        assert_eq!(
            store_with(None, Some("1700000060000")).inspect(NOW),
            SessionState::MissingToken
        );
        assert_eq!(
            store_with(Some("abc"), None).inspect(NOW),
            SessionState::MissingExpiry
        );
        assert_eq!(
            store_with(Some("abc"), Some("not-a-number")).inspect(NOW),
            SessionState::Malformed
        );
        assert_eq!(
            store_with(Some("abc"), Some("1699999999000")).inspect(NOW),
            SessionState::Expired
        );
        assert!(store_with(Some("abc"), Some("1700000060000"))
            .inspect(NOW)
            .is_active());
    }

    #[test]
    fn expiry_instant_is_still_valid() {
        let store = store_with(Some("abc"), Some("1700000000000"));
        assert!(store.inspect(NOW).is_active());
        assert_eq!(store.inspect(NOW + 1), SessionState::Expired);
    }

    #[test]
    fn empty_entries_count_as_missing() {
        assert_eq!(store_with(Some(""), Some("")).inspect(NOW), SessionState::Absent);
        assert_eq!(
            store_with(Some("abc"), Some("")).inspect(NOW),
            SessionState::MissingExpiry
        );
    }

    #[test]
    fn parse_expiry_is_lenient_but_fails_closed() {
        assert_eq!(parse_expiry("1700000000000"), Some(NOW));
        assert_eq!(parse_expiry(" 1700000000000 "), Some(NOW));
        assert_eq!(parse_expiry("1700000000000.9"), Some(NOW));
        assert_eq!(parse_expiry("not-a-number"), None);
        assert_eq!(parse_expiry("NaN"), None);
        assert_eq!(parse_expiry("inf"), None);
    }
}
