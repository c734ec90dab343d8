use crate::clock::{Clock, SystemClock};
use crate::config::SessionConfig;
use crate::session::{Session, SessionState, SessionStore};

/// Why a protected navigation was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    NoSession,
    MissingToken,
    MissingExpiry,
    MalformedExpiry,
    Expired,
}

/// Navigation the UI must perform after a denial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub path: &'static str,
    /// Replace the current history entry instead of pushing a new one
    pub replace: bool,
}

impl Redirect {
    pub const fn sign_in() -> Self {
        Self {
            path: SessionConfig::SIGN_IN_PATH,
            replace: true,
        }
    }
}

/// Result of evaluating the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted(Session),
    Denied(Denial),
}

impl Access {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }

    pub fn redirect(&self) -> Option<Redirect> {
        match self {
            Self::Granted(_) => None,
            Self::Denied(_) => Some(Redirect::sign_in()),
        }
    }
}

/// Gate evaluated on every protected navigation, before protected content mounts
#[derive(Clone)]
pub struct RouteGate<C = SystemClock> {
    store: SessionStore,
    clock: C,
}

impl RouteGate<SystemClock> {
    pub fn new(store: SessionStore) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<C: Clock> RouteGate<C> {
    pub fn with_clock(store: SessionStore, clock: C) -> Self {
        Self { store, clock }
    }

    /// Evaluate the stored session. Any denial clears the store.
    pub fn check(&self) -> Access {
        let denial = match self.store.inspect(self.clock.now_ms()) {
            SessionState::Active(session) => return Access::Granted(session),
            SessionState::Absent => Denial::NoSession,
            SessionState::MissingToken => Denial::MissingToken,
            SessionState::MissingExpiry => Denial::MissingExpiry,
            SessionState::Malformed => Denial::MalformedExpiry,
            SessionState::Expired => Denial::Expired,
        };

        self.store.clear();
        if denial != Denial::NoSession {
            tracing::warn!(reason = ?denial, "protected route denied, session cleared");
        }
        Access::Denied(denial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::session::MemoryBackend;
    use crate::session::SessionBackend;

    const NOW: i64 = 1_700_000_000_000;

    fn gate_over(token: Option<&str>, expiry: Option<String>) -> (RouteGate<ManualClock>, SessionStore) {
        let backend = MemoryBackend::new();
        if let Some(token) = token {
            backend.set(SessionConfig::TOKEN_KEY, token);
        }
        if let Some(expiry) = expiry {
            backend.set(SessionConfig::EXPIRY_KEY, &expiry);
        }
        let store = SessionStore::new(backend);
        (
            RouteGate::with_clock(store.clone(), ManualClock::at(NOW)),
            store,
        )
    }

    #[test]
    fn expired_session_is_denied_and_cleared() {
        let (gate, store) = gate_over(Some("abc"), Some((NOW - 1_000).to_string()));

        let access = gate.check();

        assert_eq!(access, Access::Denied(Denial::Expired));
        assert_eq!(access.redirect(), Some(Redirect::sign_in()));
        assert_eq!(store.inspect(NOW), SessionState::Absent);
    }

    #[test]
    fn live_session_is_granted_and_left_untouched() {
        let (gate, store) = gate_over(Some("abc"), Some((NOW + 60_000).to_string()));

        let access = gate.check();

        assert!(access.is_granted());
        assert_eq!(access.redirect(), None);
        assert_eq!(
            store.read(),
            Some(Session {
                token: "abc".into(),
                expiry: NOW + 60_000
            })
        );
    }

    #[test]
    fn expiry_without_token_is_denied_and_cleared() {
        let (gate, store) = gate_over(None, Some((NOW + 60_000).to_string()));

        assert_eq!(gate.check(), Access::Denied(Denial::MissingToken));
        assert_eq!(store.raw_expiry(), None);
    }

    #[test]
    fn token_without_expiry_is_denied_and_cleared() {
        let (gate, store) = gate_over(Some("abc"), None);

        assert_eq!(gate.check(), Access::Denied(Denial::MissingExpiry));
        assert_eq!(store.token(), None);
    }

    #[test]
    fn malformed_expiry_fails_closed() {
        let (gate, store) = gate_over(Some("abc"), Some("not-a-number".into()));

        let access = gate.check();

        assert_eq!(access, Access::Denied(Denial::MalformedExpiry));
        assert!(access.redirect().is_some_and(|redirect| redirect.replace));
        assert_eq!(store.inspect(NOW), SessionState::Absent);
    }

    #[test]
    fn empty_store_is_denied() {
        let (gate, _store) = gate_over(None, None);
        assert_eq!(gate.check(), Access::Denied(Denial::NoSession));
    }

    #[test]
    fn gate_follows_the_clock_between_navigations() {
        let clock = ManualClock::at(NOW);
        let store = SessionStore::in_memory();
        store.write("abc", NOW + 5_000);
        let gate = RouteGate::with_clock(store.clone(), clock.clone());

        assert!(gate.check().is_granted());
        clock.advance(5_000);
        assert!(gate.check().is_granted());
        clock.advance(1);
        assert_eq!(gate.check(), Access::Denied(Denial::Expired));
        assert_eq!(store.read(), None);
    }

    #[test]
    fn redirect_targets_sign_in_with_replace() {
        let redirect = Redirect::sign_in();
        assert_eq!(redirect.path, "/login");
        assert!(redirect.replace);
    }
}
