//! Expiry guard: a synchronous route gate plus a periodic watcher.
//!
//! Both consult the [`SessionStore`](crate::session::SessionStore) and
//! clear it when the session is no longer usable. Neither ever returns an
//! error; denial is an outcome the caller turns into a history-replacing
//! redirect to the sign-in route.

mod gate;
mod watcher;

pub use gate::{Access, Denial, Redirect, RouteGate};
pub use watcher::{ExpiryCheck, ExpiryWatcher, IntervalTicker, Ticker, WatchOutcome};
