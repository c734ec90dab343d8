//! Persisted session state
//!
//! The session is two string entries in the client's key/value storage:
//! an opaque bearer token and an absolute expiry in epoch milliseconds.
//! Only the guard and the sign-in/logout flows hold a [`SessionStore`];
//! content screens reach the token through the authenticated client.

mod backend;
mod store;

pub use backend::{LocalStorageBackend, MemoryBackend, SessionBackend};
pub use store::{parse_expiry, Session, SessionState, SessionStore};
