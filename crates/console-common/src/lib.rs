//! Shared building blocks for the panchayat admin console.
//!
//! Everything that does not need a browser lives here: the persisted
//! session store, the expiry guard, the typed REST client and the
//! resource records it decodes.

pub mod auth;
pub mod client;
pub mod clock;
pub mod components;
pub mod config;
pub mod guard;
pub mod resources;
pub mod services;
pub mod session;

pub use client::{
    ApiClientBuilder, AuthenticatedClient, ClientError, PublicClient, RequestBody, Upload,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use components::{Spinner, SpinnerSize};
pub use config::{ApiConfig, SessionConfig};
pub use guard::{Access, Denial, ExpiryWatcher, IntervalTicker, RouteGate, Ticker};
pub use session::{Session, SessionState, SessionStore};
