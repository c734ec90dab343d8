//! Authentication plumbing shared by the client and the app shell

pub mod error_handler;

pub use error_handler::{notify_unauthorized, on_unauthorized, HandlerRegistration};
