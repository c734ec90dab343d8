//! Yew front end of the panchayat admin console

pub mod app;
pub mod components;
pub mod context;
pub mod guard;
pub mod pages;
pub mod routes;
pub mod telemetry;

pub use app::App;
pub use routes::Route;
