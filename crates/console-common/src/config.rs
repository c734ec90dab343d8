//! Console configuration

/// Session persistence and expiry checking
pub struct SessionConfig;

impl SessionConfig {
    /// Storage key for the bearer token
    pub const TOKEN_KEY: &'static str = "token";

    /// Storage key for the absolute expiry, epoch milliseconds as a decimal string
    pub const EXPIRY_KEY: &'static str = "expiry";

    /// Background expiry check interval in milliseconds
    pub const WATCH_INTERVAL_MS: u32 = 1_000;

    /// Lifetime applied when the sign-in response carries no expiry
    pub const DEFAULT_LIFETIME_SECS: i64 = 60 * 60;

    /// Public sign-in route every denial is redirected to
    pub const SIGN_IN_PATH: &'static str = "/login";
}

/// Remote API location
pub struct ApiConfig;

impl ApiConfig {
    /// Build-time override, e.g. `PANCHAYAT_API_URL=https://api.example.org trunk build`
    pub const BASE_URL_OVERRIDE: Option<&'static str> = option_env!("PANCHAYAT_API_URL");

    /// Path appended to the page origin when no override is set
    pub const API_PREFIX: &'static str = "/api";

    /// Resolve the base URL for API calls
    pub fn base_url() -> String {
        if let Some(url) = Self::BASE_URL_OVERRIDE {
            return url.trim_end_matches('/').to_string();
        }
        format!("{}{}", page_origin(), Self::API_PREFIX)
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> String {
    "http://localhost:5173".to_string()
}
