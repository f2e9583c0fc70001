//! Build-time Configuration

/// Report service used when `NUTRITRACK_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:9000";

/// How long toasts stay on screen
pub const TOAST_DURATION_MS: u32 = 3_000;

/// Delay between logout and the redirect to the login page
pub const LOGOUT_REDIRECT_DELAY_MS: u32 = 1_000;

pub fn api_base_url() -> &'static str {
    option_env!("NUTRITRACK_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Join `path` onto `base`, tolerating a trailing slash on the base
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
