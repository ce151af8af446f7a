//! Frontend configuration

/// Deployment and session configuration
pub struct AppConfig;

impl AppConfig {
    /// Origin serving the Login application
    pub const LOGIN_ORIGIN: &'static str = "http://localhost:5173";

    /// Origin serving the Customer application
    pub const CUSTOMER_ORIGIN: &'static str = "http://localhost:5174";

    /// Auth service base URL (login, register, refresh, sessions)
    pub const AUTH_API_BASE: &'static str = "http://localhost:8080/api";

    /// App/admin service base URL (accounts, transactions, admin)
    pub const APP_API_BASE: &'static str = "http://localhost:8081/api";

    /// Local storage key for the access token
    pub const ACCESS_TOKEN_KEY: &'static str = "accessToken";

    /// Local storage key for the refresh token
    pub const REFRESH_TOKEN_KEY: &'static str = "refreshToken";

    /// Delay before the post-login redirect, so the welcome screen is
    /// visible and the auth state has settled
    pub const WELCOME_REDIRECT_DELAY_MS: u32 = 1_500;
}

/// Idle-session timer configuration
pub struct IdleConfig;

impl IdleConfig {
    /// Total inactivity budget before forced logout
    pub const SESSION_TIMEOUT_MS: u64 = 5 * 60 * 1000;

    /// Warning lead time before expiry
    pub const WARNING_BEFORE_EXPIRY_MS: u64 = 60 * 1000;

    /// Clock granularity of the timer
    pub const TICK_MS: u32 = 1_000;

    /// DOM events counted as user activity
    pub const ACTIVITY_EVENTS: [&'static str; 6] = [
        "mousedown",
        "mousemove",
        "keypress",
        "scroll",
        "touchstart",
        "click",
    ];
}

/// Admin dashboard refresh configuration
pub struct AdminRefreshConfig;

impl AdminRefreshConfig {
    /// Poll cadence while the tab is visible
    pub const POLL_VISIBLE_MS: u32 = 10_000;

    /// Poll cadence while the tab is hidden
    pub const POLL_HIDDEN_MS: u32 = 30_000;

    /// Cross-tab broadcast channel carrying refresh hints
    pub const CHANNEL: &'static str = "nexabank-admin";
}
