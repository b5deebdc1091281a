//! Frontend configuration

/// Session cookie configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Name of the cookie that carries the session token
    pub const TOKEN_COOKIE: &'static str = "token";

    /// Name of the refresh-token cookie the backend may also set
    pub const REFRESH_COOKIE: &'static str = "refreshToken";

    /// Session cookie lifetime in seconds (7 days)
    pub const TOKEN_MAX_AGE_SECS: u32 = 7 * 24 * 60 * 60;
}
