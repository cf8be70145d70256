//! Authentication configuration

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    /// Session token lifetime in minutes
    pub token_ttl_minutes: i64,
}
