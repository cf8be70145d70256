//! Concrete authentication backend
//!
//! Wraps `PgPool` + `AuthConfig` and owns auth-specific SQL queries.
//! Uses runtime `sqlx::query_as` (not macros) so the session read model
//! stays decoupled from the accounts domain's row ownership.

use furniture_common::verify_password;
use sqlx::PgPool;

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt;
use crate::types::AuthIdentity;

/// Row type for credential lookup (includes password_hash for verification)
#[derive(sqlx::FromRow)]
struct CredentialRow {
    #[sqlx(flatten)]
    identity: AuthIdentity,
    password_hash: String,
}

/// Concrete authentication backend.
///
/// Wraps a database pool and auth configuration. Provides credential
/// verification, session token issue, and token-to-identity resolution.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    pool: PgPool,
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(pool: PgPool, config: AuthConfig) -> Self {
        Self { pool, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Session cookie lifetime in minutes
    pub fn token_ttl_minutes(&self) -> i64 {
        self.config.token_ttl_minutes
    }

    /// Find user identity by username (lightweight subset of User)
    pub(crate) async fn find_user(
        &self,
        username: &str,
    ) -> Result<Option<AuthIdentity>, AuthError> {
        let user: Option<AuthIdentity> = sqlx::query_as(
            r#"
            SELECT id, username, name, role, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, username = %username, "Failed to load user");
            AuthError::UserLoadError
        })?;

        Ok(user)
    }

    /// Verify a username/password pair and issue a signed session token.
    ///
    /// Unknown username and wrong password fail identically so callers
    /// cannot probe which usernames exist.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(AuthIdentity, String), AuthError> {
        let row: Option<CredentialRow> = sqlx::query_as(
            r#"
            SELECT id, username, name, role, created_at, password_hash
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to load credentials");
            AuthError::UserLoadError
        })?;

        let row = row.ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &row.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let token =
            jwt::encode_session_token(&row.identity.username, row.identity.role, &self.config)?;

        Ok((row.identity, token))
    }

    /// Resolve a session token to an authenticated caller.
    ///
    /// Validates signature and expiry, then re-fetches the user record by
    /// the claim's username. Identity and role come from the fresh row;
    /// a token for a vanished user is rejected.
    pub async fn authenticate_token(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = jwt::validate_session_token(token, &self.config)?;

        let user = self
            .find_user(&claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(AuthContext::new(user))
    }
}
