//! Accounts API handlers
//!
//! Implements:
//! - POST /signup — Register a new user
//! - POST /login — Verify credentials and set the session cookie
//! - POST /logout — Clear the session cookie
//! - GET /me — Return the current caller's profile

use axum::{extract::State, Form, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use furniture_auth::{AuthError, AuthIdentity, SessionUser, UserRole, SESSION_COOKIE};
use furniture_common::{Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::AccountsState;
use crate::domain::entities::User;

/// Request for creating a user account
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[serde(default = "default_role")]
    pub role: UserRole,

    #[validate(length(min = 1))]
    pub password: String,
}

fn default_role() -> UserRole {
    UserRole::Customer
}

/// Form body for login, in the OAuth2 password-grant shape
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// User profile DTO — never includes the password hash
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub role: UserRole,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            role: user.role,
        }
    }
}

impl From<AuthIdentity> for UserResponse {
    fn from(user: AuthIdentity) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            role: user.role,
        }
    }
}

/// Response for a successful login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// POST /signup — Register a new user
pub async fn signup(
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> Result<Json<UserResponse>> {
    // Friendly duplicate check; the unique index backstops the race
    if state.users.find_by_username(&req.username).await?.is_some() {
        return Err(Error::Validation("Username already registered".to_string()));
    }

    let user = User::new(req.username, req.name, req.role, &req.password);
    let created = state.users.create(&user).await?;

    Ok(Json(created.into()))
}

/// POST /login — Verify credentials, set the session cookie
pub async fn login(
    State(state): State<AccountsState>,
    jar: CookieJar,
    Form(req): Form<LoginRequest>,
) -> std::result::Result<(CookieJar, Json<TokenResponse>), AuthError> {
    let (_user, token) = state.auth.login(&req.username, &req.password).await?;

    let cookie = Cookie::build((SESSION_COOKIE, token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::minutes(state.auth.token_ttl_minutes()))
        .build();

    Ok((
        jar.add(cookie),
        Json(TokenResponse {
            access_token: token,
            token_type: "bearer",
        }),
    ))
}

/// POST /logout — Clear the session cookie.
///
/// The token itself stays cryptographically valid until expiry; there is
/// no server-side revocation list.
pub async fn logout(
    SessionUser(_ctx): SessionUser,
    jar: CookieJar,
) -> (CookieJar, Json<serde_json::Value>) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Json(json!({ "message": "Successfully logged out" })))
}

/// GET /me — Return the current caller's profile
pub async fn me(SessionUser(ctx): SessionUser) -> Json<UserResponse> {
    Json(ctx.user.into())
}
