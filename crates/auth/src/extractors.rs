//! Axum extractors for session authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::AuthBackend;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::extract_bearer_token;

/// Name of the session cookie set at login
pub const SESSION_COOKIE: &str = "access_token";

/// Pull the session token out of the request.
///
/// The cookie is the primary carrier; a `Bearer` Authorization header is
/// accepted as an equivalent transport. Cookie wins when both are present.
fn extract_session_token(parts: &Parts) -> Result<String, AuthError> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        return Ok(cookie.value().to_string());
    }

    match parts.headers.get(AUTHORIZATION) {
        Some(header) => extract_bearer_token(header),
        None => Err(AuthError::MissingCredentials),
    }
}

/// Authenticated caller extractor (any role)
#[derive(Debug)]
pub struct SessionUser(pub AuthContext);

impl<S> FromRequestParts<S> for SessionUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);

        let token = extract_session_token(parts)?;
        let auth_context = backend.authenticate_token(&token).await?;

        Ok(SessionUser(auth_context))
    }
}

/// Designer-role authenticated caller extractor.
///
/// Like `SessionUser` but rejects non-designer callers with 403 FORBIDDEN.
/// The role check runs before any handler-side lookup, so a customer is
/// refused without touching the designs table.
#[derive(Debug)]
pub struct DesignerUser(pub AuthContext);

impl<S> FromRequestParts<S> for DesignerUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let SessionUser(auth_context) = SessionUser::from_request_parts(parts, state).await?;

        if !auth_context.is_designer() {
            return Err(AuthError::DesignerOnly);
        }

        Ok(DesignerUser(auth_context))
    }
}
