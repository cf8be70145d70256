//! Future Furniture API composition root
//!
//! Composes the accounts and designs domain routers into a single
//! application. The pool and `AuthBackend` are constructed once here and
//! injected into each domain state.

use axum::{Json, Router};
use furniture_accounts::AccountsState;
use furniture_auth::{AuthBackend, AuthConfig};
use furniture_common::Config;
use furniture_designs::DesignsState;
use sqlx::PgPool;

/// Create the main application router with all routes
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    let auth = AuthBackend::new(
        pool.clone(),
        AuthConfig {
            jwt_secret: config.jwt_secret.clone(),
            token_ttl_minutes: config.token_ttl_minutes,
        },
    );

    let accounts_state = AccountsState {
        users: furniture_accounts::UserRepository::new(pool.clone()),
        auth: auth.clone(),
    };

    let designs_state = DesignsState {
        designs: furniture_designs::DesignRepository::new(pool),
        auth,
    };

    // Build router — compose domain routers with shared infrastructure routes
    Router::new()
        .route("/", axum::routing::get(root))
        .route("/health", axum::routing::get(health_check))
        .merge(furniture_accounts::routes().with_state(accounts_state))
        .merge(furniture_designs::routes().with_state(designs_state))
}

/// Unauthenticated liveness message
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Welcome to Future Furniture API" }))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
