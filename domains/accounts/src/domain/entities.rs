//! Accounts domain entities

use chrono::{DateTime, Utc};
use furniture_auth::UserRole;
use furniture_common::hash_password;
use uuid::Uuid;

/// A registered user.
///
/// Users are created at signup and immutable thereafter: there are no
/// update or delete paths. The password hash never appears in API
/// responses.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub role: UserRole,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a freshly hashed password
    pub fn new(username: String, name: String, role: UserRole, password: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            name,
            role,
            password_hash: hash_password(password),
            created_at: Utc::now(),
        }
    }
}
