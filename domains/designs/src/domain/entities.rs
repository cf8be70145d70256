//! Designs domain entities

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A design document.
///
/// `data` is an opaque JSON blob: stored and returned verbatim, never
/// parsed or validated by this domain. `owner_id` is bound at creation
/// and immutable for the life of the record.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Design {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub data: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl Design {
    /// Create a new design owned by the given designer
    pub fn new(owner_id: Uuid, name: String, data: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name,
            data,
            created_at: Utc::now(),
        }
    }
}
