//! Design repository
//!
//! No transactions and no optimistic locking: two concurrent updates to
//! the same design interleave with last-write-wins semantics at field
//! granularity.

use crate::domain::entities::Design;
use furniture_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct DesignRepository {
    pool: PgPool,
}

impl DesignRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find design by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Design>> {
        let design = sqlx::query_as::<_, Design>(
            r#"
            SELECT id, owner_id, name, data, created_at
            FROM designs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(design)
    }

    /// Unfiltered snapshot of all designs
    pub async fn find_all(&self) -> Result<Vec<Design>> {
        let designs = sqlx::query_as::<_, Design>(
            r#"
            SELECT id, owner_id, name, data, created_at
            FROM designs
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(designs)
    }

    /// Snapshot of designs owned by the given user
    pub async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Design>> {
        let designs = sqlx::query_as::<_, Design>(
            r#"
            SELECT id, owner_id, name, data, created_at
            FROM designs
            WHERE owner_id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(designs)
    }

    /// Create a new design
    pub async fn create(&self, design: &Design) -> Result<Design> {
        let created = sqlx::query_as::<_, Design>(
            r#"
            INSERT INTO designs (id, owner_id, name, data, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, owner_id, name, data, created_at
            "#,
        )
        .bind(design.id)
        .bind(design.owner_id)
        .bind(&design.name)
        .bind(&design.data)
        .bind(design.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Apply the supplied fields to a design.
    ///
    /// Omitted fields are left unchanged via COALESCE; `id` and
    /// `owner_id` are not reachable from this path. Returns the full
    /// updated row, or None if the id no longer exists.
    pub async fn update_fields(
        &self,
        id: Uuid,
        name: Option<String>,
        data: Option<serde_json::Value>,
    ) -> Result<Option<Design>> {
        let updated = sqlx::query_as::<_, Design>(
            r#"
            UPDATE designs SET
                name = COALESCE($2, name),
                data = COALESCE($3, data)
            WHERE id = $1
            RETURNING id, owner_id, name, data, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(data)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Delete a design
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM designs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
