//! Design CRUD API handlers
//!
//! Implements:
//! - GET /getAllDesigns — All designs, any authenticated role
//! - GET /getUserDesigns — Caller-owned designs, designers only
//! - POST /createDesign — Create a design, designers only
//! - PUT /updateDesign/{id} — Partial update, owner only
//! - DELETE /deleteDesign/{id} — Delete, owner only

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use furniture_auth::{DesignerUser, SessionUser};
use furniture_common::{Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::DesignsState;
use crate::domain::entities::Design;
use crate::domain::policy::{authorize_owner, DesignAction};

/// Request for creating a design
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDesignRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Opaque design payload, stored verbatim
    pub data: serde_json::Value,
}

/// Partial update: only supplied fields are applied
#[derive(Debug, Deserialize)]
pub struct UpdateDesignRequest {
    pub name: Option<String>,
    pub data: Option<serde_json::Value>,
}

/// Design response DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub data: serde_json::Value,
}

impl From<Design> for DesignResponse {
    fn from(design: Design) -> Self {
        Self {
            id: design.id,
            owner_id: design.owner_id,
            name: design.name,
            data: design.data,
        }
    }
}

/// GET /getAllDesigns — All designs, available to any authenticated user
pub async fn get_all_designs(
    SessionUser(_ctx): SessionUser,
    State(state): State<DesignsState>,
) -> Result<Json<Vec<DesignResponse>>> {
    let designs = state.designs.find_all().await?;

    let responses: Vec<DesignResponse> = designs.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}

/// GET /getUserDesigns — Designs owned by the caller, designers only
pub async fn get_user_designs(
    DesignerUser(ctx): DesignerUser,
    State(state): State<DesignsState>,
) -> Result<Json<Vec<DesignResponse>>> {
    let designs = state.designs.find_by_owner(ctx.user.id).await?;

    let responses: Vec<DesignResponse> = designs.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}

/// POST /createDesign — Create a design owned by the caller.
///
/// The owner id always comes from the session, never from the payload.
pub async fn create_design(
    DesignerUser(ctx): DesignerUser,
    State(state): State<DesignsState>,
    ValidatedJson(req): ValidatedJson<CreateDesignRequest>,
) -> Result<Json<DesignResponse>> {
    let design = Design::new(ctx.user.id, req.name, req.data);

    let created = state.designs.create(&design).await?;
    Ok(Json(created.into()))
}

/// PUT /updateDesign/{id} — Apply a partial update to an owned design
pub async fn update_design(
    DesignerUser(ctx): DesignerUser,
    State(state): State<DesignsState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDesignRequest>,
) -> Result<Json<DesignResponse>> {
    let existing = state.designs.find_by_id(id).await?;
    let existing = authorize_owner(existing, ctx.user.id, DesignAction::Update)?;

    // An empty partial body is a no-op that still returns current state
    if req.name.is_none() && req.data.is_none() {
        return Ok(Json(existing.into()));
    }

    let updated = state
        .designs
        .update_fields(id, req.name, req.data)
        .await?
        .ok_or_else(|| furniture_common::Error::NotFound("Design not found".to_string()))?;

    Ok(Json(updated.into()))
}

/// DELETE /deleteDesign/{id} — Delete an owned design
pub async fn delete_design(
    DesignerUser(ctx): DesignerUser,
    State(state): State<DesignsState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let existing = state.designs.find_by_id(id).await?;
    authorize_owner(existing, ctx.user.id, DesignAction::Delete)?;

    state.designs.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
