//! Ownership policy for design mutations
//!
//! Pure authorization rules over an already-fetched row. The designer
//! role check happens earlier, in the `DesignerUser` extractor, so the
//! precedence at every mutation site is: role → existence → ownership.

use furniture_common::{Error, Result};
use uuid::Uuid;

use crate::domain::entities::Design;

/// Mutating operations gated on ownership
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignAction {
    Update,
    Delete,
}

impl DesignAction {
    fn denial_message(&self) -> &'static str {
        match self {
            DesignAction::Update => "You can only update your own designs",
            DesignAction::Delete => "You can only delete your own designs",
        }
    }
}

/// Admit the caller to mutate a design, or fail.
///
/// A missing design is NotFound even for a non-owner caller; the
/// ownership check only runs against an existing row.
pub fn authorize_owner(
    design: Option<Design>,
    caller_id: Uuid,
    action: DesignAction,
) -> Result<Design> {
    let design = design.ok_or_else(|| Error::NotFound("Design not found".to_string()))?;

    if design.owner_id != caller_id {
        return Err(Error::Authorization(action.denial_message().to_string()));
    }

    Ok(design)
}
