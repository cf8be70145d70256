//! Route definitions for the designs domain API

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers;
use super::middleware::DesignsState;

/// Create all designs domain API routes
pub fn routes() -> Router<DesignsState> {
    Router::new()
        .route("/getAllDesigns", get(handlers::get_all_designs))
        .route("/getUserDesigns", get(handlers::get_user_designs))
        .route("/createDesign", post(handlers::create_design))
        .route("/updateDesign/{id}", put(handlers::update_design))
        .route("/deleteDesign/{id}", delete(handlers::delete_design))
}
