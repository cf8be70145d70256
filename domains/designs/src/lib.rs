//! Designs domain: design documents, ownership policy, CRUD API

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::Design;
pub use domain::policy;
pub use repository::DesignRepository;

// Re-export API types
pub use api::routes;
pub use api::DesignsState;
