//! Designs domain layer: entities and ownership policy

pub mod entities;
pub mod policy;
