//! Repositories for the designs domain

mod designs;

pub use designs::DesignRepository;
