//! Designs domain state and auth backend integration

use crate::repository::DesignRepository;
use axum::extract::FromRef;
use furniture_auth::AuthBackend;

/// Application state for the designs domain
#[derive(Clone)]
pub struct DesignsState {
    pub designs: DesignRepository,
    pub auth: AuthBackend,
}

impl FromRef<DesignsState> for AuthBackend {
    fn from_ref(state: &DesignsState) -> Self {
        state.auth.clone()
    }
}
