//! Application state

use std::sync::Arc;

use vouch_registry::CredentialRegistry;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The registry service
    pub registry: Arc<CredentialRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<CredentialRegistry>) -> Self {
        Self { registry }
    }

    /// State over a fresh in-memory registry
    pub fn in_memory() -> Self {
        Self::new(Arc::new(CredentialRegistry::in_memory()))
    }
}
