//! Test utilities for integration tests

use axum::Router;
use vouch_server::state::AppState;

/// Test application wrapper
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Create a new test application over an in-memory registry
    pub fn new() -> Self {
        let state = AppState::in_memory();
        let router = vouch_server::create_router(state);

        Self { router }
    }

    /// Get the router for making requests
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}
