//! Vouch Server Library
//!
//! HTTP server for the vouch credential registry. The router is built in
//! the library so integration tests can drive it directly; the binary
//! handles startup.

pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::broadcast::error::RecvError;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use vouch_registry::CredentialRegistry;

use state::AppState;

/// Build CORS layer based on environment.
///
/// `VOUCH_CORS_ORIGINS` is a comma-separated allow-list; `*` (the
/// default) allows any origin.
fn cors_layer() -> CorsLayer {
    let origins = std::env::var("VOUCH_CORS_ORIGINS").unwrap_or_else(|_| "*".into());

    let allow_origin = if origins.trim() == "*" {
        AllowOrigin::any()
    } else {
        let parsed: Vec<_> = origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .max_age(std::time::Duration::from_secs(3600))
}

/// Create the main router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Type registration and lookup
        .route("/types", post(routes::register_type))
        .route("/types/:id", get(routes::get_type))
        // Credential assignment and history
        .route("/credentials", post(routes::assign_credential))
        .route("/identities/:owner/credentials", get(routes::credentials_for))
        // Health check
        .route("/health", get(routes::health))
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Run a registry server on `bind` until the process exits
pub async fn serve(bind: &str) -> std::io::Result<()> {
    let registry = Arc::new(CredentialRegistry::in_memory());
    spawn_event_logger(&registry);

    let app = create_router(AppState::new(registry));

    tracing::info!("Starting vouch registry server on {}", bind);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    axum::serve(listener, app).await
}

/// Log every registry event through tracing until the registry goes away
pub fn spawn_event_logger(registry: &CredentialRegistry) -> tokio::task::JoinHandle<()> {
    let mut events = registry.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => tracing::info!(?event, "registry event"),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "event subscriber lagged")
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}
