//! Vouch Server
//!
//! HTTP server for the vouch credential registry.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                "vouch_server=debug,vouch_registry=debug,tower_http=debug".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("VOUCH_BIND").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    vouch_server::serve(&addr).await.unwrap();
}
