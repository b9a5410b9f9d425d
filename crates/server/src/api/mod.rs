//! API module providing the HTTP surface of the interlock service.
//!
//! This module is organized into submodules:
//! - `interlock` - Account interlock endpoints (/, /auth/callback)
//! - `health` - Health check endpoint (/healthz)
//! - `openapi` - OpenAPI/Utoipa configuration

pub mod health;
pub mod interlock;
pub mod openapi;

pub use interlock::AppState;

// Re-export commonly used items
pub use health::MISC_TAG;
pub use interlock::INTERLOCK_TAG;

use crate::AppResources;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_redoc::{Redoc, Servable};

/// Address the service listens on. Fixed: all interfaces, port 3000.
pub const BIND_ADDR: &str = "0.0.0.0:3000";

/// Starts the web server with all configured routes.
#[tracing::instrument(skip(app_state, app_resources))]
pub async fn start_webserver(
    app_state: AppState,
    app_resources: AppResources,
) -> color_eyre::Result<()> {
    // Build the router and attach middleware layers. The interlock routes live at
    // the root, so they are merged rather than nested under a prefix.
    let (router, api) = OpenApiRouter::with_openapi(openapi::ApiDoc::openapi())
        .merge(interlock::router(app_state))
        .routes(routes!(health::health))
        .layer(axum::Extension(app_resources))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .split_for_parts();

    let router = router.merge(Redoc::with_url("/api-docs", api));

    let listener = tokio::net::TcpListener::bind(BIND_ADDR).await?;
    tracing::info!(addr = BIND_ADDR, "Server running");
    axum::serve(listener, router.into_make_service())
        .await
        .map_err(|e| color_eyre::Report::msg(format!("Failed to start server: {e}")))?;

    Ok(())
}
