//! HTTP Server Module
//!
//! Route table and server lifecycle.
//!
//! ## Routes
//! - `GET  /api/plants`: paginated, filtered listing.
//! - `GET  /api/plants/categories`: distinct category labels.
//! - `POST /api/plants`: create a plant.
//! - `GET  /api/health`, `GET /health`: liveness check.

pub mod middleware;

use crate::catalog::CatalogService;
use crate::catalog::handlers::{
    handle_create_plant, handle_health, handle_list_categories, handle_list_plants,
};
use crate::storage::PlantStore;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::Extension;
use axum::http::HeaderValue;
use axum::routing::get;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub const API_BASE: &str = "/api";

/// CORS policy for `origin`: `*` allows any origin, otherwise a
/// comma-separated list of exact origins.
pub fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let allow_origin = if origin.split(',').any(|o| o.trim() == "*") {
        AllowOrigin::any()
    } else {
        let origins = origin
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(|o| {
                HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin {:?}", o))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

pub fn build_router(store: Arc<dyn PlantStore>, cors: CorsLayer) -> Router {
    let catalog = CatalogService::new(store);

    Router::new()
        .route("/health", get(handle_health))
        .route(&format!("{API_BASE}/health"), get(handle_health))
        .route(
            &format!("{API_BASE}/plants"),
            get(handle_list_plants).post(handle_create_plant),
        )
        .route(
            &format!("{API_BASE}/plants/categories"),
            get(handle_list_categories),
        )
        .layer(Extension(catalog))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .layer(cors)
}

/// Serves `router` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Resolves on Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
