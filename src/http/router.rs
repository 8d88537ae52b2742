//! Route table for the Telusur web service.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::core::services::Services;
use crate::http::{handlers, middleware as http_middleware};

/// Build the application router around shared services
pub fn router(services: Arc<Services>) -> Router {
    Router::new()
        // Search page
        .route("/", get(handlers::index_page))
        // Health check endpoint
        .route("/health", get(handlers::health_handler))
        // API v1 endpoints
        .route("/api/v1/search", post(handlers::search_handler))
        .route("/api/v1/stats", get(handlers::stats_handler))
        .layer(middleware::from_fn(http_middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(services)
}
