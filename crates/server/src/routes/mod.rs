pub mod health;
pub mod profile;

use axum::{Router, routing::get};
use gitscope_services::services::github::ProfileLoader;
use tower_http::cors::CorsLayer;

/// Assemble the full API router under `/api`.
pub fn router(loader: &ProfileLoader) -> Router {
    let api = Router::new()
        .route("/health", get(health::health_check))
        .merge(profile::router(loader));

    Router::new().nest("/api", api).layer(CorsLayer::permissive())
}
