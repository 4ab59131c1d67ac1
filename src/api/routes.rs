use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_context;

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Browsing
        .route("/movies", get(handlers::get_movies))
        // Recommendations
        .route("/recommendations", post(handlers::recommend))
        // Snapshot maintenance
        .route("/refresh", post(handlers::refresh))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_context))
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
