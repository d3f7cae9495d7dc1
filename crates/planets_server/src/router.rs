//! Router construction for the planets server.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use planets_core::PlanetService;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Build the full axum router with all routes and middleware.
pub fn build_router(service: Arc<dyn PlanetService>) -> Router {
    let planets = Router::new()
        .route(
            "/planets",
            get(handlers::planets::list).post(handlers::planets::create),
        )
        .route("/planets/name/:name", get(handlers::planets::get_by_name))
        .route(
            "/planets/:id",
            get(handlers::planets::get).delete(handlers::planets::remove),
        );

    Router::new()
        .route("/health", get(handlers::health::health))
        .merge(planets)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(service))
}
