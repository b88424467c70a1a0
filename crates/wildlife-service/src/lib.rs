//! Wildlife sightings HTTP service.
//!
//! # Endpoints
//!
//! - `GET /api/sightings` - Every sighting
//! - `GET /api/sightings/verified` - Verified sightings only
//! - `GET /api/sightings/species-list` - Distinct species names
//! - `GET /api/sightings/habitat/forest` - Forest sightings with a count
//! - `GET /api/sightings/search/eagle` - First species containing "eagle"
//! - `GET /api/sightings/find-index/moose` - Position of the first "Moose"
//! - `GET /api/sightings/recent` - The three most recent sightings
//! - `GET /` - Landing page from the views directory
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live`, `GET /health/ready` - Probes
//!
//! Anything else is looked up in the public directory, then answered with
//! `404 Route not found.`

use axum::{handler::HandlerWithoutStateExt, routing::get, Router};
use tower_http::services::ServeDir;

use wildlife_service_shared::{
    health_live, health_ready, metrics_handler, AppState, MetricsConfig, MetricsLayer,
};

pub mod handlers;
pub mod site;

/// Build the service router.
pub fn app(state: AppState, metrics: &MetricsConfig) -> Router {
    let static_files = ServeDir::new(state.public_dir())
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(handlers::route_not_found.into_service());

    let mut router = Router::new()
        .route("/", get(site::index))
        .route("/api/sightings", get(handlers::list_sightings))
        .route("/api/sightings/verified", get(handlers::list_verified))
        .route("/api/sightings/species-list", get(handlers::list_species))
        .route("/api/sightings/habitat/forest", get(handlers::forest_sightings))
        .route("/api/sightings/search/eagle", get(handlers::search_eagle))
        .route("/api/sightings/find-index/moose", get(handlers::find_moose_index))
        .route("/api/sightings/recent", get(handlers::recent_sightings))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready));

    if metrics.enabled {
        router = router.route(&metrics.path, get(metrics_handler));
    }

    router
        .method_not_allowed_fallback(handlers::route_not_found)
        .fallback_service(static_files)
        .layer(MetricsLayer)
        .with_state(state)
}
