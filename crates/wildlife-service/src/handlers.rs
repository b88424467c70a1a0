//! Sightings API handlers.
//!
//! Each handler loads the document fresh, runs one `wildlife-lib` query and
//! serializes the result. Borrowed query results are rendered before the
//! handler returns, so nothing outlives the request.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use wildlife_lib::{
    all, by_habitat, find_index_by_species_exact, search_species_contains, species_list,
    top_n_recent, verified_only, Sighting,
};
use wildlife_service_shared::{record_query, ApiError, AppState};

/// Habitat served by `/api/sightings/habitat/forest`.
pub const FOREST_HABITAT: &str = "forest";

/// Substring searched by `/api/sightings/search/eagle`.
pub const EAGLE_SEARCH_TERM: &str = "eagle";

/// Exact species looked up by `/api/sightings/find-index/moose`.
pub const MOOSE_SPECIES: &str = "Moose";

/// Number of records returned by `/api/sightings/recent`.
pub const RECENT_LIMIT: usize = 3;

async fn load(state: &AppState, query: &'static str) -> Result<Vec<Sighting>, ApiError> {
    state.load_sightings().await.map_err(|err| {
        record_query(query, "unavailable");
        ApiError::from(err)
    })
}

fn lookup_failed(query: &'static str, err: wildlife_lib::Error) -> ApiError {
    record_query(query, "not_found");
    warn!(query, error = %err, "lookup found no match");
    ApiError::from(err)
}

/// GET /api/sightings
pub async fn list_sightings(State(state): State<AppState>) -> Result<Response, ApiError> {
    let sightings = load(&state, "all").await?;
    record_query("all", "ok");
    Ok(Json(all(&sightings)).into_response())
}

/// GET /api/sightings/verified
pub async fn list_verified(State(state): State<AppState>) -> Result<Response, ApiError> {
    let sightings = load(&state, "verified").await?;
    let verified = verified_only(&sightings);
    record_query("verified", "ok");
    info!(total = sightings.len(), verified = verified.len(), "filtered verified sightings");
    Ok(Json(verified).into_response())
}

/// GET /api/sightings/species-list
pub async fn list_species(State(state): State<AppState>) -> Result<Response, ApiError> {
    let sightings = load(&state, "species_list").await?;
    record_query("species_list", "ok");
    Ok(Json(species_list(&sightings)).into_response())
}

/// GET /api/sightings/habitat/forest
pub async fn forest_sightings(State(state): State<AppState>) -> Result<Response, ApiError> {
    let sightings = load(&state, "habitat").await?;
    let matches = by_habitat(&sightings, FOREST_HABITAT);
    record_query("habitat", "ok");
    info!(habitat = FOREST_HABITAT, count = matches.count, "filtered by habitat");
    Ok(Json(matches).into_response())
}

/// GET /api/sightings/search/eagle
pub async fn search_eagle(State(state): State<AppState>) -> Result<Response, ApiError> {
    let sightings = load(&state, "search").await?;
    let found = search_species_contains(&sightings, EAGLE_SEARCH_TERM)
        .map_err(|err| lookup_failed("search", err))?;
    record_query("search", "ok");
    Ok(Json(found).into_response())
}

/// GET /api/sightings/find-index/moose
///
/// Matches `"Moose"` exactly; `"moose"` or `"Moose calf"` do not count.
pub async fn find_moose_index(State(state): State<AppState>) -> Result<Response, ApiError> {
    let sightings = load(&state, "find_index").await?;
    let position = find_index_by_species_exact(&sightings, MOOSE_SPECIES)
        .map_err(|err| lookup_failed("find_index", err))?;
    record_query("find_index", "ok");
    Ok(Json(position).into_response())
}

/// GET /api/sightings/recent
pub async fn recent_sightings(State(state): State<AppState>) -> Result<Response, ApiError> {
    let sightings = load(&state, "recent").await?;
    record_query("recent", "ok");
    Ok(Json(top_n_recent(&sightings, RECENT_LIMIT)).into_response())
}

/// Fallback for every request no route or static asset claims.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
