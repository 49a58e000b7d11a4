//! Route definitions for the geography reference data.

use axum::routing::get;
use axum::Router;

use crate::handlers::geography;
use crate::state::AppState;

/// Country and city routes, merged directly into `/api/v1` because they
/// span two top-level prefixes.
///
/// ```text
/// GET /countries                -> list_countries
/// GET /countries/{code}/cities  -> list_cities
/// GET /cities/nearest           -> nearest_cities
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/countries", get(geography::list_countries))
        .route("/countries/{code}/cities", get(geography::list_cities))
        .route("/cities/nearest", get(geography::nearest_cities))
}
