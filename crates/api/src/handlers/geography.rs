//! Handlers for the read-only geography reference data.
//!
//! Countries and cities are seeded by the `seed-geodata` binary and never
//! modified through the API.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use wayplan_core::geo::Coordinates;
use wayplan_db::models::city::City;
use wayplan_db::models::country::Country;
use wayplan_db::repositories::{CityRepo, CountryRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/countries
pub async fn list_countries(State(state): State<AppState>) -> AppResult<Json<Vec<Country>>> {
    let countries = CountryRepo::list(&state.pool).await?;
    Ok(Json(countries))
}

/// GET /api/v1/countries/{code}/cities
pub async fn list_cities(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<Vec<City>>> {
    let cities = CityRepo::list_by_country(&state.pool, &code).await?;
    Ok(Json(cities))
}

/// Query parameters for the nearest-cities lookup.
#[derive(Debug, Deserialize)]
pub struct NearestParams {
    pub latitude: f64,
    pub longitude: f64,
}

/// GET /api/v1/cities/nearest?latitude=..&longitude=..
///
/// Cities strictly inside the fixed-size box around the query point. An
/// empty result is an empty list, not an error; the box never widens.
pub async fn nearest_cities(
    State(state): State<AppState>,
    Query(params): Query<NearestParams>,
) -> AppResult<Json<Vec<City>>> {
    let center = Coordinates {
        latitude: params.latitude,
        longitude: params.longitude,
    };
    let cities = CityRepo::find_nearest(&state.pool, center).await?;
    Ok(Json(cities))
}
