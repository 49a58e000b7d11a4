//! Handler for walking directions between two itinerary places.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use wayplan_core::error::CoreError;
use wayplan_core::types::DbId;
use wayplan_db::models::itinerary::Place;
use wayplan_db::repositories::{AttractionRepo, PlaceRepo};
use wayplan_directions::{cached_walking_route, PlaceDirections, RoutePlace};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for the directions lookup: two place ids.
#[derive(Debug, Deserialize)]
pub struct DirectionsParams {
    pub start: DbId,
    pub end: DbId,
}

/// GET /api/v1/directions?start=..&end=..
///
/// Routes are cached per ordered place pair, so repeating a lookup does
/// not call the routing provider again.
pub async fn walking_directions(
    State(state): State<AppState>,
    Query(params): Query<DirectionsParams>,
) -> AppResult<Json<PlaceDirections>> {
    let start = resolve_place(&state, params.start).await?;
    let end = resolve_place(&state, params.end).await?;

    let directions = cached_walking_route(&state.pool, &state.directions, &start, &end).await?;
    Ok(Json(directions))
}

/// Load a place and its attraction's coordinates for routing.
async fn resolve_place(state: &AppState, id: DbId) -> AppResult<RoutePlace> {
    let place: Place = PlaceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Place", id }))?;
    let attraction = AttractionRepo::find_by_id(&state.pool, place.attraction_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Attraction",
            id: place.attraction_id,
        }))?;

    Ok(RoutePlace {
        id: place.id,
        sort_order: place.sort_order,
        attraction_id: attraction.id,
        latitude: attraction.latitude,
        longitude: attraction.longitude,
    })
}
