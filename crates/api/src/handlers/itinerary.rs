//! Handlers for itineraries, their color palette, and the ordered
//! places within them.
//!
//! Place positions are client-driven: `sort_order` is stored as sent
//! (or defaulted to the append position) and never renumbered, so
//! removals leave gaps and the drag handler swaps positions with two
//! separate order updates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use wayplan_core::error::CoreError;
use wayplan_core::types::DbId;
use wayplan_db::models::itinerary::{
    CreateItinerary, CreatePlace, Itinerary, ItineraryColor, ItineraryWithDetails, Place,
    UpdateItinerary,
};
use wayplan_db::repositories::{ItineraryRepo, PlaceRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Itinerary handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/itineraries
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateItinerary>,
) -> AppResult<(StatusCode, Json<Itinerary>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Itinerary name must not be empty".to_string(),
        )));
    }
    let itinerary = ItineraryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(itinerary)))
}

/// GET /api/v1/itineraries/{id}
pub async fn get_details(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ItineraryWithDetails>> {
    let itinerary = ItineraryRepo::find_with_details(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Itinerary",
            id,
        }))?;
    Ok(Json(itinerary))
}

/// PUT /api/v1/itineraries/{id}
pub async fn rename(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateItinerary>,
) -> AppResult<Json<Itinerary>> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Itinerary name must not be empty".to_string(),
        )));
    }
    let itinerary = ItineraryRepo::rename(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Itinerary",
            id,
        }))?;
    Ok(Json(itinerary))
}

/// DELETE /api/v1/itineraries/{id}
///
/// Places go with it via `ON DELETE CASCADE`.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ItineraryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Itinerary",
            id,
        }))
    }
}

/// GET /api/v1/trips/{trip_id}/itineraries
///
/// An unknown trip yields an empty list rather than a 404.
pub async fn list_by_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<Json<Vec<ItineraryWithDetails>>> {
    let itineraries = ItineraryRepo::list_by_trip(&state.pool, trip_id).await?;
    Ok(Json(itineraries))
}

/// GET /api/v1/colors
pub async fn list_colors(State(state): State<AppState>) -> AppResult<Json<Vec<ItineraryColor>>> {
    let colors = ItineraryRepo::list_colors(&state.pool).await?;
    Ok(Json(colors))
}

// ---------------------------------------------------------------------------
// Place handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/itineraries/{id}/places
///
/// Referencing an unknown itinerary or attraction fails the foreign key
/// check and surfaces as an invalid-reference error.
pub async fn add_place(
    State(state): State<AppState>,
    Path(itinerary_id): Path<DbId>,
    Json(input): Json<CreatePlace>,
) -> AppResult<(StatusCode, Json<Place>)> {
    let sort_order = match input.sort_order {
        Some(order) => order,
        None => {
            let count = PlaceRepo::count_for_itinerary(&state.pool, itinerary_id).await?;
            (count + 1) as i32
        }
    };
    let place =
        PlaceRepo::add(&state.pool, itinerary_id, input.attraction_id, sort_order).await?;
    Ok((StatusCode::CREATED, Json(place)))
}

/// DELETE /api/v1/itineraries/{id}/places/{attraction_id}
///
/// Removes every place row for the pair, duplicates included.
pub async fn remove_place(
    State(state): State<AppState>,
    Path((itinerary_id, attraction_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let removed = PlaceRepo::remove(&state.pool, itinerary_id, attraction_id).await?;
    if removed > 0 {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Place",
            id: attraction_id,
        }))
    }
}

/// Request body for the position update.
#[derive(Debug, Deserialize)]
pub struct OrderUpdate {
    pub sort_order: i32,
}

/// PUT /api/v1/places/{id}/order
pub async fn set_place_order(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<OrderUpdate>,
) -> AppResult<Json<Place>> {
    if input.sort_order < 1 {
        return Err(AppError::Core(CoreError::Validation(
            "sort_order must be at least 1".to_string(),
        )));
    }
    let place = PlaceRepo::set_order(&state.pool, id, input.sort_order)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Place", id }))?;
    Ok(Json(place))
}
