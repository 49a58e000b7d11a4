//! Handlers for the `/trips` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use wayplan_core::error::CoreError;
use wayplan_core::types::DbId;
use wayplan_db::models::trip::{CreateTrip, TripWithDestinations};
use wayplan_db::repositories::TripRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/trips
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTrip>,
) -> AppResult<(StatusCode, Json<TripWithDestinations>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Trip name must not be empty".to_string(),
        )));
    }
    if input.destinations.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Trip needs at least one destination country".to_string(),
        )));
    }

    let trip = TripRepo::create(&state.pool, &input).await?;
    let destinations = TripRepo::destinations_for_trip(&state.pool, trip.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(TripWithDestinations { trip, destinations }),
    ))
}

/// GET /api/v1/trips
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TripWithDestinations>>> {
    let trips = TripRepo::list(&state.pool).await?;
    Ok(Json(trips))
}

/// GET /api/v1/trips/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TripWithDestinations>> {
    let trip = TripRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Trip", id }))?;
    Ok(Json(trip))
}
