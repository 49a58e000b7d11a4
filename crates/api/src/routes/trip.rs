//! Route definitions for trips.

use axum::routing::get;
use axum::Router;

use crate::handlers::{itinerary, trip};
use crate::state::AppState;

/// Routes mounted at `/trips`.
///
/// ```text
/// GET  /                       -> list
/// POST /                       -> create
/// GET  /{id}                   -> get_by_id
/// GET  /{trip_id}/itineraries  -> itinerary::list_by_trip
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trip::list).post(trip::create))
        .route("/{id}", get(trip::get_by_id))
        .route("/{trip_id}/itineraries", get(itinerary::list_by_trip))
}
