//! Route definitions for itineraries, their places, the color palette,
//! and the PDF export.
//!
//! Merged directly into `/api/v1` because the resources span three
//! top-level prefixes (`/itineraries`, `/places`, `/colors`).

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{export, itinerary};
use crate::state::AppState;

/// ```text
/// POST   /itineraries                              -> create
/// GET    /itineraries/{id}                         -> get_details
/// PUT    /itineraries/{id}                         -> rename
/// DELETE /itineraries/{id}                         -> delete
/// POST   /itineraries/{id}/places                  -> add_place
/// DELETE /itineraries/{id}/places/{attraction_id}  -> remove_place
/// POST   /itineraries/{id}/export                  -> export::export_pdf
/// PUT    /places/{id}/order                        -> set_place_order
/// GET    /colors                                   -> list_colors
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/itineraries", post(itinerary::create))
        .route(
            "/itineraries/{id}",
            get(itinerary::get_details)
                .put(itinerary::rename)
                .delete(itinerary::delete),
        )
        .route("/itineraries/{id}/places", post(itinerary::add_place))
        .route(
            "/itineraries/{id}/places/{attraction_id}",
            delete(itinerary::remove_place),
        )
        .route("/itineraries/{id}/export", post(export::export_pdf))
        .route("/places/{id}/order", put(itinerary::set_place_order))
        .route("/colors", get(itinerary::list_colors))
}
