//! Route definitions for the attraction catalog.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::attraction;
use crate::state::AppState;

/// Routes mounted at `/attractions`.
///
/// The static segments (`/all`, `/parse`, `/images`) sit next to the
/// `/{id}` capture; the router prefers the static match.
///
/// ```text
/// GET    /         -> list (paginated)
/// POST   /         -> create
/// GET    /all      -> list_all (map pins)
/// POST   /parse    -> parse (scrape a page)
/// GET    /images   -> images (image search)
/// GET    /{id}     -> get_by_id
/// PUT    /{id}     -> update
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(attraction::list).post(attraction::create))
        .route("/all", get(attraction::list_all))
        .route("/parse", post(attraction::parse))
        .route("/images", get(attraction::images))
        .route(
            "/{id}",
            get(attraction::get_by_id)
                .put(attraction::update)
                .delete(attraction::delete),
        )
}
