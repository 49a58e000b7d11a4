pub mod attraction;
pub mod geography;
pub mod health;
pub mod itinerary;
pub mod trip;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /countries                                 list countries
/// /countries/{code}/cities                   cities of a country
/// /cities/nearest                            cities near a point (?latitude&longitude)
///
/// /attractions                               list (paginated), create
/// /attractions/all                           map pins (?city_id&country_codes)
/// /attractions/parse                         scrape a travel-guide page (POST)
/// /attractions/images                        image search (?name&city)
/// /attractions/{id}                          get, update, delete
///
/// /trips                                     list, create
/// /trips/{id}                                get
/// /trips/{trip_id}/itineraries               itineraries of a trip
///
/// /itineraries                               create
/// /itineraries/{id}                          get details, rename, delete
/// /itineraries/{id}/places                   add place (POST)
/// /itineraries/{id}/places/{attraction_id}   remove place (DELETE)
/// /itineraries/{id}/export                   render PDF (POST)
/// /places/{id}/order                         set place position (PUT)
/// /colors                                    itinerary color palette
///
/// /directions                                walking route between places (?start&end)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Seeded geography reference data.
        .merge(geography::router())
        // Attraction catalog plus the scraping helpers.
        .nest("/attractions", attraction::router())
        // Trips with their destination countries.
        .nest("/trips", trip::router())
        // Itineraries, their places, the color palette, and the export.
        .merge(itinerary::router())
        // Cached walking directions between two places.
        .route("/directions", get(handlers::directions::walking_directions))
}
