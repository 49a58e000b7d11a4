//! Itinerary entity models: itineraries, their color palette, and the
//! ordered places linking them to attractions.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wayplan_core::types::{DbId, Timestamp};

use crate::models::attraction::AttractionWithCity;

/// A row from the `itineraries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Itinerary {
    pub id: DbId,
    pub name: String,
    pub trip_id: DbId,
    pub sort_order: i32,
    pub color_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `itinerary_colors` palette table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ItineraryColor {
    pub id: DbId,
    pub name: String,
    /// Six hex digits, no leading `#`.
    pub hex: String,
}

/// A row from the `itinerary_places` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Place {
    pub id: DbId,
    pub itinerary_id: DbId,
    pub attraction_id: DbId,
    /// 1-based display and routing position within the itinerary.
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A place with its attraction (and the attraction's city) attached.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceWithAttraction {
    #[serde(flatten)]
    pub place: Place,
    pub attraction: AttractionWithCity,
}

/// An itinerary with its color and ordered places, as returned by the
/// per-trip listing and consumed by the PDF export.
#[derive(Debug, Clone, Serialize)]
pub struct ItineraryWithDetails {
    #[serde(flatten)]
    pub itinerary: Itinerary,
    pub color: ItineraryColor,
    pub places: Vec<PlaceWithAttraction>,
}

/// DTO for creating an itinerary.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItinerary {
    pub name: String,
    pub trip_id: DbId,
    pub sort_order: i32,
    pub color_id: DbId,
}

/// DTO for renaming an itinerary.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItinerary {
    pub name: String,
}

/// DTO for adding a place to an itinerary.
///
/// Clients normally send `sort_order` themselves (current place count + 1);
/// when omitted, the handler computes the same append position. The stored
/// value is never renumbered.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlace {
    pub attraction_id: DbId,
    pub sort_order: Option<i32>,
}
