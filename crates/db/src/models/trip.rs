//! Trip entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wayplan_core::types::{DbId, Timestamp};

use crate::models::country::Country;

/// A row from the `trips` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trip {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A trip with its destination countries attached.
///
/// The `trip_destinations` join rows carry no information of their own,
/// so responses flatten them into the country list.
#[derive(Debug, Clone, Serialize)]
pub struct TripWithDestinations {
    #[serde(flatten)]
    pub trip: Trip,
    pub destinations: Vec<Country>,
}

/// DTO for creating a trip together with its destination countries.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrip {
    pub name: String,
    /// ISO alpha-2 codes; at least one is required.
    pub destinations: Vec<String>,
}
