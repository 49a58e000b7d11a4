//! Attraction entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wayplan_core::types::{DbId, Timestamp};

use crate::models::city::{City, CitySummary};

/// A row from the `attractions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attraction {
    pub id: DbId,
    pub name: String,
    pub name_local: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub source_url: Option<String>,
    pub city_id: DbId,
    pub is_must_see: bool,
    pub is_predefined: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An attraction with its owning city attached, as returned by the
/// paginated listing.
#[derive(Debug, Clone, Serialize)]
pub struct AttractionWithCity {
    #[serde(flatten)]
    pub attraction: Attraction,
    pub city: City,
}

/// Basic info used to plot attractions on the map view.
#[derive(Debug, Clone, Serialize)]
pub struct AttractionPin {
    pub id: DbId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: CitySummary,
}

/// Flat row shape behind [`AttractionPin`]; the repository maps it into
/// the nested form.
#[derive(Debug, Clone, FromRow)]
pub struct AttractionPinRow {
    pub id: DbId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city_id: DbId,
    pub city_name: String,
}

impl From<AttractionPinRow> for AttractionPin {
    fn from(row: AttractionPinRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            latitude: row.latitude,
            longitude: row.longitude,
            city: CitySummary {
                id: row.city_id,
                name: row.city_name,
            },
        }
    }
}

/// DTO for creating a new attraction.
///
/// `name`, `city_id` and both coordinates are required; everything else
/// is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAttraction {
    pub name: String,
    pub name_local: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub source_url: Option<String>,
    pub city_id: DbId,
    pub is_must_see: Option<bool>,
    pub is_predefined: Option<bool>,
}

/// DTO for updating an existing attraction. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAttraction {
    pub name: Option<String>,
    pub name_local: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub source_url: Option<String>,
    pub city_id: Option<DbId>,
    pub is_must_see: Option<bool>,
    pub is_predefined: Option<bool>,
}

/// Filter for the paginated attraction listing.
#[derive(Debug, Clone, Default)]
pub struct AttractionFilter {
    pub city_id: Option<DbId>,
    pub country_code: Option<String>,
}
