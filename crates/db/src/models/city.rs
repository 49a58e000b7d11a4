//! City reference data seeded from a geonames dump.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wayplan_core::types::DbId;

/// A row from the `cities` table. Ids are geonames ids.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct City {
    pub id: DbId,
    pub name: String,
    pub country_code: String,
    pub admin1_code: Option<String>,
    pub admin2_code: Option<String>,
    pub admin3_code: Option<String>,
    pub admin4_code: Option<String>,
    pub population: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub alternate_names: Option<String>,
    pub modified_on: Option<NaiveDate>,
}

/// Minimal city shape embedded in attraction map pins.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CitySummary {
    pub id: DbId,
    pub name: String,
}

/// DTO for seeding a city row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCity {
    pub id: DbId,
    pub name: String,
    pub country_code: String,
    pub admin1_code: Option<String>,
    pub admin2_code: Option<String>,
    pub admin3_code: Option<String>,
    pub admin4_code: Option<String>,
    pub population: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub alternate_names: Option<String>,
    pub modified_on: Option<NaiveDate>,
}
