//! Country reference data (ISO 3166) seeded from a restcountries dump.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `countries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, the primary key.
    pub cca2: String,
    pub cca3: String,
    pub ccn3: Option<String>,
    pub name_common: String,
    pub name_official: String,
    pub region: String,
    pub subregion: Option<String>,
    pub flag_png: Option<String>,
}

/// DTO for seeding a country row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCountry {
    pub cca2: String,
    pub cca3: String,
    pub ccn3: Option<String>,
    pub name_common: String,
    pub name_official: String,
    pub region: String,
    pub subregion: Option<String>,
    pub flag_png: Option<String>,
}
