//! Repository for the `countries` reference table.

use sqlx::PgPool;

use crate::models::country::{Country, CreateCountry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "cca2, cca3, ccn3, name_common, name_official, region, subregion, flag_png";

/// Read and seed operations for countries.
pub struct CountryRepo;

impl CountryRepo {
    /// List all countries ordered by common name ascending.
    ///
    /// The table is bounded reference data, so there is no pagination.
    pub async fn list(pool: &PgPool) -> Result<Vec<Country>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM countries ORDER BY name_common ASC");
        sqlx::query_as::<_, Country>(&query).fetch_all(pool).await
    }

    /// Insert or refresh a country row. Used by the geodata seeder.
    pub async fn upsert(pool: &PgPool, input: &CreateCountry) -> Result<Country, sqlx::Error> {
        let query = format!(
            "INSERT INTO countries
                (cca2, cca3, ccn3, name_common, name_official, region, subregion, flag_png)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (cca2) DO UPDATE SET
                cca3 = EXCLUDED.cca3,
                ccn3 = EXCLUDED.ccn3,
                name_common = EXCLUDED.name_common,
                name_official = EXCLUDED.name_official,
                region = EXCLUDED.region,
                subregion = EXCLUDED.subregion,
                flag_png = EXCLUDED.flag_png,
                updated_at = now()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Country>(&query)
            .bind(&input.cca2)
            .bind(&input.cca3)
            .bind(&input.ccn3)
            .bind(&input.name_common)
            .bind(&input.name_official)
            .bind(&input.region)
            .bind(&input.subregion)
            .bind(&input.flag_png)
            .fetch_one(pool)
            .await
    }
}
