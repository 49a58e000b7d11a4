//! Repository for the `cities` reference table.

use sqlx::PgPool;
use wayplan_core::geo::{BoundingBox, Coordinates};

use crate::models::city::{City, CreateCity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, country_code, admin1_code, admin2_code, admin3_code, \
    admin4_code, population, latitude, longitude, alternate_names, modified_on";

/// Degree offset of the nearest-cities bounding box in every direction.
const NEARBY_DELTA_DEGREES: f64 = 0.1;

/// Read and seed operations for cities.
pub struct CityRepo;

impl CityRepo {
    /// List the cities of a country ordered by name ascending.
    pub async fn list_by_country(pool: &PgPool, cca2: &str) -> Result<Vec<City>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM cities WHERE country_code = $1 ORDER BY name ASC");
        sqlx::query_as::<_, City>(&query)
            .bind(cca2)
            .fetch_all(pool)
            .await
    }

    /// Cities whose coordinates fall strictly inside a ±0.1 degree box
    /// around the query point.
    ///
    /// The bounds are exclusive (`>` / `<`): a city sitting exactly 0.1
    /// degrees away is not returned. No ranking and no widening; an
    /// empty box yields an empty list.
    pub async fn find_nearest(pool: &PgPool, center: Coordinates) -> Result<Vec<City>, sqlx::Error> {
        let bb = BoundingBox::around(center, NEARBY_DELTA_DEGREES);
        let query = format!(
            "SELECT {COLUMNS} FROM cities
             WHERE latitude > $1 AND latitude < $2
               AND longitude > $3 AND longitude < $4
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(bb.min_latitude)
            .bind(bb.max_latitude)
            .bind(bb.min_longitude)
            .bind(bb.max_longitude)
            .fetch_all(pool)
            .await
    }

    /// Insert or refresh a city row. Used by the geodata seeder.
    pub async fn upsert(pool: &PgPool, input: &CreateCity) -> Result<City, sqlx::Error> {
        let query = format!(
            "INSERT INTO cities
                (id, name, country_code, admin1_code, admin2_code, admin3_code,
                 admin4_code, population, latitude, longitude, alternate_names, modified_on)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                country_code = EXCLUDED.country_code,
                admin1_code = EXCLUDED.admin1_code,
                admin2_code = EXCLUDED.admin2_code,
                admin3_code = EXCLUDED.admin3_code,
                admin4_code = EXCLUDED.admin4_code,
                population = EXCLUDED.population,
                latitude = EXCLUDED.latitude,
                longitude = EXCLUDED.longitude,
                alternate_names = EXCLUDED.alternate_names,
                modified_on = EXCLUDED.modified_on,
                updated_at = now()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(input.id)
            .bind(&input.name)
            .bind(&input.country_code)
            .bind(&input.admin1_code)
            .bind(&input.admin2_code)
            .bind(&input.admin3_code)
            .bind(&input.admin4_code)
            .bind(input.population)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.alternate_names)
            .bind(input.modified_on)
            .fetch_one(pool)
            .await
    }
}
