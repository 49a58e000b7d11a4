//! Repository for the `attractions` table.

use std::collections::HashMap;

use sqlx::PgPool;
use wayplan_core::types::DbId;

use crate::models::attraction::{
    Attraction, AttractionFilter, AttractionPin, AttractionPinRow, AttractionWithCity,
    CreateAttraction, UpdateAttraction,
};
use crate::models::city::City;
use crate::pagination::{clamp_skip, clamp_take};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, name_local, address, description, latitude, longitude, \
    source_url, city_id, is_must_see, is_predefined, created_at, updated_at";

/// City column list used when loading owning cities for a page.
const CITY_COLUMNS: &str = "id, name, country_code, admin1_code, admin2_code, admin3_code, \
    admin4_code, population, latitude, longitude, alternate_names, modified_on";

/// Provides CRUD and listing operations for attractions.
pub struct AttractionRepo;

impl AttractionRepo {
    /// Insert a new attraction, returning the created row.
    ///
    /// The two catalog flags default to `false` if omitted.
    pub async fn create(pool: &PgPool, input: &CreateAttraction) -> Result<Attraction, sqlx::Error> {
        let query = format!(
            "INSERT INTO attractions
                (name, name_local, address, description, latitude, longitude,
                 source_url, city_id, is_must_see, is_predefined)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8,
                     COALESCE($9, false), COALESCE($10, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attraction>(&query)
            .bind(&input.name)
            .bind(&input.name_local)
            .bind(&input.address)
            .bind(&input.description)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.source_url)
            .bind(input.city_id)
            .bind(input.is_must_see)
            .bind(input.is_predefined)
            .fetch_one(pool)
            .await
    }

    /// Find an attraction by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Attraction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM attractions WHERE id = $1");
        sqlx::query_as::<_, Attraction>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an attraction. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAttraction,
    ) -> Result<Option<Attraction>, sqlx::Error> {
        let query = format!(
            "UPDATE attractions SET
                name = COALESCE($2, name),
                name_local = COALESCE($3, name_local),
                address = COALESCE($4, address),
                description = COALESCE($5, description),
                latitude = COALESCE($6, latitude),
                longitude = COALESCE($7, longitude),
                source_url = COALESCE($8, source_url),
                city_id = COALESCE($9, city_id),
                is_must_see = COALESCE($10, is_must_see),
                is_predefined = COALESCE($11, is_predefined),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attraction>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.name_local)
            .bind(&input.address)
            .bind(&input.description)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.source_url)
            .bind(input.city_id)
            .bind(input.is_must_see)
            .bind(input.is_predefined)
            .fetch_optional(pool)
            .await
    }

    /// Delete an attraction by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM attractions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Paginated listing with optional city or country filter.
    ///
    /// Returns the total row count matching the filter alongside the
    /// requested page, so clients can render pagination. Rows are
    /// ordered by id ascending with each owning city attached.
    pub async fn list(
        pool: &PgPool,
        filter: &AttractionFilter,
        skip: Option<i64>,
        take: Option<i64>,
    ) -> Result<(i64, Vec<AttractionWithCity>), sqlx::Error> {
        let total: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM attractions
             WHERE ($1::bigint IS NULL OR city_id = $1)
               AND ($2::text IS NULL
                    OR city_id IN (SELECT id FROM cities WHERE country_code = $2))",
        )
        .bind(filter.city_id)
        .bind(&filter.country_code)
        .fetch_one(pool)
        .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM attractions
             WHERE ($1::bigint IS NULL OR city_id = $1)
               AND ($2::text IS NULL
                    OR city_id IN (SELECT id FROM cities WHERE country_code = $2))
             ORDER BY id ASC
             OFFSET $3 LIMIT $4"
        );
        let rows = sqlx::query_as::<_, Attraction>(&query)
            .bind(filter.city_id)
            .bind(&filter.country_code)
            .bind(clamp_skip(skip))
            .bind(clamp_take(take))
            .fetch_all(pool)
            .await?;

        let with_cities = Self::attach_cities(pool, rows).await?;
        Ok((total.0, with_cities))
    }

    /// Unpaginated basic-info listing used to plot the map view.
    ///
    /// Optionally filtered by a single city or a set of country codes.
    pub async fn list_all(
        pool: &PgPool,
        city_id: Option<DbId>,
        country_codes: Option<&[String]>,
    ) -> Result<Vec<AttractionPin>, sqlx::Error> {
        let rows = sqlx::query_as::<_, AttractionPinRow>(
            "SELECT a.id, a.name, a.latitude, a.longitude,
                    c.id AS city_id, c.name AS city_name
             FROM attractions a
             JOIN cities c ON c.id = a.city_id
             WHERE ($1::bigint IS NULL OR a.city_id = $1)
               AND ($2::text[] IS NULL OR c.country_code = ANY($2))
             ORDER BY a.id ASC",
        )
        .bind(city_id)
        .bind(country_codes)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(AttractionPin::from).collect())
    }

    /// Load the owning city for each attraction in one query and zip
    /// them together, preserving the input order.
    pub(crate) async fn attach_cities(
        pool: &PgPool,
        rows: Vec<Attraction>,
    ) -> Result<Vec<AttractionWithCity>, sqlx::Error> {
        let mut city_ids: Vec<DbId> = rows.iter().map(|a| a.city_id).collect();
        city_ids.sort_unstable();
        city_ids.dedup();

        let query = format!("SELECT {CITY_COLUMNS} FROM cities WHERE id = ANY($1)");
        let cities = sqlx::query_as::<_, City>(&query)
            .bind(&city_ids)
            .fetch_all(pool)
            .await?;
        let by_id: HashMap<DbId, City> = cities.into_iter().map(|c| (c.id, c)).collect();

        rows.into_iter()
            .map(|attraction| {
                let city = by_id
                    .get(&attraction.city_id)
                    .cloned()
                    .ok_or(sqlx::Error::RowNotFound)?;
                Ok(AttractionWithCity { attraction, city })
            })
            .collect()
    }
}
