//! Repository for the `itinerary_places` join table.

use std::collections::HashMap;

use sqlx::PgPool;
use wayplan_core::types::DbId;

use crate::models::attraction::{Attraction, AttractionWithCity};
use crate::models::itinerary::{Place, PlaceWithAttraction};
use crate::repositories::attraction_repo::AttractionRepo;
use crate::repositories::direction_repo::DirectionRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, itinerary_id, attraction_id, sort_order, created_at, updated_at";

/// Attraction column list used when loading place attractions.
const ATTRACTION_COLUMNS: &str = "id, name, name_local, address, description, latitude, \
    longitude, source_url, city_id, is_must_see, is_predefined, created_at, updated_at";

/// Manages the ordered places within itineraries.
pub struct PlaceRepo;

impl PlaceRepo {
    /// Append a place to an itinerary at the given position.
    ///
    /// The position comes from the caller (current place count + 1);
    /// nothing here renumbers or validates contiguity.
    pub async fn add(
        pool: &PgPool,
        itinerary_id: DbId,
        attraction_id: DbId,
        sort_order: i32,
    ) -> Result<Place, sqlx::Error> {
        let query = format!(
            "INSERT INTO itinerary_places (itinerary_id, attraction_id, sort_order)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(itinerary_id)
            .bind(attraction_id)
            .bind(sort_order)
            .fetch_one(pool)
            .await
    }

    /// Remove every place row matching the (itinerary, attraction) pair.
    ///
    /// Deleting all matches is deliberate: it cleans up duplicates that
    /// a misbehaving client may have created. Remaining places keep
    /// their positions, so removal leaves gaps in the order sequence.
    /// Cached direction rows touching the removed place ids are pruned
    /// in the same transaction.
    ///
    /// Returns the number of place rows removed.
    pub async fn remove(
        pool: &PgPool,
        itinerary_id: DbId,
        attraction_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let rows: Vec<(DbId,)> = sqlx::query_as(
            "SELECT id FROM itinerary_places WHERE itinerary_id = $1 AND attraction_id = $2",
        )
        .bind(itinerary_id)
        .bind(attraction_id)
        .fetch_all(&mut *tx)
        .await?;
        let place_ids: Vec<DbId> = rows.into_iter().map(|(id,)| id).collect();

        if !place_ids.is_empty() {
            DirectionRepo::prune_for_places(&mut tx, &place_ids).await?;
        }

        let result = sqlx::query(
            "DELETE FROM itinerary_places WHERE itinerary_id = $1 AND attraction_id = $2",
        )
        .bind(itinerary_id)
        .bind(attraction_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }

    /// Set a single place's position.
    ///
    /// The drag handler swaps two places by issuing two of these calls;
    /// there is no renumbering and no transaction across the pair.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_order(
        pool: &PgPool,
        place_id: DbId,
        sort_order: i32,
    ) -> Result<Option<Place>, sqlx::Error> {
        let query = format!(
            "UPDATE itinerary_places SET sort_order = $2, updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(place_id)
            .bind(sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Find a place by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Place>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM itinerary_places WHERE id = $1");
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Number of places currently in an itinerary.
    pub async fn count_for_itinerary(pool: &PgPool, itinerary_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM itinerary_places WHERE itinerary_id = $1")
                .bind(itinerary_id)
                .fetch_one(pool)
                .await?;
        Ok(count.0)
    }

    /// The places of an itinerary in display order, each with its
    /// attraction (and the attraction's city) attached.
    pub async fn list_for_itinerary(
        pool: &PgPool,
        itinerary_id: DbId,
    ) -> Result<Vec<PlaceWithAttraction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM itinerary_places
             WHERE itinerary_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        let places = sqlx::query_as::<_, Place>(&query)
            .bind(itinerary_id)
            .fetch_all(pool)
            .await?;

        let mut attraction_ids: Vec<DbId> = places.iter().map(|p| p.attraction_id).collect();
        attraction_ids.sort_unstable();
        attraction_ids.dedup();

        let attraction_query =
            format!("SELECT {ATTRACTION_COLUMNS} FROM attractions WHERE id = ANY($1)");
        let attractions = sqlx::query_as::<_, Attraction>(&attraction_query)
            .bind(&attraction_ids)
            .fetch_all(pool)
            .await?;
        let with_cities = AttractionRepo::attach_cities(pool, attractions).await?;
        let by_id: HashMap<DbId, AttractionWithCity> = with_cities
            .into_iter()
            .map(|a| (a.attraction.id, a))
            .collect();

        places
            .into_iter()
            .map(|place| {
                let attraction = by_id
                    .get(&place.attraction_id)
                    .cloned()
                    .ok_or(sqlx::Error::RowNotFound)?;
                Ok(PlaceWithAttraction { place, attraction })
            })
            .collect()
    }
}
