//! Repository for the `itineraries` and `itinerary_colors` tables.

use sqlx::PgPool;
use wayplan_core::types::DbId;

use crate::models::itinerary::{
    CreateItinerary, Itinerary, ItineraryColor, ItineraryWithDetails, UpdateItinerary,
};
use crate::repositories::place_repo::PlaceRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, trip_id, sort_order, color_id, created_at, updated_at";

/// Column list for the color palette table.
const COLOR_COLUMNS: &str = "id, name, hex";

/// Provides CRUD operations for itineraries and reads for their palette.
pub struct ItineraryRepo;

impl ItineraryRepo {
    /// Insert a new itinerary, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateItinerary) -> Result<Itinerary, sqlx::Error> {
        let query = format!(
            "INSERT INTO itineraries (name, trip_id, sort_order, color_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Itinerary>(&query)
            .bind(&input.name)
            .bind(input.trip_id)
            .bind(input.sort_order)
            .bind(input.color_id)
            .fetch_one(pool)
            .await
    }

    /// Find an itinerary by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Itinerary>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM itineraries WHERE id = $1");
        sqlx::query_as::<_, Itinerary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an itinerary by id with its color and ordered places.
    pub async fn find_with_details(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ItineraryWithDetails>, sqlx::Error> {
        let itinerary = Self::find_by_id(pool, id).await?;
        match itinerary {
            Some(itinerary) => Ok(Some(Self::attach_details(pool, itinerary).await?)),
            None => Ok(None),
        }
    }

    /// List the itineraries of a trip ordered by their display position,
    /// each with its color and ordered places attached.
    pub async fn list_by_trip(
        pool: &PgPool,
        trip_id: DbId,
    ) -> Result<Vec<ItineraryWithDetails>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM itineraries
             WHERE trip_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        let itineraries = sqlx::query_as::<_, Itinerary>(&query)
            .bind(trip_id)
            .fetch_all(pool)
            .await?;

        let mut result = Vec::with_capacity(itineraries.len());
        for itinerary in itineraries {
            result.push(Self::attach_details(pool, itinerary).await?);
        }
        Ok(result)
    }

    /// Rename an itinerary. Returns `None` if no row with the given
    /// `id` exists.
    pub async fn rename(
        pool: &PgPool,
        id: DbId,
        input: &UpdateItinerary,
    ) -> Result<Option<Itinerary>, sqlx::Error> {
        let query = format!(
            "UPDATE itineraries SET name = $2, updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Itinerary>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete an itinerary by id. Its places go with it via the cascade.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM itineraries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The full color palette, in seed order.
    pub async fn list_colors(pool: &PgPool) -> Result<Vec<ItineraryColor>, sqlx::Error> {
        let query = format!("SELECT {COLOR_COLUMNS} FROM itinerary_colors ORDER BY id ASC");
        sqlx::query_as::<_, ItineraryColor>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a palette color by id.
    pub async fn find_color(
        pool: &PgPool,
        color_id: DbId,
    ) -> Result<Option<ItineraryColor>, sqlx::Error> {
        let query = format!("SELECT {COLOR_COLUMNS} FROM itinerary_colors WHERE id = $1");
        sqlx::query_as::<_, ItineraryColor>(&query)
            .bind(color_id)
            .fetch_optional(pool)
            .await
    }

    /// Attach the color and ordered places to a bare itinerary row.
    async fn attach_details(
        pool: &PgPool,
        itinerary: Itinerary,
    ) -> Result<ItineraryWithDetails, sqlx::Error> {
        let color = Self::find_color(pool, itinerary.color_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        let places = PlaceRepo::list_for_itinerary(pool, itinerary.id).await?;
        Ok(ItineraryWithDetails {
            itinerary,
            color,
            places,
        })
    }
}
