//! Repository for the `directions` cache table.

use sqlx::PgPool;
use wayplan_core::types::DbId;

use crate::models::direction::Direction;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, start_place_id, end_place_id, payload, created_at";

/// Cache-row access for walking directions.
///
/// Rows are written once per (start, end) place pair and read forever;
/// there is no freshness column and no expiry. Pruning happens only
/// when a place is removed from its itinerary.
pub struct DirectionRepo;

impl DirectionRepo {
    /// Look up the cached payload for a place pair.
    pub async fn find_by_pair(
        pool: &PgPool,
        start_place_id: DbId,
        end_place_id: DbId,
    ) -> Result<Option<Direction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM directions
             WHERE start_place_id = $1 AND end_place_id = $2"
        );
        sqlx::query_as::<_, Direction>(&query)
            .bind(start_place_id)
            .bind(end_place_id)
            .fetch_optional(pool)
            .await
    }

    /// Store the raw upstream payload for a place pair.
    ///
    /// A concurrent insert for the same pair violates
    /// `uq_directions_start_end` and surfaces as a conflict to the
    /// caller; losing that race is harmless since both writers hold the
    /// same upstream response.
    pub async fn insert(
        pool: &PgPool,
        start_place_id: DbId,
        end_place_id: DbId,
        payload: &str,
    ) -> Result<Direction, sqlx::Error> {
        let query = format!(
            "INSERT INTO directions (start_place_id, end_place_id, payload)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Direction>(&query)
            .bind(start_place_id)
            .bind(end_place_id)
            .bind(payload)
            .fetch_one(pool)
            .await
    }

    /// Delete every cache row that references one of the given place
    /// ids on either end. Runs inside the caller's transaction.
    ///
    /// Returns the number of rows pruned.
    pub async fn prune_for_places(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        place_ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM directions
             WHERE start_place_id = ANY($1) OR end_place_id = ANY($1)",
        )
        .bind(place_ids)
        .execute(&mut **tx)
        .await?;
        Ok(result.rows_affected())
    }
}
