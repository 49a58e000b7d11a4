//! Repository for the `trips` and `trip_destinations` tables.

use sqlx::PgPool;
use wayplan_core::types::DbId;

use crate::models::country::Country;
use crate::models::trip::{CreateTrip, Trip, TripWithDestinations};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Country column list used when loading destinations (aliased for the
/// join query).
const COUNTRY_COLUMNS: &str = "c.cca2, c.cca3, c.ccn3, c.name_common, c.name_official, \
    c.region, c.subregion, c.flag_png";

/// Provides create and read operations for trips.
pub struct TripRepo;

impl TripRepo {
    /// Insert a trip with its destination countries in one transaction.
    ///
    /// Validation (non-empty trimmed name, at least one destination)
    /// happens in the handler; this method assumes clean input.
    pub async fn create(pool: &PgPool, input: &CreateTrip) -> Result<Trip, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query =
            format!("INSERT INTO trips (name) VALUES ($1) RETURNING {COLUMNS}");
        let trip = sqlx::query_as::<_, Trip>(&insert_query)
            .bind(&input.name)
            .fetch_one(&mut *tx)
            .await?;

        for code in &input.destinations {
            sqlx::query(
                "INSERT INTO trip_destinations (trip_id, country_code) VALUES ($1, $2)",
            )
            .bind(trip.id)
            .bind(code)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(trip)
    }

    /// List all trips, newest first, each with its destination countries.
    pub async fn list(pool: &PgPool) -> Result<Vec<TripWithDestinations>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trips ORDER BY id DESC");
        let trips = sqlx::query_as::<_, Trip>(&query).fetch_all(pool).await?;

        let mut result = Vec::with_capacity(trips.len());
        for trip in trips {
            let destinations = Self::destinations_for_trip(pool, trip.id).await?;
            result.push(TripWithDestinations { trip, destinations });
        }
        Ok(result)
    }

    /// Find a trip by id with its destination countries.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TripWithDestinations>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trips WHERE id = $1");
        let trip = sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match trip {
            Some(trip) => {
                let destinations = Self::destinations_for_trip(pool, trip.id).await?;
                Ok(Some(TripWithDestinations { trip, destinations }))
            }
            None => Ok(None),
        }
    }

    /// Destination countries of a trip, ordered by common name.
    pub async fn destinations_for_trip(
        pool: &PgPool,
        trip_id: DbId,
    ) -> Result<Vec<Country>, sqlx::Error> {
        let query = format!(
            "SELECT {COUNTRY_COLUMNS}
             FROM countries c
             JOIN trip_destinations td ON td.country_code = c.cca2
             WHERE td.trip_id = $1
             ORDER BY c.name_common ASC"
        );
        sqlx::query_as::<_, Country>(&query)
            .bind(trip_id)
            .fetch_all(pool)
            .await
    }
}
