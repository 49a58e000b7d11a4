//! Cached walking-route rows.

use serde::Serialize;
use sqlx::FromRow;
use wayplan_core::types::{DbId, Timestamp};

/// A row from the `directions` cache table.
///
/// `payload` is the raw routing-API response text, stored verbatim on
/// the first lookup for a place pair and returned unchanged on every
/// later one. Rows are never expired; they are only pruned when one of
/// their places is removed from its itinerary.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Direction {
    pub id: DbId,
    pub start_place_id: DbId,
    pub end_place_id: DbId,
    pub payload: String,
    pub created_at: Timestamp,
}
