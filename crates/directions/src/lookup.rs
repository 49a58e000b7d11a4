use wayplan_db::repositories::DirectionRepo;
use wayplan_db::DbPool;

use crate::route::{PlaceDirections, RoutePlace};
use crate::{DirectionsClient, DirectionsError};

/// Walking directions between two places, cache-aside.
///
/// The cache is keyed by the ordered place pair and never expires. On a miss
/// the upstream payload is parsed first and only then persisted, so a failed
/// or unusable response leaves no row behind. A concurrent miss for the same
/// pair can lose the insert race; the unique constraint surfaces that as a
/// database error for the caller to map.
pub async fn cached_walking_route(
    pool: &DbPool,
    client: &DirectionsClient,
    start: &RoutePlace,
    end: &RoutePlace,
) -> Result<PlaceDirections, DirectionsError> {
    if let Some(cached) = DirectionRepo::find_by_pair(pool, start.id, end.id).await? {
        tracing::debug!(
            start_place_id = start.id,
            end_place_id = end.id,
            "directions cache hit"
        );
        return PlaceDirections::from_payload(&cached.payload, start, end);
    }

    let payload = client
        .walking_route(start.coordinates(), end.coordinates())
        .await?;
    let directions = PlaceDirections::from_payload(&payload, start, end)?;
    DirectionRepo::insert(pool, start.id, end.id, &payload).await?;
    tracing::debug!(
        start_place_id = start.id,
        end_place_id = end.id,
        distance_meters = directions.distance_meters,
        "walking route fetched and cached"
    );
    Ok(directions)
}
