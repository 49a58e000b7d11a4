use geojson::{FeatureCollection, GeoJson};
use serde::{Deserialize, Serialize};
use wayplan_core::geo::Coordinates;
use wayplan_core::types::DbId;

use crate::DirectionsError;

/// A place as the routing layer sees it: enough to key the cache and to ask
/// the upstream for a route.
#[derive(Debug, Clone, Copy)]
pub struct RoutePlace {
    pub id: DbId,
    pub sort_order: i32,
    pub attraction_id: DbId,
    pub latitude: f64,
    pub longitude: f64,
}

impl RoutePlace {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A walking route between two consecutive places.
///
/// `route` is the upstream feature collection with every LineString position
/// rewritten to latitude-first, which is the convention everywhere else in
/// this system. The flip happens on parse, so cache hits and misses agree.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceDirections {
    pub start_place_id: DbId,
    pub end_place_id: DbId,
    pub start_order: i32,
    pub end_order: i32,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub route: FeatureCollection,
}

#[derive(Debug, Default, Deserialize)]
struct RouteSummary {
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
}

impl PlaceDirections {
    /// Builds directions from a raw upstream payload, cached or fresh.
    ///
    /// An unexpected but well-formed payload (no features, no summary)
    /// degrades to zero distance and duration rather than failing, since the
    /// geometry is still renderable.
    pub fn from_payload(
        payload: &str,
        start: &RoutePlace,
        end: &RoutePlace,
    ) -> Result<Self, DirectionsError> {
        let geojson = payload.parse::<GeoJson>()?;
        let mut route = FeatureCollection::try_from(geojson)?;

        let summary = route
            .features
            .first()
            .and_then(|feature| feature.properties.as_ref())
            .and_then(|props| props.get("summary"))
            .and_then(|summary| serde_json::from_value::<RouteSummary>(summary.clone()).ok())
            .unwrap_or_default();

        flip_to_latitude_first(&mut route);

        Ok(Self {
            start_place_id: start.id,
            end_place_id: end.id,
            start_order: start.sort_order,
            end_order: end.sort_order,
            distance_meters: summary.distance,
            duration_seconds: summary.duration,
            route,
        })
    }
}

/// Rewrites every LineString position from the upstream's longitude-first
/// ordering to latitude-first. Other geometry types pass through untouched.
fn flip_to_latitude_first(collection: &mut FeatureCollection) {
    for feature in &mut collection.features {
        let Some(geometry) = feature.geometry.as_mut() else {
            continue;
        };
        if let geojson::Value::LineString(positions) = &mut geometry.value {
            for position in positions {
                if position.len() >= 2 {
                    position.swap(0, 1);
                }
            }
        }
    }
}
