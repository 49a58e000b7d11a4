//! Coordinate types shared by the geography queries, the directions
//! lookup, and the static-map URL builders.

use serde::{Deserialize, Serialize};

/// A WGS84 point. Latitude first everywhere in this codebase; external
/// APIs that want longitude first get it at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// An axis-aligned degree box used by the nearest-cities query.
///
/// Bounds are exclusive: a point sitting exactly on an edge is outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    /// Box of `delta` degrees in every direction around `center`.
    pub fn around(center: Coordinates, delta: f64) -> Self {
        Self {
            min_latitude: center.latitude - delta,
            max_latitude: center.latitude + delta,
            min_longitude: center.longitude - delta,
            max_longitude: center.longitude + delta,
        }
    }

    /// Strictly-inside test, matching the `>` / `<` comparisons the
    /// city query uses.
    pub fn contains(&self, point: Coordinates) -> bool {
        point.latitude > self.min_latitude
            && point.latitude < self.max_latitude
            && point.longitude > self.min_longitude
            && point.longitude < self.max_longitude
    }
}
