//! Walking directions between itinerary places.
//!
//! Routes come from the openrouteservice directions API and are cached
//! verbatim in the `directions` table keyed by the place pair, so repeat
//! lookups never hit the upstream again. Parsing and the coordinate
//! convention live in [`route`], the HTTP client in [`client`], and the
//! cache-aside composition in [`lookup`].

pub mod client;
pub mod lookup;
pub mod route;

mod error;

pub use client::DirectionsClient;
pub use error::DirectionsError;
pub use lookup::cached_walking_route;
pub use route::{PlaceDirections, RoutePlace};
