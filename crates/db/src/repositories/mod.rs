//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod attraction_repo;
pub mod city_repo;
pub mod country_repo;
pub mod direction_repo;
pub mod itinerary_repo;
pub mod place_repo;
pub mod trip_repo;

pub use attraction_repo::AttractionRepo;
pub use city_repo::CityRepo;
pub use country_repo::CountryRepo;
pub use direction_repo::DirectionRepo;
pub use itinerary_repo::ItineraryRepo;
pub use place_repo::PlaceRepo;
pub use trip_repo::TripRepo;
