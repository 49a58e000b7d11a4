pub mod attraction;
pub mod directions;
pub mod export;
pub mod geography;
pub mod itinerary;
pub mod trip;
