//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where the entity
//!   supports patching
//! - `#[serde(flatten)]` wrapper structs for responses that carry child
//!   entities alongside the parent row

pub mod attraction;
pub mod city;
pub mod country;
pub mod direction;
pub mod itinerary;
pub mod trip;
