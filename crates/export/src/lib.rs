//! Itinerary PDF export.
//!
//! [`staticmap`] talks to the map image provider, [`pdf`] lays the itinerary
//! out on A4 pages and writes the file. Map images are fetched up front so a
//! failing provider aborts the export before anything touches disk.

pub mod pdf;
pub mod staticmap;

mod error;

pub use error::ExportError;
pub use pdf::{export_itinerary, ExportedPdf};
pub use staticmap::StaticMapClient;
