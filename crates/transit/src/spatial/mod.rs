//! Spatial indexing and query utilities.

pub mod index;
pub mod queries;

pub use queries::{distance_km, nearest, point, Nearest, EARTH_RADIUS_KM};
