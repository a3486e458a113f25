//! Static transit reference catalog.

pub mod records;
pub mod registry;

pub use registry::{BusRoute, MaxiRoute, TransitCatalog};
