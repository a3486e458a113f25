//! # liming-transit
//!
//! Static transit reference data and proximity matching for Trinidad & Tobago.
//!
//! ## Features
//!
//! - **Reference catalog**: maxi-taxi bands, bus routes, taxi stands and
//!   inter-island links, loaded once into an immutable registry
//! - **Geospatial primitives**: Haversine distance and nearest-candidate search
//! - **Island classification**: coarse bounding boxes for Trinidad and Tobago
//! - **Matchers**: relevant routes per mode, best single-band maxi match,
//!   nearest taxi stands, airport/ferry pairing
//!
//! All matching is pure and synchronous; the catalog can be shared freely
//! between threads.
//!
//! ## Example
//!
//! ```
//! use liming_transit::prelude::*;
//!
//! let catalog = TransitCatalog::trinidad_and_tobago();
//!
//! let origin = point(10.6549, -61.5019); // Port of Spain
//! let destination = point(10.2799, -61.4651); // San Fernando
//!
//! let info = find_best_maxi_match(&catalog, origin, destination).unwrap();
//! assert_eq!(info.route.color.as_ref(), "green");
//!
//! let buses = find_relevant_routes(
//!     catalog.classifier(),
//!     origin,
//!     destination,
//!     &catalog.routes(TransitMode::Bus),
//!     DEFAULT_PROXIMITY_DEGREES,
//! );
//! assert_eq!(buses.len(), 1);
//! ```

pub mod catalog;
pub mod identifiers;
pub mod island;
pub mod matcher;
pub mod models;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::catalog::{BusRoute, MaxiRoute, TransitCatalog};
    pub use crate::identifiers::*;
    pub use crate::island::{Island, IslandClassifier};
    pub use crate::matcher::{
        find_best_maxi_match, find_relevant_routes, inter_island_plan, nearest_taxi_stands,
        InterIslandPlan, NearbyStand, TransitPointPreference, DEFAULT_PROXIMITY_DEGREES,
    };
    pub use crate::models::{traits::*, types::*};
    pub use crate::spatial::queries::{distance_km, nearest, point, Nearest};
}

pub use prelude::*;
