//! Proximity matchers over the reference catalog.

pub mod inter_island;
pub mod maxi;
pub mod routes;
pub mod taxi;

pub use inter_island::{inter_island_plan, InterIslandPlan, TransitPointPreference};
pub use maxi::find_best_maxi_match;
pub use routes::find_relevant_routes;
pub use taxi::{nearest_taxi_stands, NearbyStand};

/// Default stop-to-endpoint radius for the route matcher, in degrees
/// (about 5.5 km at Trinidad's latitude).
pub const DEFAULT_PROXIMITY_DEGREES: f64 = 0.05;
