pub mod config;
pub mod itinerary;
pub mod road;

// Re-export transit from the transit crate
pub use liming_transit as transit;

pub use config::PlannerConfig;
pub use itinerary::{Advisory, Itinerary, Planner};
pub use road::{OsrmRouter, RoadPath, RoadRouteError, RoadRouter, route_or_straight_line};
