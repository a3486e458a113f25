pub mod error;
pub mod logging;
pub mod matching;
pub mod records;
pub mod road;

pub use error::MobileError;
pub use road::RoadRouteService;

uniffi::setup_scaffolding!();
