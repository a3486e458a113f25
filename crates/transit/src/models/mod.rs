//! Transit data models, types, and traits.

pub mod traits;
pub mod types;

// Re-exports for convenience
pub use traits::{Located, TransitRoute};
pub use types::{
    InterIslandTransit, MaxiRouteInfo, Place, Result, Stop, TaxiStand, TransitError, TransitMode,
    TransitPointKind,
};
