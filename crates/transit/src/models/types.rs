//! Core data types and enums for transit reference data.

use std::sync::Arc;

use geo::Point;
use serde::Deserialize;

use crate::catalog::MaxiRoute;
use crate::identifiers::*;
use crate::island::Island;

// ============================================================================
// Enums
// ============================================================================

/// Fixed-route transit modes the route matcher understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitMode {
    /// Maxi-taxi bands.
    Maxi,
    /// PTSC bus routes.
    Bus,
}

/// What kind of inter-island link a transit point is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitPointKind {
    Airport,
    Ferry,
}

impl TransitPointKind {
    pub fn other(self) -> Self {
        match self {
            Self::Airport => Self::Ferry,
            Self::Ferry => Self::Airport,
        }
    }
}

// ============================================================================
// Data Structures
// ============================================================================

/// A named, geolocated boarding point.
///
/// Names are unique within a route's stop list, not across the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub id: StopIdentifier,
    pub name: Arc<str>,
    pub location: Point,
}

/// A taxi stand with the destinations its drivers usually serve.
#[derive(Clone, Debug, PartialEq)]
pub struct TaxiStand {
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub location: Point,
    pub destinations: Vec<Arc<str>>,
    /// Free text, e.g. "5-10 min".
    pub estimated_wait: Arc<str>,
}

/// An airport or ferry terminal linking the two islands.
#[derive(Clone, Debug, PartialEq)]
pub struct InterIslandTransit {
    pub id: Arc<str>,
    pub kind: TransitPointKind,
    pub name: Arc<str>,
    pub location: Point,
    pub island: Island,
    /// Free text, e.g. "20 min flight".
    pub travel_time: Arc<str>,
    pub fare: Arc<str>,
}

/// A popular location offered by the location picker before any geocoding.
#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    pub name: Arc<str>,
    pub location: Point,
}

/// Result of matching two points against the maxi-taxi bands.
///
/// Built per query and handed to the UI; never cached.
#[derive(Clone, Debug)]
pub struct MaxiRouteInfo {
    pub route: Arc<MaxiRoute>,
    /// Stop the rider boards at (nearest catalog stop to the origin).
    pub from_stop: Arc<str>,
    /// Stop the rider gets off at (nearest catalog stop to the destination).
    pub to_stop: Arc<str>,
    /// Origin to boarding stop, km.
    pub distance_to_start: f64,
    /// Alighting stop to destination, km.
    pub distance_from_end: f64,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TransitError>;
