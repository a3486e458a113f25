//! Airport and ferry pairing for trips between the two islands.

use std::sync::Arc;

use geo::Point;
use serde::Deserialize;

use crate::catalog::TransitCatalog;
use crate::island::Island;
use crate::models::types::{InterIslandTransit, TransitPointKind};

/// Which kind of crossing to suggest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitPointPreference {
    #[default]
    Airport,
    Ferry,
}

impl TransitPointPreference {
    fn kinds(self) -> [TransitPointKind; 2] {
        let first = match self {
            Self::Airport => TransitPointKind::Airport,
            Self::Ferry => TransitPointKind::Ferry,
        };
        [first, first.other()]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InterIslandPlan {
    /// Both endpoints are on the same island.
    SameIsland,
    /// Leave from `departure`, arrive at `arrival`; both are the same kind.
    Crossing {
        departure: Arc<InterIslandTransit>,
        arrival: Arc<InterIslandTransit>,
    },
    /// The islands differ but no airport or ferry pair links them.
    Unserved,
}

impl InterIslandPlan {
    pub fn needs_inter_island(&self) -> bool {
        !matches!(self, InterIslandPlan::SameIsland)
    }
}

/// Decide whether a trip crosses between islands and, if so, how.
///
/// Returns `None` when either endpoint's island is unknown.
pub fn inter_island_plan(
    catalog: &TransitCatalog,
    origin: Point,
    destination: Point,
    preference: TransitPointPreference,
) -> Option<InterIslandPlan> {
    let classifier = catalog.classifier();
    let from = classifier.classify(origin);
    let to = classifier.classify(destination);

    if from == Island::Unknown || to == Island::Unknown {
        return None;
    }

    if from == to {
        return Some(InterIslandPlan::SameIsland);
    }

    let first_of = |island: Island, kind: TransitPointKind| {
        catalog
            .transit_points()
            .iter()
            .find(|t| t.island == island && t.kind == kind)
            .cloned()
    };

    for kind in preference.kinds() {
        if let (Some(departure), Some(arrival)) = (first_of(from, kind), first_of(to, kind)) {
            return Some(InterIslandPlan::Crossing { departure, arrival });
        }
    }

    tracing::warn!(
        from = from.label(),
        to = to.label(),
        "no inter-island link between islands"
    );
    Some(InterIslandPlan::Unserved)
}
