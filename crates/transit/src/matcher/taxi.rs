//! Nearest taxi stands.

use std::sync::Arc;

use geo::Point;

use crate::catalog::TransitCatalog;
use crate::island::Island;
use crate::models::types::TaxiStand;
use crate::spatial::queries::distance_km;

#[derive(Clone, Debug)]
pub struct NearbyStand {
    pub stand: Arc<TaxiStand>,
    pub distance_km: f64,
}

/// Up to `limit` stands closest to `point`, nearest first.
///
/// Only stands on the same island as the point are considered; an unknown
/// island disables that filter.
pub fn nearest_taxi_stands(
    catalog: &TransitCatalog,
    point: Point,
    limit: usize,
) -> Vec<NearbyStand> {
    let classifier = catalog.classifier();
    let island = classifier.classify(point);

    let mut stands: Vec<NearbyStand> = catalog
        .taxi_stands()
        .iter()
        .filter(|stand| island == Island::Unknown || classifier.classify(stand.location) == island)
        .map(|stand| NearbyStand {
            stand: stand.clone(),
            distance_km: distance_km(point, stand.location),
        })
        .collect();

    stands.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    stands.truncate(limit);
    stands
}
