//! R-tree nodes for per-route stop lookup.
//!
//! Each route indexes its stops once at catalog load. Distances inside the
//! tree are planar in degree space, which is exactly what the route matcher's
//! degree threshold needs; Haversine distances are computed afterwards on the
//! few stops that survive.

use geo::Point;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crate::models::types::Stop;

#[derive(Clone, Debug)]
pub struct StopNode {
    /// Position of the stop in its route's stop list.
    pub index: usize,
    point: [f64; 2],
}

impl StopNode {
    pub fn new(index: usize, location: Point) -> Self {
        Self {
            index,
            point: [location.x(), location.y()],
        }
    }
}

impl RTreeObject for StopNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StopNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Spatial index over one route's stops.
#[derive(Clone)]
pub struct StopIndex {
    tree: RTree<StopNode>,
}

impl StopIndex {
    pub fn build(stops: &[Stop]) -> Self {
        let nodes = stops
            .iter()
            .enumerate()
            .map(|(index, stop)| StopNode::new(index, stop.location))
            .collect();

        Self {
            tree: RTree::bulk_load(nodes),
        }
    }

    /// Indices of stops within `degrees` of `point`, ascending.
    pub fn within(&self, point: Point, degrees: f64) -> Vec<usize> {
        if degrees < 0.0 || !degrees.is_finite() {
            return Vec::new();
        }

        let mut indices: Vec<usize> = self
            .tree
            .locate_within_distance([point.x(), point.y()], degrees * degrees)
            .map(|node| node.index)
            .collect();
        indices.sort_unstable();
        indices
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::identifiers::StopIdentifier;
    use crate::spatial::queries::point;

    fn stops() -> Vec<Stop> {
        [
            ("City Gate Terminal", 10.6518, -61.5170),
            ("Woodbrook", 10.6667, -61.5167),
            ("Chaguanas", 10.5167, -61.4167),
            ("San Fernando", 10.2833, -61.4667),
        ]
        .into_iter()
        .map(|(name, lat, lon)| Stop {
            id: StopIdentifier::new(name),
            name: Arc::from(name),
            location: point(lat, lon),
        })
        .collect()
    }

    #[test]
    fn test_within_returns_route_order() {
        let index = StopIndex::build(&stops());
        assert_eq!(index.len(), 4);

        let near_city_gate = index.within(point(10.6549, -61.5019), 0.05);
        assert_eq!(near_city_gate, vec![0, 1]);
    }

    #[test]
    fn test_within_nothing_close() {
        let index = StopIndex::build(&stops());
        assert!(index.within(point(11.1833, -60.7333), 0.05).is_empty());
    }

    #[test]
    fn test_within_rejects_bad_radius() {
        let index = StopIndex::build(&stops());
        assert!(index.within(point(10.6518, -61.5170), f64::NAN).is_empty());
        assert!(index.within(point(10.6518, -61.5170), -1.0).is_empty());
    }
}
