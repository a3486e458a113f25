//! Coarse island classification.
//!
//! Each island is approximated by an axis-aligned bounding box. Points near a
//! coastline or in open water fall outside both boxes and come back as
//! [`Island::Unknown`], which callers treat as "don't gate on island".

use geo::{Coord, Intersects, Point, Rect};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Island {
    Trinidad,
    Tobago,
    Unknown,
}

impl Island {
    pub fn is_known(self) -> bool {
        self != Island::Unknown
    }

    pub fn label(self) -> &'static str {
        match self {
            Island::Trinidad => "trinidad",
            Island::Tobago => "tobago",
            Island::Unknown => "unknown",
        }
    }
}

/// Bounding-box classifier. Regions are checked in order; the first box that
/// contains the point (edges inclusive) wins.
#[derive(Clone, Debug)]
pub struct IslandClassifier {
    regions: Vec<(Island, Rect)>,
}

impl IslandClassifier {
    pub fn new(regions: Vec<(Island, Rect)>) -> Self {
        Self { regions }
    }

    /// Boxes for Tobago (checked first) and Trinidad.
    pub fn trinidad_and_tobago() -> Self {
        Self::new(vec![
            (
                Island::Tobago,
                Rect::new(Coord { x: -60.9, y: 11.0 }, Coord { x: -60.5, y: 11.5 }),
            ),
            (
                Island::Trinidad,
                Rect::new(Coord { x: -61.95, y: 10.0 }, Coord { x: -60.9, y: 10.9 }),
            ),
        ])
    }

    pub fn classify(&self, point: Point) -> Island {
        self.regions
            .iter()
            .find(|(_, bounds)| bounds.intersects(&point.0))
            .map(|(island, _)| *island)
            .unwrap_or(Island::Unknown)
    }

    /// Whether two points sit on different, known islands.
    pub fn crosses_islands(&self, a: Point, b: Point) -> bool {
        let (a, b) = (self.classify(a), self.classify(b));
        a.is_known() && b.is_known() && a != b
    }
}

impl Default for IslandClassifier {
    fn default() -> Self {
        Self::trinidad_and_tobago()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::queries::point;

    #[test]
    fn test_classify_inside_each_island() {
        let classifier = IslandClassifier::default();

        assert_eq!(classifier.classify(point(10.6549, -61.5019)), Island::Trinidad);
        assert_eq!(classifier.classify(point(10.2799, -61.4651)), Island::Trinidad);
        assert_eq!(classifier.classify(point(11.1833, -60.7333)), Island::Tobago);
        assert_eq!(classifier.classify(point(11.3167, -60.5500)), Island::Tobago);
    }

    #[test]
    fn test_classify_open_ocean() {
        let classifier = IslandClassifier::default();
        assert_eq!(classifier.classify(point(0.0, 0.0)), Island::Unknown);
        assert_eq!(classifier.classify(point(10.95, -61.0)), Island::Unknown);
    }

    #[test]
    fn test_shared_edge_goes_to_first_region() {
        // lon -60.9 is on both boxes' edges, but the latitude only fits one.
        let classifier = IslandClassifier::default();
        assert_eq!(classifier.classify(point(11.0, -60.9)), Island::Tobago);
        assert_eq!(classifier.classify(point(10.0, -60.9)), Island::Trinidad);
    }

    #[test]
    fn test_crosses_islands() {
        let classifier = IslandClassifier::default();
        let port_of_spain = point(10.6549, -61.5019);
        let scarborough = point(11.1833, -60.7333);
        let san_fernando = point(10.2799, -61.4651);

        assert!(classifier.crosses_islands(port_of_spain, scarborough));
        assert!(!classifier.crosses_islands(port_of_spain, san_fernando));
        assert!(!classifier.crosses_islands(port_of_spain, point(0.0, 0.0)));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Island::Trinidad.label(), "trinidad");
        assert_eq!(Island::Unknown.label(), "unknown");
        assert!(!Island::Unknown.is_known());
    }
}
