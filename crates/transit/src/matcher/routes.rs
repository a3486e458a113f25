//! Generic fixed-route matcher for bands and bus routes.

use std::sync::Arc;

use geo::Point;

use crate::island::{Island, IslandClassifier};
use crate::models::traits::TransitRoute;

/// Routes that serve a trip from `origin` to `destination`.
///
/// A route stop is "near" an endpoint when it lies within `threshold_degrees`
/// of it in degree space. When the endpoints are on different known islands,
/// a route qualifies for the leg on its own island (origin island with a
/// near-origin stop, or destination island with a near-destination stop).
/// Otherwise it must have a near stop at both ends. Input order is preserved.
pub fn find_relevant_routes(
    classifier: &IslandClassifier,
    origin: Point,
    destination: Point,
    routes: &[Arc<dyn TransitRoute>],
    threshold_degrees: f64,
) -> Vec<Arc<dyn TransitRoute>> {
    let origin_island = classifier.classify(origin);
    let destination_island = classifier.classify(destination);
    let inter_island = origin_island.is_known()
        && destination_island.is_known()
        && origin_island != destination_island;

    let relevant: Vec<Arc<dyn TransitRoute>> = routes
        .iter()
        .filter(|route| {
            let route_island = route
                .stops()
                .first()
                .map(|stop| classifier.classify(stop.location))
                .unwrap_or(Island::Unknown);

            let near_origin = !route.stops_within(origin, threshold_degrees).is_empty();
            let near_destination = !route
                .stops_within(destination, threshold_degrees)
                .is_empty();

            if inter_island {
                (route_island == origin_island && near_origin)
                    || (route_island == destination_island && near_destination)
            } else {
                near_origin && near_destination
            }
        })
        .cloned()
        .collect();

    tracing::debug!(
        origin_island = origin_island.label(),
        destination_island = destination_island.label(),
        candidates = routes.len(),
        matched = relevant.len(),
        "matched fixed routes"
    );

    relevant
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TransitCatalog;
    use crate::matcher::DEFAULT_PROXIMITY_DEGREES;
    use crate::models::types::TransitMode;
    use crate::spatial::queries::point;

    fn short_names(routes: &[Arc<dyn TransitRoute>]) -> Vec<String> {
        routes.iter().map(|r| r.short_name().to_string()).collect()
    }

    fn matched(mode: TransitMode, origin: Point, destination: Point) -> Vec<String> {
        let catalog = TransitCatalog::trinidad_and_tobago();
        let routes = find_relevant_routes(
            catalog.classifier(),
            origin,
            destination,
            &catalog.routes(mode),
            DEFAULT_PROXIMITY_DEGREES,
        );
        short_names(&routes)
    }

    #[test]
    fn test_same_island_requires_both_ends() {
        let city_gate = point(10.6518, -61.5170);
        let san_fernando = point(10.2833, -61.4667);

        assert_eq!(matched(TransitMode::Bus, city_gate, san_fernando), vec!["12"]);
        assert_eq!(matched(TransitMode::Maxi, city_gate, san_fernando), vec!["green"]);
    }

    #[test]
    fn test_same_island_nothing_connects() {
        let moruga = point(10.0667, -61.2833);
        let diego_martin = point(10.7167, -61.5500);

        assert!(matched(TransitMode::Bus, moruga, diego_martin).is_empty());
        assert!(matched(TransitMode::Maxi, moruga, diego_martin).is_empty());
    }

    #[test]
    fn test_cross_island_assembles_each_leg() {
        let arima = point(10.6333, -61.2833);
        let scarborough = point(11.1833, -60.7333);

        assert_eq!(matched(TransitMode::Bus, arima, scarborough), vec!["45", "T1"]);
        assert_eq!(
            matched(TransitMode::Maxi, arima, scarborough),
            vec!["red", "blue", "brown"]
        );
    }

    #[test]
    fn test_unknown_island_falls_back_to_both_ends() {
        // With a known destination island the T1 leg alone would qualify, but
        // an unknown origin disables the per-leg rule.
        let open_ocean = point(0.0, 0.0);
        let scarborough = point(11.1833, -60.7333);

        assert!(matched(TransitMode::Bus, open_ocean, scarborough).is_empty());
        assert!(matched(TransitMode::Maxi, open_ocean, scarborough).is_empty());
    }

    #[test]
    fn test_threshold_is_respected() {
        let catalog = TransitCatalog::trinidad_and_tobago();
        let city_gate = point(10.6518, -61.5170);
        let san_fernando = point(10.2833, -61.4667);

        let none = find_relevant_routes(
            catalog.classifier(),
            point(10.70, -61.5170),
            san_fernando,
            &catalog.routes(TransitMode::Bus),
            0.0,
        );
        assert!(none.is_empty());

        let exact = find_relevant_routes(
            catalog.classifier(),
            city_gate,
            san_fernando,
            &catalog.routes(TransitMode::Bus),
            1e-9,
        );
        assert_eq!(short_names(&exact), vec!["12"]);
    }
}
