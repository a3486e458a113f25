//! Spatial query utilities for distance calculations.
//!
//! Distances are great-circle (Haversine) on a spherical Earth of radius
//! 6371 km. Points follow the `geo` convention: x is longitude, y latitude.

use geo::Point;

use crate::models::traits::Located;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Build a point from decimal-degree latitude and longitude.
pub fn point(latitude: f64, longitude: f64) -> Point {
    Point::new(longitude, latitude)
}

/// Great-circle distance between two points in kilometers.
///
/// Inputs are not range-checked; out-of-range coordinates give a defined but
/// meaningless result.
pub fn distance_km(a: Point, b: Point) -> f64 {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let d_lat = (b.y() - a.y()).to_radians();
    let d_lon = (b.x() - a.x()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// A candidate picked by [`nearest`] together with its distance.
#[derive(Clone, Copy, Debug)]
pub struct Nearest<'a, T> {
    pub item: &'a T,
    pub distance_km: f64,
}

/// Find the candidate closest to `point`.
///
/// Linear scan with a strict `<` comparison, so the earliest candidate wins an
/// exact tie. Callers must pass a non-empty slice; an empty one yields `None`.
pub fn nearest<T: Located>(point: Point, candidates: &[T]) -> Option<Nearest<'_, T>> {
    let (first, rest) = candidates.split_first()?;
    let mut best = Nearest {
        item: first,
        distance_km: distance_km(point, first.location()),
    };

    for candidate in rest {
        let distance = distance_km(point, candidate.location());
        if distance < best.distance_km {
            best = Nearest {
                item: candidate,
                distance_km: distance,
            };
        }
    }

    Some(best)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::identifiers::StopIdentifier;
    use crate::models::types::Stop;

    fn stop(name: &str, lat: f64, lon: f64) -> Stop {
        Stop {
            id: StopIdentifier::new(name),
            name: Arc::from(name),
            location: point(lat, lon),
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let port_of_spain = point(10.6549, -61.5019);
        assert_eq!(distance_km(port_of_spain, port_of_spain), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let port_of_spain = point(10.6549, -61.5019);
        let scarborough = point(11.1833, -60.7333);

        assert_abs_diff_eq!(
            distance_km(port_of_spain, scarborough),
            distance_km(scarborough, port_of_spain),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_distance_port_of_spain_to_san_fernando() {
        // Roughly 42 km down the west coast
        let dist = distance_km(point(10.6549, -61.5019), point(10.2799, -61.4651));
        assert!((dist - 41.9).abs() < 1.0, "got {dist}");
    }

    #[test]
    fn test_triangle_inequality() {
        let port_of_spain = point(10.6549, -61.5019);
        let chaguanas = point(10.5167, -61.4167);
        let san_fernando = point(10.2799, -61.4651);

        let direct = distance_km(port_of_spain, san_fernando);
        let via = distance_km(port_of_spain, chaguanas) + distance_km(chaguanas, san_fernando);
        assert!(direct <= via + 1e-9);
    }

    #[test]
    fn test_nearest_single_candidate() {
        let stops = [stop("Moruga", 10.0667, -61.2833)];
        let found = nearest(point(40.7, -74.0), &stops).unwrap();

        assert_eq!(found.item.name.as_ref(), "Moruga");
        assert!(found.distance_km > 1000.0);
    }

    #[test]
    fn test_nearest_first_wins_on_tie() {
        let stops = [
            stop("first", 10.6, -61.5),
            stop("second", 10.6, -61.5),
            stop("far", 11.0, -61.0),
        ];
        let found = nearest(point(10.7, -61.5), &stops).unwrap();
        assert_eq!(found.item.name.as_ref(), "first");
    }

    #[test]
    fn test_nearest_empty() {
        let stops: [Stop; 0] = [];
        assert!(nearest(point(10.0, -61.0), &stops).is_none());
    }
}
