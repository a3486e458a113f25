//! Core traits for catalog entities.
//!
//! The matchers are written against these traits so that maxi bands and bus
//! routes go through the same proximity logic.

use std::sync::Arc;

use geo::Point;

use crate::identifiers::*;
use crate::models::types::*;

/// Anything with a fixed position on the map.
pub trait Located {
    fn location(&self) -> Point;
}

impl<T: Located + ?Sized> Located for Arc<T> {
    fn location(&self) -> Point {
        (**self).location()
    }
}

impl Located for Stop {
    fn location(&self) -> Point {
        self.location
    }
}

/// A fixed transit route (a maxi band or a bus route).
pub trait TransitRoute: Send + Sync {
    fn id(&self) -> &RouteIdentifier;

    fn mode(&self) -> TransitMode;

    /// Short name (e.g., "green", "12")
    fn short_name(&self) -> &str;

    /// Long name (e.g., "Port of Spain-Curepe-Chaguanas-San Fernando")
    fn long_name(&self) -> &str;

    /// Display color (hex RGB with leading '#')
    fn color(&self) -> &str;

    /// Published fare, where one exists
    fn fare(&self) -> Option<&str> {
        None
    }

    /// Stops with coordinates, in route order
    fn stops(&self) -> &[Stop];

    /// Stops within `degrees` (planar distance in degree space) of `point`,
    /// in route order.
    fn stops_within(&self, point: Point, degrees: f64) -> Vec<&Stop>;
}
