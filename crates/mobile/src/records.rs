//! Plain records handed across the FFI boundary.

use geo::Point;
use liming_core::itinerary::{Advisory, Itinerary};
use liming_core::road::RoadPath;
use liming_core::transit::island::Island;
use liming_core::transit::matcher::{InterIslandPlan, NearbyStand};
use liming_core::transit::models::traits::TransitRoute;
use liming_core::transit::models::types::{
    InterIslandTransit, MaxiRouteInfo, Place, Stop, TransitMode, TransitPointKind,
};

#[derive(Clone, Copy, Debug, PartialEq, uniffi::Record)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinate> for Point {
    fn from(c: Coordinate) -> Self {
        Point::new(c.longitude, c.latitude)
    }
}

impl From<Point> for Coordinate {
    fn from(p: Point) -> Self {
        Self {
            latitude: p.y(),
            longitude: p.x(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum IslandLabel {
    Trinidad,
    Tobago,
    Unknown,
}

impl From<Island> for IslandLabel {
    fn from(island: Island) -> Self {
        match island {
            Island::Trinidad => Self::Trinidad,
            Island::Tobago => Self::Tobago,
            Island::Unknown => Self::Unknown,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum RouteMode {
    Maxi,
    Bus,
}

impl From<RouteMode> for TransitMode {
    fn from(mode: RouteMode) -> Self {
        match mode {
            RouteMode::Maxi => TransitMode::Maxi,
            RouteMode::Bus => TransitMode::Bus,
        }
    }
}

impl From<TransitMode> for RouteMode {
    fn from(mode: TransitMode) -> Self {
        match mode {
            TransitMode::Maxi => RouteMode::Maxi,
            TransitMode::Bus => RouteMode::Bus,
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct StopInfo {
    pub name: String,
    pub location: Coordinate,
}

impl From<&Stop> for StopInfo {
    fn from(stop: &Stop) -> Self {
        Self {
            name: stop.name.to_string(),
            location: stop.location.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct NearestStop {
    pub stop: StopInfo,
    pub distance_km: f64,
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct RouteSummary {
    pub id: String,
    pub mode: RouteMode,
    pub short_name: String,
    pub long_name: String,
    /// Hex RGB with leading '#'.
    pub color: String,
    pub fare: Option<String>,
    pub stops: Vec<StopInfo>,
}

impl From<&dyn TransitRoute> for RouteSummary {
    fn from(route: &dyn TransitRoute) -> Self {
        Self {
            id: route.id().to_string(),
            mode: route.mode().into(),
            short_name: route.short_name().to_string(),
            long_name: route.long_name().to_string(),
            color: route.color().to_string(),
            fare: route.fare().map(str::to_string),
            stops: route.stops().iter().map(StopInfo::from).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct MaxiMatch {
    pub route: RouteSummary,
    pub from_stop: String,
    pub to_stop: String,
    /// Origin to boarding stop, km.
    pub distance_to_start_km: f64,
    /// Alighting stop to destination, km.
    pub distance_from_end_km: f64,
}

impl From<&MaxiRouteInfo> for MaxiMatch {
    fn from(info: &MaxiRouteInfo) -> Self {
        let route: &dyn TransitRoute = &*info.route;
        Self {
            route: route.into(),
            from_stop: info.from_stop.to_string(),
            to_stop: info.to_stop.to_string(),
            distance_to_start_km: info.distance_to_start,
            distance_from_end_km: info.distance_from_end,
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct TaxiStandInfo {
    pub id: String,
    pub name: String,
    pub location: Coordinate,
    pub destinations: Vec<String>,
    pub estimated_wait: String,
    pub distance_km: f64,
}

impl From<&NearbyStand> for TaxiStandInfo {
    fn from(nearby: &NearbyStand) -> Self {
        let stand = &nearby.stand;
        Self {
            id: stand.id.to_string(),
            name: stand.name.to_string(),
            location: stand.location.into(),
            destinations: stand.destinations.iter().map(|d| d.to_string()).collect(),
            estimated_wait: stand.estimated_wait.to_string(),
            distance_km: nearby.distance_km,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum TransitPointType {
    Airport,
    Ferry,
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct TransitPointInfo {
    pub id: String,
    pub kind: TransitPointType,
    pub name: String,
    pub location: Coordinate,
    pub island: IslandLabel,
    pub travel_time: String,
    pub fare: String,
}

impl From<&InterIslandTransit> for TransitPointInfo {
    fn from(point: &InterIslandTransit) -> Self {
        Self {
            id: point.id.to_string(),
            kind: match point.kind {
                TransitPointKind::Airport => TransitPointType::Airport,
                TransitPointKind::Ferry => TransitPointType::Ferry,
            },
            name: point.name.to_string(),
            location: point.location.into(),
            island: point.island.into(),
            travel_time: point.travel_time.to_string(),
            fare: point.fare.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Enum)]
pub enum InterIslandInfo {
    SameIsland,
    Crossing {
        departure: TransitPointInfo,
        arrival: TransitPointInfo,
    },
    Unserved,
}

impl From<&InterIslandPlan> for InterIslandInfo {
    fn from(plan: &InterIslandPlan) -> Self {
        match plan {
            InterIslandPlan::SameIsland => Self::SameIsland,
            InterIslandPlan::Crossing { departure, arrival } => Self::Crossing {
                departure: TransitPointInfo::from(&**departure),
                arrival: TransitPointInfo::from(&**arrival),
            },
            InterIslandPlan::Unserved => Self::Unserved,
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct PlaceInfo {
    pub name: String,
    pub location: Coordinate,
}

impl From<&Place> for PlaceInfo {
    fn from(place: &Place) -> Self {
        Self {
            name: place.name.to_string(),
            location: place.location.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Enum)]
pub enum AdvisoryInfo {
    LongWalkToStop { stop: String, distance_km: f64 },
    LongWalkFromStop { stop: String, distance_km: f64 },
    NoDirectMaxi,
}

impl From<&Advisory> for AdvisoryInfo {
    fn from(advisory: &Advisory) -> Self {
        match advisory {
            Advisory::LongWalkToStop { stop, distance_km } => Self::LongWalkToStop {
                stop: stop.to_string(),
                distance_km: *distance_km,
            },
            Advisory::LongWalkFromStop { stop, distance_km } => Self::LongWalkFromStop {
                stop: stop.to_string(),
                distance_km: *distance_km,
            },
            Advisory::NoDirectMaxi => Self::NoDirectMaxi,
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct ItineraryInfo {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub maxi: Option<MaxiMatch>,
    pub maxi_routes: Vec<RouteSummary>,
    pub bus_routes: Vec<RouteSummary>,
    pub taxi_stands: Vec<TaxiStandInfo>,
    pub inter_island: Option<InterIslandInfo>,
    pub advisories: Vec<AdvisoryInfo>,
}

impl From<&Itinerary> for ItineraryInfo {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            origin: itinerary.origin.into(),
            destination: itinerary.destination.into(),
            maxi: itinerary.maxi.as_ref().map(MaxiMatch::from),
            maxi_routes: summaries(&itinerary.maxi_routes),
            bus_routes: summaries(&itinerary.bus_routes),
            taxi_stands: itinerary.taxi_stands.iter().map(TaxiStandInfo::from).collect(),
            inter_island: itinerary.inter_island.as_ref().map(InterIslandInfo::from),
            advisories: itinerary.advisories.iter().map(AdvisoryInfo::from).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct RoadPathInfo {
    pub points: Vec<Coordinate>,
    /// True when this is the straight-line stand-in for a failed fetch.
    pub degraded: bool,
}

impl From<RoadPath> for RoadPathInfo {
    fn from(path: RoadPath) -> Self {
        Self {
            points: path.points.into_iter().map(Coordinate::from).collect(),
            degraded: path.degraded,
        }
    }
}

pub(crate) fn summaries(routes: &[std::sync::Arc<dyn TransitRoute>]) -> Vec<RouteSummary> {
    routes.iter().map(|r| RouteSummary::from(&**r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_axis_order() {
        let c = Coordinate {
            latitude: 10.6549,
            longitude: -61.5019,
        };
        let p: Point = c.into();

        assert_eq!(p.x(), -61.5019);
        assert_eq!(p.y(), 10.6549);
        assert_eq!(Coordinate::from(p), c);
    }

    #[test]
    fn test_route_mode_round_trip() {
        assert_eq!(TransitMode::from(RouteMode::Maxi), TransitMode::Maxi);
        assert_eq!(RouteMode::from(TransitMode::Bus), RouteMode::Bus);
    }
}
