//! Synchronous matchers over the built-in Trinidad & Tobago catalog.

use std::sync::LazyLock;

use liming_core::itinerary::Planner;
use liming_core::transit::catalog::TransitCatalog;
use liming_core::transit::matcher::{self, DEFAULT_PROXIMITY_DEGREES, TransitPointPreference};
use liming_core::transit::spatial::queries;

use crate::records::*;

static PLANNER: LazyLock<Planner> = LazyLock::new(Planner::default);

fn catalog() -> &'static TransitCatalog {
    PLANNER.catalog()
}

/// Great-circle distance in km.
#[uniffi::export]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    queries::distance_km(a.into(), b.into())
}

#[uniffi::export]
pub fn nearest_maxi_stop(point: Coordinate) -> Option<NearestStop> {
    queries::nearest(point.into(), catalog().maxi_stops()).map(|n| NearestStop {
        stop: StopInfo::from(&**n.item),
        distance_km: n.distance_km,
    })
}

#[uniffi::export]
pub fn classify_island(point: Coordinate) -> IslandLabel {
    catalog().classifier().classify(point.into()).into()
}

/// The single maxi band that connects both points, if any.
#[uniffi::export]
pub fn match_maxi_route(origin: Coordinate, destination: Coordinate) -> Option<MaxiMatch> {
    matcher::find_best_maxi_match(catalog(), origin.into(), destination.into())
        .as_ref()
        .map(MaxiMatch::from)
}

#[uniffi::export]
pub fn match_routes(
    origin: Coordinate,
    destination: Coordinate,
    mode: RouteMode,
) -> Vec<RouteSummary> {
    let catalog = catalog();
    let routes = matcher::find_relevant_routes(
        catalog.classifier(),
        origin.into(),
        destination.into(),
        &catalog.routes(mode.into()),
        DEFAULT_PROXIMITY_DEGREES,
    );
    summaries(&routes)
}

#[uniffi::export]
pub fn nearest_taxi_stands(point: Coordinate, limit: u32) -> Vec<TaxiStandInfo> {
    matcher::nearest_taxi_stands(catalog(), point.into(), limit as usize)
        .iter()
        .map(TaxiStandInfo::from)
        .collect()
}

/// `None` when either point is off both islands.
#[uniffi::export]
pub fn inter_island_plan(
    origin: Coordinate,
    destination: Coordinate,
    prefer_ferry: bool,
) -> Option<InterIslandInfo> {
    let preference = if prefer_ferry {
        TransitPointPreference::Ferry
    } else {
        TransitPointPreference::Airport
    };

    matcher::inter_island_plan(catalog(), origin.into(), destination.into(), preference)
        .as_ref()
        .map(InterIslandInfo::from)
}

#[uniffi::export]
pub fn search_places(query: String) -> Vec<PlaceInfo> {
    catalog()
        .search_places(&query)
        .iter()
        .map(|place| PlaceInfo::from(&**place))
        .collect()
}

#[uniffi::export]
pub fn plan_itinerary(origin: Coordinate, destination: Coordinate) -> ItineraryInfo {
    (&PLANNER.plan(origin.into(), destination.into())).into()
}
