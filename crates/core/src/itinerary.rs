//! Rider-facing itinerary assembled from the transit matchers.

use std::sync::Arc;

use geo::Point;
use liming_transit::catalog::TransitCatalog;
use liming_transit::matcher::{
    InterIslandPlan, NearbyStand, find_best_maxi_match, find_relevant_routes, inter_island_plan,
    nearest_taxi_stands,
};
use liming_transit::models::traits::TransitRoute;
use liming_transit::models::types::{MaxiRouteInfo, TransitMode};

use crate::config::PlannerConfig;
use crate::road::{RoadPath, RoadRouter, route_or_straight_line};

/// A note for the rider that goes alongside the matched routes.
#[derive(Clone, Debug, PartialEq)]
pub enum Advisory {
    /// The walk from the origin to the boarding stop is long.
    LongWalkToStop { stop: Arc<str>, distance_km: f64 },
    /// The walk from the alighting stop to the destination is long.
    LongWalkFromStop { stop: Arc<str>, distance_km: f64 },
    /// No single maxi band connects the two points.
    NoDirectMaxi,
}

#[derive(Clone)]
pub struct Itinerary {
    pub origin: Point,
    pub destination: Point,
    pub maxi: Option<MaxiRouteInfo>,
    pub maxi_routes: Vec<Arc<dyn TransitRoute>>,
    pub bus_routes: Vec<Arc<dyn TransitRoute>>,
    /// Stands around the origin.
    pub taxi_stands: Vec<NearbyStand>,
    pub inter_island: Option<InterIslandPlan>,
    pub advisories: Vec<Advisory>,
}

impl std::fmt::Debug for Itinerary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = |routes: &[Arc<dyn TransitRoute>]| {
            routes
                .iter()
                .map(|r| r.short_name().to_string())
                .collect::<Vec<_>>()
        };

        f.debug_struct("Itinerary")
            .field("origin", &self.origin)
            .field("destination", &self.destination)
            .field("maxi", &self.maxi.as_ref().map(|m| m.route.id.clone()))
            .field("maxi_routes", &names(&self.maxi_routes))
            .field("bus_routes", &names(&self.bus_routes))
            .field("taxi_stands", &self.taxi_stands.len())
            .field("inter_island", &self.inter_island)
            .field("advisories", &self.advisories)
            .finish()
    }
}

pub struct Planner {
    catalog: Arc<TransitCatalog>,
    config: PlannerConfig,
}

impl Planner {
    pub fn new(catalog: Arc<TransitCatalog>, config: PlannerConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &Arc<TransitCatalog> {
        &self.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn plan(&self, origin: Point, destination: Point) -> Itinerary {
        let catalog = &*self.catalog;
        let threshold = self.config.proximity_degrees;

        let maxi = find_best_maxi_match(catalog, origin, destination);
        let maxi_routes = find_relevant_routes(
            catalog.classifier(),
            origin,
            destination,
            &catalog.routes(TransitMode::Maxi),
            threshold,
        );
        let bus_routes = find_relevant_routes(
            catalog.classifier(),
            origin,
            destination,
            &catalog.routes(TransitMode::Bus),
            threshold,
        );
        let taxi_stands = nearest_taxi_stands(catalog, origin, self.config.taxi_stand_limit);
        let inter_island = inter_island_plan(
            catalog,
            origin,
            destination,
            self.config.transit_point_preference,
        );

        let advisories = self.advisories(maxi.as_ref());

        tracing::debug!(
            maxi = maxi.as_ref().map(|m| m.route.id.as_str()),
            maxi_routes = maxi_routes.len(),
            bus_routes = bus_routes.len(),
            advisories = advisories.len(),
            "planned itinerary"
        );

        Itinerary {
            origin,
            destination,
            maxi,
            maxi_routes,
            bus_routes,
            taxi_stands,
            inter_island,
            advisories,
        }
    }

    /// Plan, then fetch the road path to draw (straight line on failure).
    pub async fn plan_with_path(
        &self,
        router: &dyn RoadRouter,
        origin: Point,
        destination: Point,
    ) -> (Itinerary, RoadPath) {
        let itinerary = self.plan(origin, destination);
        let path = route_or_straight_line(router, origin, destination).await;
        (itinerary, path)
    }

    fn advisories(&self, maxi: Option<&MaxiRouteInfo>) -> Vec<Advisory> {
        let Some(info) = maxi else {
            return vec![Advisory::NoDirectMaxi];
        };

        let limit = self.config.last_mile_advisory_km;
        let mut advisories = Vec::new();

        if info.distance_to_start > limit {
            advisories.push(Advisory::LongWalkToStop {
                stop: info.from_stop.clone(),
                distance_km: info.distance_to_start,
            });
        }
        if info.distance_from_end > limit {
            advisories.push(Advisory::LongWalkFromStop {
                stop: info.to_stop.clone(),
                distance_km: info.distance_from_end,
            });
        }

        advisories
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(
            TransitCatalog::trinidad_and_tobago(),
            PlannerConfig::default(),
        )
    }
}
