//! In-memory registry of the static transit reference data.
//!
//! Everything is parsed, validated and indexed once; afterwards the registry
//! is read-only and shared behind `Arc`s.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use geo::Point;

use crate::catalog::records::*;
use crate::identifiers::*;
use crate::island::IslandClassifier;
use crate::models::{traits::*, types::*};
use crate::spatial::index::StopIndex;
use crate::spatial::queries::point;

const TRINIDAD_AND_TOBAGO: &str = include_str!("../../data/tt.json");

static BUILTIN: LazyLock<Arc<TransitCatalog>> = LazyLock::new(|| {
    let catalog = TransitCatalog::from_json(TRINIDAD_AND_TOBAGO)
        .expect("embedded Trinidad & Tobago catalog is valid");
    Arc::new(catalog)
});

// ============================================================================
// Concrete Route Implementations
// ============================================================================

/// A maxi-taxi band.
///
/// Bands list their stops by name; the coordinates come from the shared maxi
/// stop catalog and are resolved when the catalog is built.
#[derive(Clone)]
pub struct MaxiRoute {
    pub id: RouteIdentifier,
    /// Band color name, e.g. "green".
    pub color: Arc<str>,
    /// Hex color for display.
    pub color_code: Arc<str>,
    /// Free-text description of the corridor.
    pub description: Arc<str>,
    pub stop_names: Vec<Arc<str>>,
    /// Published fare range, when one is known.
    pub fare: Option<Arc<str>>,
    stops: Vec<Stop>,
    index: StopIndex,
}

impl MaxiRoute {
    pub fn serves(&self, stop_name: &str) -> bool {
        self.stop_names.iter().any(|name| name.as_ref() == stop_name)
    }
}

impl fmt::Debug for MaxiRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaxiRoute")
            .field("id", &self.id)
            .field("color", &self.color)
            .field("stop_names", &self.stop_names)
            .finish()
    }
}

impl TransitRoute for MaxiRoute {
    fn id(&self) -> &RouteIdentifier {
        &self.id
    }

    fn mode(&self) -> TransitMode {
        TransitMode::Maxi
    }

    fn short_name(&self) -> &str {
        &self.color
    }

    fn long_name(&self) -> &str {
        &self.description
    }

    fn color(&self) -> &str {
        &self.color_code
    }

    fn fare(&self) -> Option<&str> {
        self.fare.as_deref()
    }

    fn stops(&self) -> &[Stop] {
        &self.stops
    }

    fn stops_within(&self, point: Point, degrees: f64) -> Vec<&Stop> {
        self.index
            .within(point, degrees)
            .into_iter()
            .map(|i| &self.stops[i])
            .collect()
    }
}

/// A PTSC bus route. Every stop carries its own coordinate.
#[derive(Clone)]
pub struct BusRoute {
    pub id: RouteIdentifier,
    pub number: Arc<str>,
    pub name: Arc<str>,
    pub color: Arc<str>,
    stops: Vec<Stop>,
    index: StopIndex,
}

impl fmt::Debug for BusRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BusRoute")
            .field("number", &self.number)
            .field("name", &self.name)
            .field("stops", &self.stops.len())
            .finish()
    }
}

impl TransitRoute for BusRoute {
    fn id(&self) -> &RouteIdentifier {
        &self.id
    }

    fn mode(&self) -> TransitMode {
        TransitMode::Bus
    }

    fn short_name(&self) -> &str {
        &self.number
    }

    fn long_name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn stops(&self) -> &[Stop] {
        &self.stops
    }

    fn stops_within(&self, point: Point, degrees: f64) -> Vec<&Stop> {
        self.index
            .within(point, degrees)
            .into_iter()
            .map(|i| &self.stops[i])
            .collect()
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Read-only registry of stops, routes, stands and inter-island links.
///
/// Cheap to clone; all data is stored in `Arc`s.
#[derive(Clone)]
pub struct TransitCatalog {
    maxi_stops: Vec<Arc<Stop>>,
    maxi_routes: Vec<Arc<MaxiRoute>>,
    bus_routes: Vec<Arc<BusRoute>>,
    taxi_stands: Vec<Arc<TaxiStand>>,
    transit_points: Vec<Arc<InterIslandTransit>>,
    places: Vec<Arc<Place>>,

    route_map: HashMap<RouteIdentifier, Arc<dyn TransitRoute>>,

    classifier: IslandClassifier,
}

impl TransitCatalog {
    /// The built-in Trinidad & Tobago catalog, loaded on first use.
    pub fn trinidad_and_tobago() -> Arc<TransitCatalog> {
        Arc::clone(&BUILTIN)
    }

    /// Parse and validate a catalog from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let record: CatalogRecord = serde_json::from_str(json)?;
        let catalog = Self::from_record(record)?;

        tracing::info!(
            maxi_stops = catalog.maxi_stops.len(),
            maxi_routes = catalog.maxi_routes.len(),
            bus_routes = catalog.bus_routes.len(),
            taxi_stands = catalog.taxi_stands.len(),
            "loaded transit catalog"
        );

        Ok(catalog)
    }

    /// Build a catalog from raw records.
    ///
    /// Fails when a maxi band names a stop missing from the stop catalog,
    /// when any stop table or route stop list is empty, or when identifiers
    /// collide.
    pub fn from_record(record: CatalogRecord) -> Result<Self> {
        if record.maxi_stops.is_empty() {
            return Err(TransitError::InvalidData(
                "maxi stop catalog is empty".to_string(),
            ));
        }

        let mut maxi_stop_map = HashMap::new();
        let mut maxi_stops = Vec::with_capacity(record.maxi_stops.len());
        for stop in record.maxi_stops {
            let stop = Arc::new(Stop {
                id: StopIdentifier::new(&stop.name),
                name: stop.name.into(),
                location: point(stop.lat, stop.lon),
            });
            if maxi_stop_map.insert(stop.id.clone(), stop.clone()).is_some() {
                return Err(TransitError::InvalidData(format!(
                    "duplicate maxi stop: {}",
                    stop.name
                )));
            }
            maxi_stops.push(stop);
        }

        let mut route_map: HashMap<RouteIdentifier, Arc<dyn TransitRoute>> = HashMap::new();

        let mut maxi_routes = Vec::with_capacity(record.maxi_routes.len());
        for route in record.maxi_routes {
            if route.stops.is_empty() {
                return Err(TransitError::InvalidData(format!(
                    "maxi route {} has no stops",
                    route.id
                )));
            }

            let stops = route
                .stops
                .iter()
                .map(|name| {
                    maxi_stop_map
                        .get(name.as_str())
                        .map(|stop| Stop::clone(stop))
                        .ok_or_else(|| {
                            TransitError::InvalidData(format!(
                                "maxi route {} references unknown stop {name:?}",
                                route.id
                            ))
                        })
                })
                .collect::<Result<Vec<_>>>()?;

            let maxi = Arc::new(MaxiRoute {
                id: RouteIdentifier::new(&route.id),
                color: route.color.into(),
                color_code: route.color_code.into(),
                description: route.description.into(),
                stop_names: route.stops.into_iter().map(Arc::from).collect(),
                fare: route.fare.map(Arc::from),
                index: StopIndex::build(&stops),
                stops,
            });
            insert_route(&mut route_map, maxi.clone())?;
            maxi_routes.push(maxi);
        }

        let mut bus_routes = Vec::with_capacity(record.bus_routes.len());
        for route in record.bus_routes {
            if route.stops.is_empty() {
                return Err(TransitError::InvalidData(format!(
                    "bus route {} has no stops",
                    route.number
                )));
            }

            let stops: Vec<Stop> = route
                .stops
                .into_iter()
                .map(|stop| Stop {
                    id: StopIdentifier::new(stop.id),
                    name: stop.name.into(),
                    location: point(stop.lat, stop.lon),
                })
                .collect();

            let bus = Arc::new(BusRoute {
                id: RouteIdentifier::new(format!("bus-{}", route.number)),
                number: route.number.into(),
                name: route.name.into(),
                color: route.color.into(),
                index: StopIndex::build(&stops),
                stops,
            });
            insert_route(&mut route_map, bus.clone())?;
            bus_routes.push(bus);
        }

        let taxi_stands: Vec<Arc<TaxiStand>> = record
            .taxi_stands
            .into_iter()
            .map(|stand| {
                Arc::new(TaxiStand {
                    id: stand.id.into(),
                    name: stand.name.into(),
                    location: point(stand.lat, stand.lon),
                    destinations: stand.destinations.into_iter().map(Arc::from).collect(),
                    estimated_wait: stand.estimated_wait.into(),
                })
            })
            .collect();

        let transit_points: Vec<Arc<InterIslandTransit>> = record
            .transit_points
            .into_iter()
            .map(|transit| {
                Arc::new(InterIslandTransit {
                    id: transit.id.into(),
                    kind: transit.kind,
                    name: transit.name.into(),
                    location: point(transit.lat, transit.lon),
                    island: transit.island,
                    travel_time: transit.travel_time.into(),
                    fare: transit.fare.into(),
                })
            })
            .collect();

        let places = record
            .places
            .into_iter()
            .map(|place| {
                Arc::new(Place {
                    name: place.name.into(),
                    location: point(place.lat, place.lon),
                })
            })
            .collect();

        Ok(Self {
            maxi_stops,
            maxi_routes,
            bus_routes,
            taxi_stands,
            transit_points,
            places,
            route_map,
            classifier: IslandClassifier::default(),
        })
    }

    pub fn classifier(&self) -> &IslandClassifier {
        &self.classifier
    }

    /// Any route by identifier: a band id such as `green`, or `bus-<number>`.
    pub fn route(&self, id: &str) -> Option<Arc<dyn TransitRoute>> {
        self.route_map.get(id).cloned()
    }

    // ---- Collections ----

    pub fn maxi_stops(&self) -> &[Arc<Stop>] {
        &self.maxi_stops
    }

    /// Bands in declaration order.
    pub fn maxi_routes(&self) -> &[Arc<MaxiRoute>] {
        &self.maxi_routes
    }

    pub fn bus_routes(&self) -> &[Arc<BusRoute>] {
        &self.bus_routes
    }

    pub fn taxi_stands(&self) -> &[Arc<TaxiStand>] {
        &self.taxi_stands
    }

    pub fn transit_points(&self) -> &[Arc<InterIslandTransit>] {
        &self.transit_points
    }

    pub fn places(&self) -> &[Arc<Place>] {
        &self.places
    }

    /// All routes of one mode, in declaration order.
    pub fn routes(&self, mode: TransitMode) -> Vec<Arc<dyn TransitRoute>> {
        match mode {
            TransitMode::Maxi => self
                .maxi_routes
                .iter()
                .map(|r| r.clone() as Arc<dyn TransitRoute>)
                .collect(),
            TransitMode::Bus => self
                .bus_routes
                .iter()
                .map(|r| r.clone() as Arc<dyn TransitRoute>)
                .collect(),
        }
    }

    /// Popular places whose name contains `query`, case-insensitively.
    ///
    /// A blank query matches nothing. Surrounding whitespace is otherwise
    /// significant, so `"bay "` does not match `"Maracas Bay"`.
    pub fn search_places(&self, query: &str) -> Vec<Arc<Place>> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let query = query.to_lowercase();

        self.places
            .iter()
            .filter(|place| place.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

fn insert_route(
    map: &mut HashMap<RouteIdentifier, Arc<dyn TransitRoute>>,
    route: Arc<dyn TransitRoute>,
) -> Result<()> {
    let id = route.id().clone();
    if map.insert(id.clone(), route).is_some() {
        return Err(TransitError::InvalidData(format!("duplicate route: {id}")));
    }
    Ok(())
}
