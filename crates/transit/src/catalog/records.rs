//! Serialized form of the reference catalog.
//!
//! These records mirror the JSON layout one-to-one and are only used while
//! building a [`TransitCatalog`](super::TransitCatalog).

use serde::Deserialize;

use crate::island::Island;
use crate::models::types::TransitPointKind;

#[derive(Debug, Deserialize)]
pub struct CatalogRecord {
    pub maxi_stops: Vec<NamedPointRecord>,
    pub maxi_routes: Vec<MaxiRouteRecord>,
    pub bus_routes: Vec<BusRouteRecord>,
    #[serde(default)]
    pub taxi_stands: Vec<TaxiStandRecord>,
    #[serde(default)]
    pub transit_points: Vec<TransitPointRecord>,
    #[serde(default)]
    pub places: Vec<NamedPointRecord>,
}

#[derive(Debug, Deserialize)]
pub struct NamedPointRecord {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub struct MaxiRouteRecord {
    pub id: String,
    pub color: String,
    pub color_code: String,
    pub description: String,
    pub stops: Vec<String>,
    #[serde(default)]
    pub fare: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BusStopRecord {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub struct BusRouteRecord {
    pub number: String,
    pub name: String,
    pub color: String,
    pub stops: Vec<BusStopRecord>,
}

#[derive(Debug, Deserialize)]
pub struct TaxiStandRecord {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub destinations: Vec<String>,
    pub estimated_wait: String,
}

#[derive(Debug, Deserialize)]
pub struct TransitPointRecord {
    pub id: String,
    pub kind: TransitPointKind,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub island: Island,
    pub travel_time: String,
    pub fare: String,
}
