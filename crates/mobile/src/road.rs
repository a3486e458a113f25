use std::sync::Arc;

use liming_core::config::PlannerConfig;
use liming_core::road::{OsrmRouter, RoadRouter, RouteRequests, route_or_straight_line};

use crate::error::MobileError;
use crate::records::{Coordinate, RoadPathInfo};

/// Road geometry for the event detail map.
///
/// Holds one HTTP client for its lifetime. Only the most recent `road_path`
/// call delivers a result; earlier ones resolve to `None`.
#[derive(uniffi::Object)]
pub struct RoadRouteService {
    router: Arc<dyn RoadRouter>,
    requests: RouteRequests,
}

impl RoadRouteService {
    pub(crate) fn with_router(router: Arc<dyn RoadRouter>) -> Self {
        Self {
            router,
            requests: RouteRequests::new(),
        }
    }
}

#[uniffi::export(async_runtime = "tokio")]
impl RoadRouteService {
    /// `config_json` may override any [`PlannerConfig`] key; `None` uses the
    /// defaults.
    #[uniffi::constructor]
    pub fn new(config_json: Option<String>) -> Result<Arc<Self>, MobileError> {
        let config = match config_json {
            Some(json) => PlannerConfig::from_json(&json)
                .map_err(|e| MobileError::Config(e.to_string()))?,
            None => PlannerConfig::default(),
        };
        let router = OsrmRouter::from_config(&config)?;

        Ok(Arc::new(Self::with_router(Arc::new(router))))
    }

    /// Driving route between two points. Fails if the routing service does.
    pub async fn fetch_road_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Vec<Coordinate>, MobileError> {
        let points = self.router.route(origin.into(), destination.into()).await?;
        Ok(points.into_iter().map(Coordinate::from).collect())
    }

    /// Path to draw for `event_id`, falling back to a straight line.
    ///
    /// Returns `None` when a newer request has started in the meantime.
    pub async fn road_path(
        &self,
        event_id: String,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Option<RoadPathInfo> {
        let ticket = self.requests.begin(event_id);
        let path =
            route_or_straight_line(self.router.as_ref(), origin.into(), destination.into()).await;

        self.requests.settle(&ticket, path).map(RoadPathInfo::from)
    }

    /// Drop the in-flight `road_path` result, e.g. when the detail sheet
    /// closes.
    pub fn cancel(&self) {
        self.requests.cancel();
    }
}
