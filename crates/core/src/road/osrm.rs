//! Client for the OSRM HTTP route service.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use geo::Point;
use serde::Deserialize;

use crate::config::PlannerConfig;
use crate::road::{Result, RoadRouteError, RoadRouter};

#[derive(Debug, Deserialize)]
struct RouteResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<RouteEntry>,
}

#[derive(Debug, Deserialize)]
struct RouteEntry {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// `[longitude, latitude]` pairs.
    coordinates: Vec<[f64; 2]>,
}

/// Driving routes with full GeoJSON geometry from an OSRM server.
///
/// Each attempt is bounded by the client timeout; transient failures are
/// retried `retries` times before the error is returned.
#[derive(Clone, Debug)]
pub struct OsrmRouter {
    client: reqwest::Client,
    base_url: String,
    retries: u32,
}

impl OsrmRouter {
    pub fn new(base_url: impl Into<String>, timeout: Duration, retries: u32) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            retries,
        })
    }

    pub fn from_config(config: &PlannerConfig) -> Result<Self> {
        Self::new(
            config.osrm_base_url.clone(),
            config.request_timeout(),
            config.retries,
        )
    }

    pub fn route_url(&self, origin: Point, destination: Point) -> String {
        format!(
            "{}/route/v1/driving/{},{};{},{}?overview=full&geometries=geojson",
            self.base_url,
            origin.x(),
            origin.y(),
            destination.x(),
            destination.y()
        )
    }

    /// Fetch the driving polyline from `origin` to `destination`.
    pub async fn fetch_road_route(&self, origin: Point, destination: Point) -> Result<Vec<Point>> {
        let url = self.route_url(origin, destination);
        let mut attempt = 0;

        loop {
            match self.fetch_once(&url).await {
                Ok(points) => return Ok(points),
                Err(e) if e.is_transient() && attempt < self.retries => {
                    attempt += 1;
                    tracing::warn!(attempt, "road route request failed, retrying: {e}");
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<Vec<Point>> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RoadRouteError::Status(status));
        }

        let body = response.bytes().await?;
        parse_route(&body)
    }
}

impl RoadRouter for OsrmRouter {
    fn route<'a>(
        &'a self,
        origin: Point,
        destination: Point,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Point>>> + Send + 'a>> {
        Box::pin(self.fetch_road_route(origin, destination))
    }
}

fn parse_route(body: &[u8]) -> Result<Vec<Point>> {
    let response: RouteResponse = serde_json::from_slice(body)?;

    if response.code != "Ok" {
        let detail = response.message.unwrap_or(response.code);
        return Err(RoadRouteError::NoRoute(detail));
    }

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| RoadRouteError::NoRoute("response contained no routes".to_string()))?;

    if route.geometry.coordinates.is_empty() {
        return Err(RoadRouteError::NoRoute("route has no geometry".to_string()));
    }

    Ok(route
        .geometry
        .coordinates
        .into_iter()
        .map(|[lon, lat]| Point::new(lon, lat))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::Router;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::routing::get;

    use super::*;
    use crate::road::route_or_straight_line;

    const OK_BODY: &str = r#"{
        "code": "Ok",
        "routes": [{
            "geometry": {
                "type": "LineString",
                "coordinates": [[-61.5019, 10.6549], [-61.45, 10.5], [-61.4651, 10.2799]]
            },
            "distance": 45210.3,
            "duration": 2950.1
        }],
        "waypoints": []
    }"#;

    fn origin() -> Point {
        Point::new(-61.5019, 10.6549)
    }

    fn destination() -> Point {
        Point::new(-61.4651, 10.2799)
    }

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn router(base_url: &str, retries: u32) -> OsrmRouter {
        OsrmRouter::new(base_url, Duration::from_secs(2), retries).unwrap()
    }

    #[test]
    fn test_route_url() {
        let router = router("https://router.project-osrm.org/", 1);
        assert_eq!(
            router.route_url(origin(), destination()),
            "https://router.project-osrm.org/route/v1/driving/-61.5019,10.6549;-61.4651,10.2799\
             ?overview=full&geometries=geojson"
        );
    }

    #[test]
    fn test_parse_route_swaps_to_points() {
        let points = parse_route(OK_BODY.as_bytes()).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], origin());
        assert_eq!(points[2], destination());
    }

    #[test]
    fn test_parse_route_errors() {
        let no_route = parse_route(br#"{ "code": "NoRoute", "message": "Impossible route" }"#);
        assert!(matches!(no_route, Err(RoadRouteError::NoRoute(m)) if m == "Impossible route"));

        let empty = parse_route(br#"{ "code": "Ok", "routes": [] }"#);
        assert!(matches!(empty, Err(RoadRouteError::NoRoute(_))));

        let garbage = parse_route(b"<html>busy</html>");
        assert!(matches!(garbage, Err(RoadRouteError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_fetch_from_service() {
        let app = Router::new().route(
            "/route/v1/driving/{coordinates}",
            get(|| async { ([("content-type", "application/json")], OK_BODY) }),
        );
        let base = serve(app).await;

        let points = router(&base, 0)
            .fetch_road_route(origin(), destination())
            .await
            .unwrap();

        assert_eq!(points.len(), 3);
    }

    #[tokio::test]
    async fn test_retries_once_on_server_error() {
        async fn flaky(State(calls): State<Arc<AtomicUsize>>) -> Response {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                StatusCode::SERVICE_UNAVAILABLE.into_response()
            } else {
                OK_BODY.into_response()
            }
        }

        let calls = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/route/v1/driving/{coordinates}", get(flaky))
            .with_state(calls.clone());
        let base = serve(app).await;

        let points = router(&base, 1)
            .fetch_road_route(origin(), destination())
            .await
            .unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_client_errors_are_not_retried() {
        async fn reject(State(calls): State<Arc<AtomicUsize>>) -> Response {
            calls.fetch_add(1, Ordering::SeqCst);
            StatusCode::BAD_REQUEST.into_response()
        }

        let calls = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/route/v1/driving/{coordinates}", get(reject))
            .with_state(calls.clone());
        let base = serve(app).await;

        let result = router(&base, 1).fetch_road_route(origin(), destination()).await;

        assert!(matches!(
            result,
            Err(RoadRouteError::Status(status)) if status == StatusCode::BAD_REQUEST
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_raises_and_caller_falls_back() {
        let router = router("http://127.0.0.1:1", 1);

        let result = router.fetch_road_route(origin(), destination()).await;
        assert!(matches!(result, Err(RoadRouteError::Http(_))));

        let path = route_or_straight_line(&router, origin(), destination()).await;
        assert!(path.degraded);
        assert_eq!(path.points, vec![origin(), destination()]);
    }
}
