//! Road geometry between two points for drawing on the map.
//!
//! Fetchers report failures as errors. Callers that only need something to
//! draw go through [`route_or_straight_line`], which is the one place the
//! straight-line degradation happens.

use std::future::Future;
use std::pin::Pin;

use geo::Point;

pub mod osrm;
pub mod requests;

pub use osrm::OsrmRouter;
pub use requests::{RouteRequests, RouteTicket};

#[derive(Debug, thiserror::Error)]
pub enum RoadRouteError {
    #[error("routing request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("routing service responded with {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed routing response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("no route found: {0}")]
    NoRoute(String),
}

impl RoadRouteError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            RoadRouteError::Http(_) => true,
            RoadRouteError::Status(status) => status.is_server_error(),
            RoadRouteError::Malformed(_) | RoadRouteError::NoRoute(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, RoadRouteError>;

/// Something that can produce a drivable polyline between two points.
pub trait RoadRouter: Send + Sync {
    fn route<'a>(
        &'a self,
        origin: Point,
        destination: Point,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Point>>> + Send + 'a>>;
}

/// Polyline to draw, and whether it is the straight-line stand-in.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadPath {
    pub points: Vec<Point>,
    pub degraded: bool,
}

impl RoadPath {
    pub fn straight_line(origin: Point, destination: Point) -> Self {
        Self {
            points: vec![origin, destination],
            degraded: true,
        }
    }
}

/// Fetch the road route, or fall back to `[origin, destination]` on any
/// failure.
pub async fn route_or_straight_line(
    router: &dyn RoadRouter,
    origin: Point,
    destination: Point,
) -> RoadPath {
    match router.route(origin, destination).await {
        Ok(points) => RoadPath {
            points,
            degraded: false,
        },
        Err(e) => {
            tracing::warn!("road route unavailable, drawing straight line: {e}");
            RoadPath::straight_line(origin, destination)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRouter(Option<Vec<Point>>);

    impl RoadRouter for FixedRouter {
        fn route<'a>(
            &'a self,
            _origin: Point,
            _destination: Point,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<Point>>> + Send + 'a>> {
            Box::pin(async move {
                self.0
                    .clone()
                    .ok_or_else(|| RoadRouteError::NoRoute("NoRoute".to_string()))
            })
        }
    }

    #[tokio::test]
    async fn test_successful_route_is_not_degraded() {
        let origin = Point::new(-61.5019, 10.6549);
        let middle = Point::new(-61.45, 10.5);
        let destination = Point::new(-61.4651, 10.2799);
        let router = FixedRouter(Some(vec![origin, middle, destination]));

        let path = route_or_straight_line(&router, origin, destination).await;

        assert!(!path.degraded);
        assert_eq!(path.points, vec![origin, middle, destination]);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_straight_line() {
        let origin = Point::new(-61.5019, 10.6549);
        let destination = Point::new(-61.4651, 10.2799);

        let path = route_or_straight_line(&FixedRouter(None), origin, destination).await;

        assert_eq!(path, RoadPath::straight_line(origin, destination));
        assert!(path.degraded);
    }

    #[test]
    fn test_transient_errors() {
        assert!(RoadRouteError::Status(reqwest::StatusCode::BAD_GATEWAY).is_transient());
        assert!(!RoadRouteError::Status(reqwest::StatusCode::BAD_REQUEST).is_transient());
        assert!(!RoadRouteError::NoRoute("NoRoute".into()).is_transient());
    }
}
