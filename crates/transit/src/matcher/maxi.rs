//! Best single-band maxi-taxi match.

use geo::Point;

use crate::catalog::TransitCatalog;
use crate::models::types::MaxiRouteInfo;
use crate::spatial::queries::nearest;

/// Find one band that carries a rider from `origin` to `destination`.
///
/// Both endpoints snap to their nearest stop in the full maxi stop catalog.
/// The first band (declaration order) listing both stop names wins. Returns
/// `None` when no single band serves both stops; transfers between bands and
/// inter-island trips are not attempted.
pub fn find_best_maxi_match(
    catalog: &TransitCatalog,
    origin: Point,
    destination: Point,
) -> Option<MaxiRouteInfo> {
    let boarding = nearest(origin, catalog.maxi_stops())?;
    let alighting = nearest(destination, catalog.maxi_stops())?;

    let route = catalog
        .maxi_routes()
        .iter()
        .find(|route| route.serves(&boarding.item.name) && route.serves(&alighting.item.name));

    let Some(route) = route else {
        tracing::debug!(
            from = %boarding.item.name,
            to = %alighting.item.name,
            "no maxi band connects stops"
        );
        return None;
    };

    tracing::debug!(
        band = %route.id,
        from = %boarding.item.name,
        to = %alighting.item.name,
        "matched maxi band"
    );

    Some(MaxiRouteInfo {
        route: route.clone(),
        from_stop: boarding.item.name.clone(),
        to_stop: alighting.item.name.clone(),
        distance_to_start: boarding.distance_km,
        distance_from_end: alighting.distance_km,
    })
}
