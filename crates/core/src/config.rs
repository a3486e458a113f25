use std::time::Duration;

use liming_transit::matcher::{DEFAULT_PROXIMITY_DEGREES, TransitPointPreference};
use serde::Deserialize;

/// Tunables for itinerary planning and road routing.
///
/// Every field has a default, so a host only needs to send the keys it wants
/// to change.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Base URL of the OSRM-compatible routing service.
    pub osrm_base_url: String,
    pub request_timeout_secs: u64,
    /// Extra attempts after a transient road-route failure.
    pub retries: u32,
    /// Route-stop radius around each endpoint, in degrees.
    pub proximity_degrees: f64,
    /// Last-mile legs longer than this (km) produce an advisory.
    pub last_mile_advisory_km: f64,
    pub taxi_stand_limit: usize,
    pub transit_point_preference: TransitPointPreference,
}

impl PlannerConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            osrm_base_url: "https://router.project-osrm.org".to_string(),
            request_timeout_secs: 10,
            retries: 1,
            proximity_degrees: DEFAULT_PROXIMITY_DEGREES,
            last_mile_advisory_km: 1.0,
            taxi_stand_limit: 3,
            transit_point_preference: TransitPointPreference::Airport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PlannerConfig::from_json(
            r#"{ "retries": 0, "transit_point_preference": "ferry" }"#,
        )
        .unwrap();

        assert_eq!(config.retries, 0);
        assert_eq!(config.transit_point_preference, TransitPointPreference::Ferry);
        assert_eq!(config.taxi_stand_limit, 3);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(PlannerConfig::from_json("{}").unwrap(), PlannerConfig::default());
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(PlannerConfig::from_json(r#"{ "retries": "twice" }"#).is_err());
    }
}
