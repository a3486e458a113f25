use liming_core::road::RoadRouteError;

#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum MobileError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    RoadRoute(String),
}

impl From<RoadRouteError> for MobileError {
    fn from(e: RoadRouteError) -> Self {
        MobileError::RoadRoute(e.to_string())
    }
}
