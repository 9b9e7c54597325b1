//! Error types for the Indus Atlas

use thiserror::Error;

/// Top-level error type surfaced at the view-controller boundary
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("Region not found in catalog: {0}")]
    NotFound(String),

    #[error("Failed to resolve region geometry: {0}")]
    RegionResolution(String),

    #[error("Geospatial backend unavailable: {0}")]
    RemoteUnavailable(String),
}

/// Errors reported by a [`GeoDataGateway`](crate::gateway::GeoDataGateway)
/// implementation
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    #[error("Gateway unreachable: {0}")]
    Unreachable(String),

    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Empty geometry for region: {0}")]
    EmptyGeometry(String),

    #[error("Zonal reduction failed: {0}")]
    Reduction(String),
}

impl From<GatewayError> for AtlasError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Unreachable(msg) => AtlasError::RemoteUnavailable(msg),
            GatewayError::UnknownRegion(msg) => AtlasError::RegionResolution(msg),
            GatewayError::EmptyGeometry(msg) => AtlasError::RegionResolution(msg),
            GatewayError::Reduction(msg) => AtlasError::RegionResolution(msg),
        }
    }
}

/// Result type alias for atlas operations
pub type AtlasResult<T> = Result<T, AtlasError>;
