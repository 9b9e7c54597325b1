//! Gateway trait for the hosted geospatial backend
//!
//! The atlas never talks to raster or vector data directly; everything
//! goes through [`GeoDataGateway`], the single external collaborator.
//! Implementations live elsewhere (`indus-gateway` ships the bundled
//! synthetic backend, `MockGateway` in this crate covers tests).

use std::collections::BTreeMap;

use async_trait::async_trait;
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;
use crate::geometry::Polygon;
use crate::region::AdminLevel;

/// Identifier for a hosted classified raster asset
#[derive(Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{title}")]
pub struct RasterRef {
    id: String,
    title: String,
}

impl RasterRef {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into() }
    }

    /// The gradient-boosting model shown by default
    pub fn primary_model() -> Self {
        Self::new("fsm_pk_lgbm", "FSM LGBM")
    }

    /// The alternate model, present but hidden at startup
    pub fn secondary_model() -> Self {
        Self::new("fsm_pk_xgboost", "FSM XGBoost")
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Interface to the external geospatial data/compute store
///
/// All methods are idempotent and safely retryable; the gateway may
/// apply best-effort geometry simplification or reduction coarsening
/// for performance.
///
/// # Errors
///
/// Methods return [`GatewayError::Unreachable`] when the backend cannot
/// be reached, [`GatewayError::UnknownRegion`] for names absent from
/// the store, and [`GatewayError::EmptyGeometry`] when a region
/// resolves to nothing usable.
#[async_trait]
pub trait GeoDataGateway: Send + Sync {
    /// Province names in provider order (order is user-visible)
    async fn province_names(&self) -> Result<Vec<String>, GatewayError>;

    /// District names within a province, in provider order
    async fn district_names(&self, province: &str) -> Result<Vec<String>, GatewayError>;

    /// Boundary polygon for a named region at the given admin level
    async fn geometry(&self, region_name: &str, level: AdminLevel)
        -> Result<Polygon, GatewayError>;

    /// Area-weighted zonal reduction: for every distinct class value of
    /// `raster` clipped to `polygon`, the summed true ground area in
    /// km² at a nominal `scale_m` pixel spacing
    async fn zonal_class_areas(
        &self,
        raster: &RasterRef,
        polygon: &Polygon,
        scale_m: f64,
    ) -> Result<BTreeMap<i32, f64>, GatewayError>;
}
