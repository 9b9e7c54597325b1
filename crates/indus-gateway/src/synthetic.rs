//! Production-shaped gateway over the bundled dataset
//!
//! Implements [`GeoDataGateway`] with the embedded boundary hierarchy
//! and the synthetic susceptibility field. The zonal reduction is the
//! real thing: an area-weighted grid walk over the clip polygon, with
//! best-effort coarsening when the requested scale would exceed the
//! cell budget.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use indus_core::{AdminLevel, GatewayError, GeoDataGateway, LonLat, Polygon, RasterRef};
use tracing::debug;

use crate::dataset::{Dataset, DatasetError};
use crate::field;

/// Meters per degree of latitude (and of longitude at the equator)
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Default cap on grid cells per reduction
const DEFAULT_CELL_BUDGET: usize = 250_000;

/// In-process gateway backed by the bundled dataset
pub struct SyntheticGateway {
    dataset: Dataset,
    latency: Option<Duration>,
    cell_budget: usize,
}

impl SyntheticGateway {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset, latency: None, cell_budget: DEFAULT_CELL_BUDGET }
    }

    /// Gateway over the embedded Pakistan dataset
    pub fn bundled() -> Result<Self, DatasetError> {
        Ok(Self::new(Dataset::bundled()?))
    }

    /// Add a simulated round-trip delay, for UI realism
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Override the reduction cell budget
    pub fn with_cell_budget(mut self, cell_budget: usize) -> Self {
        self.cell_budget = cell_budget.max(1);
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    async fn simulate_round_trip(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl GeoDataGateway for SyntheticGateway {
    async fn province_names(&self) -> Result<Vec<String>, GatewayError> {
        self.simulate_round_trip().await;
        Ok(self.dataset.province_names())
    }

    async fn district_names(&self, province: &str) -> Result<Vec<String>, GatewayError> {
        self.simulate_round_trip().await;
        self.dataset
            .district_names(province)
            .ok_or_else(|| GatewayError::UnknownRegion(province.to_string()))
    }

    async fn geometry(
        &self,
        region_name: &str,
        level: AdminLevel,
    ) -> Result<Polygon, GatewayError> {
        self.simulate_round_trip().await;
        let polygon = self
            .dataset
            .geometry(region_name, level)
            .ok_or_else(|| GatewayError::UnknownRegion(region_name.to_string()))?;
        if polygon.is_empty() {
            return Err(GatewayError::EmptyGeometry(region_name.to_string()));
        }
        Ok(polygon)
    }

    async fn zonal_class_areas(
        &self,
        raster: &RasterRef,
        polygon: &Polygon,
        scale_m: f64,
    ) -> Result<BTreeMap<i32, f64>, GatewayError> {
        self.simulate_round_trip().await;
        let bbox = polygon
            .bbox()
            .ok_or_else(|| GatewayError::EmptyGeometry("clip polygon".to_string()))?;

        // Best-effort coarsening: double the scale until the grid over
        // the bbox fits the cell budget.
        let mut scale = scale_m.max(1.0);
        loop {
            let step_deg = scale / METERS_PER_DEGREE;
            let cells = (bbox.width() / step_deg).ceil() * (bbox.height() / step_deg).ceil();
            if cells as usize <= self.cell_budget {
                break;
            }
            scale *= 2.0;
        }
        if scale != scale_m {
            debug!(requested_m = scale_m, effective_m = scale, raster = raster.id(),
                "coarsened zonal reduction to fit cell budget");
        }

        let step_deg = scale / METERS_PER_DEGREE;
        let mut areas: BTreeMap<i32, f64> = BTreeMap::new();
        let mut lat = bbox.south + step_deg / 2.0;
        while lat < bbox.north {
            // True ground area per cell shrinks with latitude.
            let cell_km2 = (scale * scale) / 1e6 * lat.to_radians().cos();
            let mut lon = bbox.west + step_deg / 2.0;
            while lon < bbox.east {
                let point = LonLat::new(lon, lat);
                if polygon.contains(&point) {
                    let class = field::class_at(raster.id(), &point);
                    *areas.entry(class).or_insert(0.0) += cell_km2;
                }
                lon += step_deg;
            }
            lat += step_deg;
        }
        Ok(areas)
    }
}
