//! Area-statistics pipeline
//!
//! The one computation this system owns: clip a classified raster to a
//! region's boundary, aggregate true ground area per class via the
//! gateway's zonal reducer, and normalize into a
//! [`ClassAreaDistribution`] ready for charting.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::classes::SusceptibilityClass;
use crate::distribution::ClassAreaDistribution;
use crate::error::{AtlasError, AtlasResult};
use crate::gateway::{GeoDataGateway, RasterRef};
use crate::geometry::Polygon;
use crate::region::Region;

/// Default nominal reduction scale in meters
pub const DEFAULT_SCALE_M: f64 = 30.0;

/// Distribution plus the resolved boundary it was computed over
///
/// The polygon rides along so the caller can clip the map layer and
/// fit the camera without a second geometry round-trip.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionStats {
    pub distribution: ClassAreaDistribution,
    pub polygon: Polygon,
}

/// The region-selection → area-statistics pipeline
///
/// Pure function of its inputs apart from the idempotent remote query;
/// identical inputs always yield identical output.
#[derive(Clone)]
pub struct AreaStats {
    gateway: Arc<dyn GeoDataGateway>,
    scale_m: f64,
}

impl AreaStats {
    pub fn new(gateway: Arc<dyn GeoDataGateway>, scale_m: f64) -> Self {
        Self { gateway, scale_m }
    }

    pub fn with_default_scale(gateway: Arc<dyn GeoDataGateway>) -> Self {
        Self::new(gateway, DEFAULT_SCALE_M)
    }

    /// Resolve the region boundary and reduce the clipped raster to a
    /// per-class area distribution
    pub async fn compute(&self, raster: &RasterRef, region: &Region) -> AtlasResult<RegionStats> {
        let polygon = self.gateway.geometry(&region.name, region.level).await?;
        if polygon.is_empty() {
            return Err(AtlasError::RegionResolution(region.name.clone()));
        }

        let areas = self
            .gateway
            .zonal_class_areas(raster, &polygon, self.scale_m)
            .await?;
        debug!(region = %region.name, raster = raster.id(), classes = areas.len(),
            "zonal reduction complete");

        let mut by_class = [0.0f64; 5];
        for (value, area_km2) in areas {
            match SusceptibilityClass::from_class_value(value) {
                Some(class) => by_class[class.index()] += area_km2,
                None => {
                    warn!(class_value = value, region = %region.name,
                        "dropping out-of-range class value from zonal reduction");
                }
            }
        }

        Ok(RegionStats {
            distribution: ClassAreaDistribution::from_areas(by_class),
            polygon,
        })
    }

    /// Contract form of the pipeline: distribution only
    pub async fn compute_distribution(
        &self,
        raster: &RasterRef,
        region: &Region,
    ) -> AtlasResult<ClassAreaDistribution> {
        Ok(self.compute(raster, region).await?.distribution)
    }
}
