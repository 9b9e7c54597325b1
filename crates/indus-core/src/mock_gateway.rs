//! Mock gateway implementation for testing
//!
//! Provides an in-memory [`GeoDataGateway`] so catalog, pipeline, and
//! controller logic can be tested without a real geospatial backend.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use indus_core::{MockGateway, GeoDataGateway, RasterRef};
//!
//! let gw = MockGateway::new();
//! gw.add_province("Punjab");
//! gw.add_district("Punjab", "Lahore");
//! gw.set_geometry("Lahore", Polygon::rect(BBox::new(74.1, 31.2, 74.6, 31.7)));
//! gw.set_zonal(&RasterRef::primary_model(), "Lahore", [(1, 120.0), (5, 30.0)]);
//! ```

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::GatewayError;
use crate::gateway::{GeoDataGateway, RasterRef};
use crate::geometry::Polygon;
use crate::region::AdminLevel;

/// Scriptable in-memory gateway
///
/// Region names key the tables directly; geometries registered via
/// [`set_geometry`](MockGateway::set_geometry) are matched back to
/// their name when a zonal reduction is requested, mirroring how the
/// real backend resolves a clip polygon to stored assets.
#[derive(Default)]
pub struct MockGateway {
    provinces: Mutex<Vec<String>>,
    districts: DashMap<String, Vec<String>>,
    geometries: DashMap<String, Polygon>,
    /// Keyed by (raster id, region name)
    zonal: DashMap<(String, String), BTreeMap<i32, f64>>,
    unreachable: AtomicBool,
    district_calls: AtomicUsize,
    geometry_calls: AtomicUsize,
    zonal_calls: AtomicUsize,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a province; order of calls is the provider order
    pub fn add_province(&self, name: &str) {
        self.provinces.lock().unwrap().push(name.to_string());
    }

    /// Register a district under a province; order of calls per
    /// province is the provider order
    pub fn add_district(&self, province: &str, name: &str) {
        self.districts
            .entry(province.to_string())
            .or_default()
            .push(name.to_string());
    }

    /// Register the boundary polygon for a named region
    pub fn set_geometry(&self, region_name: &str, polygon: Polygon) {
        self.geometries.insert(region_name.to_string(), polygon);
    }

    /// Script the zonal reduction result for (raster, region)
    pub fn set_zonal<I>(&self, raster: &RasterRef, region_name: &str, areas: I)
    where
        I: IntoIterator<Item = (i32, f64)>,
    {
        self.zonal.insert(
            (raster.id().to_string(), region_name.to_string()),
            areas.into_iter().collect(),
        );
    }

    /// Make every call fail with [`GatewayError::Unreachable`]
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    pub fn district_calls(&self) -> usize {
        self.district_calls.load(Ordering::SeqCst)
    }

    pub fn geometry_calls(&self) -> usize {
        self.geometry_calls.load(Ordering::SeqCst)
    }

    pub fn zonal_calls(&self) -> usize {
        self.zonal_calls.load(Ordering::SeqCst)
    }

    fn check_reachable(&self) -> Result<(), GatewayError> {
        if self.unreachable.load(Ordering::SeqCst) {
            Err(GatewayError::Unreachable("mock gateway offline".to_string()))
        } else {
            Ok(())
        }
    }

    fn region_name_for(&self, polygon: &Polygon) -> Option<String> {
        self.geometries
            .iter()
            .find(|entry| entry.value() == polygon)
            .map(|entry| entry.key().clone())
    }
}

#[async_trait]
impl GeoDataGateway for MockGateway {
    async fn province_names(&self) -> Result<Vec<String>, GatewayError> {
        self.check_reachable()?;
        Ok(self.provinces.lock().unwrap().clone())
    }

    async fn district_names(&self, province: &str) -> Result<Vec<String>, GatewayError> {
        self.check_reachable()?;
        self.district_calls.fetch_add(1, Ordering::SeqCst);
        self.districts
            .get(province)
            .map(|d| d.value().clone())
            .ok_or_else(|| GatewayError::UnknownRegion(province.to_string()))
    }

    async fn geometry(
        &self,
        region_name: &str,
        _level: AdminLevel,
    ) -> Result<Polygon, GatewayError> {
        self.check_reachable()?;
        self.geometry_calls.fetch_add(1, Ordering::SeqCst);
        let polygon = self
            .geometries
            .get(region_name)
            .map(|g| g.value().clone())
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
        _scale_m: f64,
    ) -> Result<BTreeMap<i32, f64>, GatewayError> {
        self.check_reachable()?;
        self.zonal_calls.fetch_add(1, Ordering::SeqCst);
        let region = self.region_name_for(polygon).ok_or_else(|| {
            GatewayError::Reduction("clip polygon matches no stored region".to_string())
        })?;
        self.zonal
            .get(&(raster.id().to_string(), region.clone()))
            .map(|areas| areas.value().clone())
            .ok_or_else(|| GatewayError::Reduction(format!("no raster data over {region}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BBox;

    #[tokio::test]
    async fn test_scripted_tables() {
        let gw = MockGateway::new();
        gw.add_province("Sindh");
        gw.add_province("Punjab");
        gw.add_district("Punjab", "Lahore");
        gw.set_geometry("Lahore", Polygon::rect(BBox::new(74.1, 31.2, 74.6, 31.7)));
        gw.set_zonal(&RasterRef::primary_model(), "Lahore", [(1, 10.0), (2, 5.0)]);

        // Registration order, not alphabetic.
        assert_eq!(gw.province_names().await.unwrap(), vec!["Sindh", "Punjab"]);
        assert_eq!(gw.district_names("Punjab").await.unwrap(), vec!["Lahore"]);

        let poly = gw.geometry("Lahore", AdminLevel::District).await.unwrap();
        let areas = gw
            .zonal_class_areas(&RasterRef::primary_model(), &poly, 30.0)
            .await
            .unwrap();
        assert_eq!(areas.get(&1), Some(&10.0));
        assert_eq!(areas.len(), 2);
    }

    #[tokio::test]
    async fn test_unreachable_toggle() {
        let gw = MockGateway::new();
        gw.add_province("Punjab");
        gw.set_unreachable(true);
        assert!(matches!(
            gw.province_names().await,
            Err(GatewayError::Unreachable(_))
        ));
        gw.set_unreachable(false);
        assert!(gw.province_names().await.is_ok());
    }

    #[tokio::test]
    async fn test_empty_geometry_reported() {
        let gw = MockGateway::new();
        gw.set_geometry("Nowhere", Polygon::new(vec![]));
        assert!(matches!(
            gw.geometry("Nowhere", AdminLevel::District).await,
            Err(GatewayError::EmptyGeometry(_))
        ));
    }
}
