//! Administrative regions and the session catalog

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AtlasError, AtlasResult};
use crate::gateway::GeoDataGateway;

/// Administrative hierarchy depth
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdminLevel {
    Country,
    Province,
    District,
}

impl AdminLevel {
    pub fn display_name(&self) -> &'static str {
        match self {
            AdminLevel::Country => "Country",
            AdminLevel::Province => "Province",
            AdminLevel::District => "District",
        }
    }
}

impl fmt::Display for AdminLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An administrative unit in the country/province/district hierarchy
///
/// Names are unique within their parent level. A district's parent is
/// its province; a province's parent is the country. Regions are
/// populated from the gateway and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub level: AdminLevel,
    pub parent: Option<String>,
}

impl Region {
    pub fn country(name: impl Into<String>) -> Self {
        Self { name: name.into(), level: AdminLevel::Country, parent: None }
    }

    pub fn province(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: AdminLevel::Province,
            parent: Some(country.into()),
        }
    }

    pub fn district(name: impl Into<String>, province: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: AdminLevel::District,
            parent: Some(province.into()),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.level)
    }
}

/// Name of the single country-level region
pub const COUNTRY_NAME: &str = "Pakistan";

/// Read-only hierarchy of province and district names for the session
///
/// The province list is fetched exactly once at construction and keeps
/// the provider's order. Districts are fetched lazily on the first
/// request for a province and cached for the rest of the session, so
/// the full province x district cross product is never loaded up front.
pub struct RegionCatalog {
    gateway: Arc<dyn GeoDataGateway>,
    provinces: Vec<Region>,
    districts: DashMap<String, Vec<Region>>,
}

impl std::fmt::Debug for RegionCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionCatalog")
            .field("provinces", &self.provinces)
            .field("districts", &self.districts)
            .finish_non_exhaustive()
    }
}

impl RegionCatalog {
    /// Fetch the province list and build the catalog
    pub async fn bootstrap(gateway: Arc<dyn GeoDataGateway>) -> AtlasResult<Self> {
        let names = gateway.province_names().await?;
        debug!(count = names.len(), "loaded province catalog");
        let provinces = names
            .into_iter()
            .map(|name| Region::province(name, COUNTRY_NAME))
            .collect();
        Ok(Self { gateway, provinces, districts: DashMap::new() })
    }

    /// Provinces in provider order
    pub fn provinces(&self) -> &[Region] {
        &self.provinces
    }

    /// Look up a province by name
    pub fn province(&self, name: &str) -> AtlasResult<Region> {
        self.provinces
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .ok_or_else(|| AtlasError::NotFound(name.to_string()))
    }

    /// Districts of a province, lazily fetched then cached
    pub async fn districts(&self, province: &Region) -> AtlasResult<Vec<Region>> {
        if province.level != AdminLevel::Province
            || !self.provinces.iter().any(|p| p.name == province.name)
        {
            return Err(AtlasError::NotFound(province.name.clone()));
        }
        if let Some(cached) = self.districts.get(&province.name) {
            return Ok(cached.clone());
        }
        let names = self.gateway.district_names(&province.name).await?;
        debug!(province = %province.name, count = names.len(), "loaded district list");
        let districts: Vec<Region> = names
            .into_iter()
            .map(|name| Region::district(name, province.name.clone()))
            .collect();
        self.districts.insert(province.name.clone(), districts.clone());
        Ok(districts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_gateway::MockGateway;

    fn catalog_gateway() -> Arc<MockGateway> {
        let gw = MockGateway::new();
        gw.add_province("Punjab");
        gw.add_province("Sindh");
        gw.add_district("Punjab", "Lahore");
        gw.add_district("Punjab", "Multan");
        gw.add_district("Sindh", "Karachi");
        Arc::new(gw)
    }

    #[tokio::test]
    async fn test_provinces_keep_provider_order() {
        let catalog = RegionCatalog::bootstrap(catalog_gateway()).await.unwrap();
        let names: Vec<_> = catalog.provinces().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Punjab", "Sindh"]);
        for p in catalog.provinces() {
            assert_eq!(p.level, AdminLevel::Province);
            assert_eq!(p.parent.as_deref(), Some(COUNTRY_NAME));
        }
    }

    #[tokio::test]
    async fn test_districts_belong_to_their_province() {
        let catalog = RegionCatalog::bootstrap(catalog_gateway()).await.unwrap();
        for province in catalog.provinces().to_vec() {
            let districts = catalog.districts(&province).await.unwrap();
            assert!(!districts.is_empty());
            for d in districts {
                assert_eq!(d.level, AdminLevel::District);
                assert_eq!(d.parent.as_deref(), Some(province.name.as_str()));
            }
        }
    }

    #[tokio::test]
    async fn test_districts_fetched_once_per_province() {
        let gateway = catalog_gateway();
        let catalog = RegionCatalog::bootstrap(gateway.clone()).await.unwrap();
        let punjab = catalog.province("Punjab").unwrap();

        assert_eq!(gateway.district_calls(), 0);
        catalog.districts(&punjab).await.unwrap();
        catalog.districts(&punjab).await.unwrap();
        catalog.districts(&punjab).await.unwrap();
        assert_eq!(gateway.district_calls(), 1);
    }

    #[tokio::test]
    async fn test_unknown_province_is_not_found() {
        let catalog = RegionCatalog::bootstrap(catalog_gateway()).await.unwrap();
        assert!(matches!(catalog.province("Atlantis"), Err(AtlasError::NotFound(_))));

        let phantom = Region::province("Atlantis", COUNTRY_NAME);
        let err = catalog.districts(&phantom).await.unwrap_err();
        assert!(matches!(err, AtlasError::NotFound(_)));

        // A district passed where a province is expected is also a miss.
        let district = Region::district("Lahore", "Punjab");
        let err = catalog.districts(&district).await.unwrap_err();
        assert!(matches!(err, AtlasError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unreachable_gateway_at_bootstrap() {
        let gw = MockGateway::new();
        gw.set_unreachable(true);
        let err = RegionCatalog::bootstrap(Arc::new(gw)).await.unwrap_err();
        assert!(matches!(err, AtlasError::RemoteUnavailable(_)));
    }
}
