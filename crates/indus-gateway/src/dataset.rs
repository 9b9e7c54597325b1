//! Bundled administrative-boundary dataset
//!
//! A coarse country/province/district hierarchy for Pakistan embedded
//! as JSON. Province rings are low-vertex polygons; districts carry
//! bounding boxes, which is enough for the camera fit and the zonal
//! grid walk. Authoring order in the JSON is the provider order the UI
//! shows.

use indus_core::{AdminLevel, BBox, LonLat, Polygon};
use serde::Deserialize;
use thiserror::Error;

const BUNDLED_JSON: &str = include_str!("../assets/pakistan_admin.json");

/// Errors raised while loading or validating the dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Dataset parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Region {0} has a degenerate boundary ring")]
    EmptyRing(String),

    #[error("District {0} has an inverted bounding box")]
    InvalidBBox(String),

    #[error("Duplicate region name: {0}")]
    DuplicateName(String),
}

#[derive(Debug, Deserialize)]
struct CountryRecord {
    name: String,
    ring: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
struct DistrictRecord {
    name: String,
    bbox: [f64; 4],
}

#[derive(Debug, Deserialize)]
struct ProvinceRecord {
    name: String,
    ring: Vec<[f64; 2]>,
    districts: Vec<DistrictRecord>,
}

#[derive(Debug, Deserialize)]
struct DatasetRecord {
    country: CountryRecord,
    provinces: Vec<ProvinceRecord>,
}

/// A district entry: name plus bounding-box geometry
#[derive(Debug, Clone)]
pub struct DistrictEntry {
    pub name: String,
    pub bbox: BBox,
}

/// A province entry: name, boundary ring, and its districts
#[derive(Debug, Clone)]
pub struct ProvinceEntry {
    pub name: String,
    pub polygon: Polygon,
    pub districts: Vec<DistrictEntry>,
}

/// The validated in-memory dataset
#[derive(Debug, Clone)]
pub struct Dataset {
    country_name: String,
    country_polygon: Polygon,
    provinces: Vec<ProvinceEntry>,
}

fn ring_to_polygon(name: &str, ring: &[[f64; 2]]) -> Result<Polygon, DatasetError> {
    if ring.len() < 3 {
        return Err(DatasetError::EmptyRing(name.to_string()));
    }
    Ok(Polygon::new(
        ring.iter().map(|[lon, lat]| LonLat::new(*lon, *lat)).collect(),
    ))
}

impl Dataset {
    /// Parse and validate the embedded dataset
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let record: DatasetRecord = serde_json::from_str(json)?;
        let country_polygon = ring_to_polygon(&record.country.name, &record.country.ring)?;

        let mut provinces = Vec::with_capacity(record.provinces.len());
        for province in &record.provinces {
            if provinces.iter().any(|p: &ProvinceEntry| p.name == province.name) {
                return Err(DatasetError::DuplicateName(province.name.clone()));
            }
            let polygon = ring_to_polygon(&province.name, &province.ring)?;
            let mut districts = Vec::with_capacity(province.districts.len());
            for district in &province.districts {
                let [west, south, east, north] = district.bbox;
                if west >= east || south >= north {
                    return Err(DatasetError::InvalidBBox(district.name.clone()));
                }
                if districts.iter().any(|d: &DistrictEntry| d.name == district.name) {
                    return Err(DatasetError::DuplicateName(district.name.clone()));
                }
                districts.push(DistrictEntry {
                    name: district.name.clone(),
                    bbox: BBox::new(west, south, east, north),
                });
            }
            provinces.push(ProvinceEntry {
                name: province.name.clone(),
                polygon,
                districts,
            });
        }

        Ok(Self {
            country_name: record.country.name,
            country_polygon,
            provinces,
        })
    }

    pub fn country_name(&self) -> &str {
        &self.country_name
    }

    pub fn country_polygon(&self) -> &Polygon {
        &self.country_polygon
    }

    /// Provinces in authoring order
    pub fn provinces(&self) -> &[ProvinceEntry] {
        &self.provinces
    }

    pub fn province_names(&self) -> Vec<String> {
        self.provinces.iter().map(|p| p.name.clone()).collect()
    }

    pub fn district_names(&self, province: &str) -> Option<Vec<String>> {
        self.provinces
            .iter()
            .find(|p| p.name == province)
            .map(|p| p.districts.iter().map(|d| d.name.clone()).collect())
    }

    /// Boundary polygon for a named region at the given level
    pub fn geometry(&self, region_name: &str, level: AdminLevel) -> Option<Polygon> {
        match level {
            AdminLevel::Country => {
                (region_name == self.country_name).then(|| self.country_polygon.clone())
            }
            AdminLevel::Province => self
                .provinces
                .iter()
                .find(|p| p.name == region_name)
                .map(|p| p.polygon.clone()),
            AdminLevel::District => self
                .provinces
                .iter()
                .flat_map(|p| &p.districts)
                .find(|d| d.name == region_name)
                .map(|d| Polygon::rect(d.bbox)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_loads() {
        let dataset = Dataset::bundled().unwrap();
        assert_eq!(dataset.country_name(), "Pakistan");
        assert_eq!(dataset.provinces().len(), 7);
        assert!(!dataset.country_polygon().is_empty());
    }

    #[test]
    fn test_province_order_matches_authoring_order() {
        let dataset = Dataset::bundled().unwrap();
        assert_eq!(
            dataset.province_names(),
            vec![
                "Azad Kashmir",
                "Balochistan",
                "Gilgit Baltistan",
                "Islamabad",
                "Khyber Pakhtunkhwa",
                "Punjab",
                "Sindh",
            ]
        );
    }

    #[test]
    fn test_every_district_resolves_within_its_province() {
        let dataset = Dataset::bundled().unwrap();
        for province in dataset.provinces() {
            assert!(!province.districts.is_empty(), "{} has no districts", province.name);
            let province_bbox = province.polygon.bbox().unwrap().padded(0.2);
            for district in &province.districts {
                // District geometry resolves through the lookup path.
                let polygon = dataset
                    .geometry(&district.name, AdminLevel::District)
                    .unwrap();
                assert!(!polygon.is_empty());
                // And sits roughly inside its parent province.
                assert!(
                    province_bbox.contains(&district.bbox.center()),
                    "{} is outside {}",
                    district.name,
                    province.name
                );
            }
        }
    }

    #[test]
    fn test_punjab_districts_include_lahore() {
        let dataset = Dataset::bundled().unwrap();
        let districts = dataset.district_names("Punjab").unwrap();
        assert!(districts.contains(&"Lahore".to_string()));
        assert!(dataset.district_names("Atlantis").is_none());
    }

    #[test]
    fn test_degenerate_ring_rejected() {
        let json = r#"{
            "country": { "name": "X", "ring": [[0.0, 0.0], [1.0, 1.0]] },
            "provinces": []
        }"#;
        assert!(matches!(
            Dataset::from_json(json),
            Err(DatasetError::EmptyRing(_))
        ));
    }

    #[test]
    fn test_inverted_bbox_rejected() {
        let json = r#"{
            "country": { "name": "X", "ring": [[0.0, 0.0], [2.0, 0.0], [1.0, 2.0]] },
            "provinces": [{
                "name": "P",
                "ring": [[0.0, 0.0], [2.0, 0.0], [1.0, 2.0]],
                "districts": [{ "name": "D", "bbox": [1.0, 1.0, 0.5, 2.0] }]
            }]
        }"#;
        assert!(matches!(
            Dataset::from_json(json),
            Err(DatasetError::InvalidBBox(_))
        ));
    }

    #[test]
    fn test_duplicate_province_rejected() {
        let json = r#"{
            "country": { "name": "X", "ring": [[0.0, 0.0], [2.0, 0.0], [1.0, 2.0]] },
            "provinces": [
                { "name": "P", "ring": [[0.0, 0.0], [2.0, 0.0], [1.0, 2.0]], "districts": [] },
                { "name": "P", "ring": [[0.0, 0.0], [2.0, 0.0], [1.0, 2.0]], "districts": [] }
            ]
        }"#;
        assert!(matches!(
            Dataset::from_json(json),
            Err(DatasetError::DuplicateName(_))
        ));
    }
}
