//! Minimal geographic types
//!
//! The atlas only needs enough geometry to address regions, test point
//! containment for zonal reduction, and fit the camera to a selection.
//! General map rendering/tiling is out of scope.

use serde::{Deserialize, Serialize};

/// A longitude/latitude pair in degrees (WGS84)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Axis-aligned bounding box in degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BBox {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self { west, south, east, north }
    }

    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    pub fn center(&self) -> LonLat {
        LonLat::new((self.west + self.east) / 2.0, (self.south + self.north) / 2.0)
    }

    pub fn contains(&self, point: &LonLat) -> bool {
        point.lon >= self.west
            && point.lon <= self.east
            && point.lat >= self.south
            && point.lat <= self.north
    }

    /// Grow the box by a fraction of its own size on every side
    pub fn padded(&self, fraction: f64) -> Self {
        let dx = self.width() * fraction;
        let dy = self.height() * fraction;
        Self::new(self.west - dx, self.south - dy, self.east + dx, self.north + dy)
    }
}

/// A simple polygon described by one exterior ring
///
/// The ring is implicitly closed; the last vertex does not repeat the
/// first. Administrative boundaries in the bundled dataset are coarse
/// single-ring polygons, which is all the reduction path needs.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    ring: Vec<LonLat>,
}

impl Polygon {
    pub fn new(ring: Vec<LonLat>) -> Self {
        Self { ring }
    }

    /// Axis-aligned rectangle polygon from a bounding box
    pub fn rect(bbox: BBox) -> Self {
        Self::new(vec![
            LonLat::new(bbox.west, bbox.south),
            LonLat::new(bbox.east, bbox.south),
            LonLat::new(bbox.east, bbox.north),
            LonLat::new(bbox.west, bbox.north),
        ])
    }

    pub fn ring(&self) -> &[LonLat] {
        &self.ring
    }

    /// A polygon with fewer than three vertices encloses nothing
    pub fn is_empty(&self) -> bool {
        self.ring.len() < 3
    }

    pub fn bbox(&self) -> Option<BBox> {
        if self.ring.is_empty() {
            return None;
        }
        let mut bbox = BBox::new(f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in &self.ring {
            bbox.west = bbox.west.min(p.lon);
            bbox.east = bbox.east.max(p.lon);
            bbox.south = bbox.south.min(p.lat);
            bbox.north = bbox.north.max(p.lat);
        }
        Some(bbox)
    }

    pub fn centroid(&self) -> Option<LonLat> {
        self.bbox().map(|b| b.center())
    }

    /// Even-odd ray-casting point-in-polygon test
    pub fn contains(&self, point: &LonLat) -> bool {
        if self.is_empty() {
            return false;
        }
        let mut inside = false;
        let mut j = self.ring.len() - 1;
        for i in 0..self.ring.len() {
            let a = &self.ring[i];
            let b = &self.ring[j];
            if (a.lat > point.lat) != (b.lat > point.lat) {
                let crossing = a.lon + (point.lat - a.lat) / (b.lat - a.lat) * (b.lon - a.lon);
                if point.lon < crossing {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}
