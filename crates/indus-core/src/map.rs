//! Map view model
//!
//! The map surface is consumed, not owned: the controller edits a typed
//! layer list and camera target, and the viewer renders whatever the
//! model says. Layer names match what the hosted raster assets were
//! published under, so they stay meaningful in the layer toggle UI.

use serde::Serialize;

use crate::gateway::RasterRef;
use crate::geometry::{BBox, LonLat, Polygon};
use crate::region::Region;

/// Fixed home camera over Pakistan
pub const HOME_CENTER: LonLat = LonLat { lon: 70.704, lat: 30.655 };
pub const HOME_ZOOM: f64 = 6.5;

/// What a map layer draws
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum LayerKind {
    CountryBoundary,
    ProvinceBoundaries,
    /// Full-extent classified raster
    Raster { raster: RasterRef },
    /// Raster clipped to a region boundary
    ClippedRaster { raster: RasterRef, clip: Polygon },
    /// Thin boundary outline of a selected region
    RegionOutline { outline: Polygon },
}

impl LayerKind {
    /// Stroke width in px for boundary layers, `None` for rasters
    pub fn stroke_width(&self) -> Option<f64> {
        match self {
            LayerKind::CountryBoundary => Some(2.0),
            LayerKind::ProvinceBoundaries => Some(1.0),
            LayerKind::RegionOutline { .. } => Some(1.5),
            LayerKind::Raster { .. } | LayerKind::ClippedRaster { .. } => None,
        }
    }
}

/// One styled overlay layer
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapLayer {
    pub name: String,
    pub kind: LayerKind,
    pub visible: bool,
}

impl MapLayer {
    pub fn new(name: impl Into<String>, kind: LayerKind, visible: bool) -> Self {
        Self { name: name.into(), kind, visible }
    }
}

/// Where the camera should be
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum CameraTarget {
    /// Fixed country-wide center and zoom
    Home,
    /// Fit the view to a bounding box
    Fit(BBox),
}

/// The full map state the viewer renders
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapView {
    pub layers: Vec<MapLayer>,
    pub camera: CameraTarget,
}

impl MapView {
    /// The three-plus-one baseline layer stack shown at startup and
    /// after every reset: country boundary, primary raster visible,
    /// secondary raster hidden, province boundaries
    pub fn baseline() -> Self {
        Self {
            layers: vec![
                MapLayer::new("Pakistan Boundary", LayerKind::CountryBoundary, true),
                MapLayer::new(
                    RasterRef::primary_model().title(),
                    LayerKind::Raster { raster: RasterRef::primary_model() },
                    true,
                ),
                MapLayer::new(
                    RasterRef::secondary_model().title(),
                    LayerKind::Raster { raster: RasterRef::secondary_model() },
                    false,
                ),
                MapLayer::new("Provinces Boundary", LayerKind::ProvinceBoundaries, true),
            ],
            camera: CameraTarget::Home,
        }
    }

    /// Fresh layer stack for a selected district: the primary raster
    /// clipped to the district plus its outline, camera fit to bounds
    pub fn district_view(raster: RasterRef, district: &Region, polygon: Polygon) -> Self {
        let camera = match polygon.bbox() {
            Some(bbox) => CameraTarget::Fit(bbox.padded(0.15)),
            None => CameraTarget::Home,
        };
        Self {
            layers: vec![
                MapLayer::new(
                    format!("{} {}", district.name, raster.title()),
                    LayerKind::ClippedRaster { raster, clip: polygon.clone() },
                    true,
                ),
                MapLayer::new(
                    format!("{} Boundary", district.name),
                    LayerKind::RegionOutline { outline: polygon },
                    true,
                ),
            ],
            camera,
        }
    }

    pub fn visible_layer_names(&self) -> Vec<&str> {
        self.layers
            .iter()
            .filter(|l| l.visible)
            .map(|l| l.name.as_str())
            .collect()
    }

    /// Toggle a layer by name; `false` when no such layer exists
    pub fn set_layer_visibility(&mut self, name: &str, visible: bool) -> bool {
        match self.layers.iter_mut().find(|l| l.name == name) {
            Some(layer) => {
                layer.visible = visible;
                true
            }
            None => false,
        }
    }
}
