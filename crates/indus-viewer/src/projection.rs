//! Viewport math for the SVG map surface
//!
//! Equirectangular mapping from lon/lat to pixel space. Good enough at
//! country scale; the atlas is a presentation layer, not a map engine.

use indus_core::{BBox, CameraTarget, LonLat, HOME_CENTER, HOME_ZOOM};

/// Degrees of longitude visible at a given zoom level
fn lon_span_for_zoom(zoom: f64) -> f64 {
    // Calibrated so the home zoom (6.5) frames the whole country.
    1600.0 / zoom.exp2()
}

/// A rectangular lon/lat window mapped onto a pixel canvas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub bbox: BBox,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Build a viewport for a camera target, padding the geographic
    /// window out to the canvas aspect ratio
    pub fn for_camera(camera: &CameraTarget, width: f64, height: f64) -> Self {
        let bbox = match camera {
            CameraTarget::Home => {
                let lon_span = lon_span_for_zoom(HOME_ZOOM);
                let lat_span = lon_span * height / width;
                BBox::new(
                    HOME_CENTER.lon - lon_span / 2.0,
                    HOME_CENTER.lat - lat_span / 2.0,
                    HOME_CENTER.lon + lon_span / 2.0,
                    HOME_CENTER.lat + lat_span / 2.0,
                )
            }
            CameraTarget::Fit(bbox) => *bbox,
        };
        Self { bbox: fit_aspect(bbox, width / height), width, height }
    }

    pub fn to_xy(&self, point: &LonLat) -> (f64, f64) {
        let x = (point.lon - self.bbox.west) / self.bbox.width() * self.width;
        let y = (self.bbox.north - point.lat) / self.bbox.height() * self.height;
        (x, y)
    }

    pub fn to_lonlat(&self, x: f64, y: f64) -> LonLat {
        LonLat::new(
            self.bbox.west + x / self.width * self.bbox.width(),
            self.bbox.north - y / self.height * self.bbox.height(),
        )
    }
}

/// Expand a bbox so its aspect ratio matches the canvas, centered
fn fit_aspect(bbox: BBox, aspect: f64) -> BBox {
    let center = bbox.center();
    let mut lon_span = bbox.width();
    let mut lat_span = bbox.height();
    if lon_span / lat_span < aspect {
        lon_span = lat_span * aspect;
    } else {
        lat_span = lon_span / aspect;
    }
    BBox::new(
        center.lon - lon_span / 2.0,
        center.lat - lat_span / 2.0,
        center.lon + lon_span / 2.0,
        center.lat + lat_span / 2.0,
    )
}

/// SVG path data for a closed polygon ring in viewport coordinates
pub fn polygon_path(viewport: &Viewport, ring: &[LonLat]) -> String {
    let mut path = String::new();
    for (i, point) in ring.iter().enumerate() {
        let (x, y) = viewport.to_xy(point);
        let op = if i == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{op} {x:.1} {y:.1} "));
    }
    if !path.is_empty() {
        path.push('Z');
    }
    path
}
