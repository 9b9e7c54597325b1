//! Raster overlay rendering
//!
//! Samples the synthetic susceptibility field over the current
//! viewport, paints classes with the fixed palette, masks to a
//! boundary polygon, and encodes the result as a PNG data URI for the
//! webview.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::RgbaImage;
use indus_core::{Polygon, RasterRef, SusceptibilityClass};
use indus_gateway::field;

use crate::projection::Viewport;

/// Alpha for raster pixels, matching a translucent map overlay
const OVERLAY_ALPHA: u8 = 178;

fn hex_to_rgb(hex: &str) -> [u8; 3] {
    let parse = |range| u8::from_str_radix(&hex[range], 16).unwrap_or(0);
    if hex.len() == 7 && hex.starts_with('#') {
        [parse(1..3), parse(3..5), parse(5..7)]
    } else {
        [0, 0, 0]
    }
}

/// Render a class raster over the viewport, masked to `mask`, as a
/// `data:image/png;base64,…` URI
///
/// Returns `None` if PNG encoding fails; the map simply draws no
/// overlay in that case.
pub fn raster_overlay_uri(
    raster: &RasterRef,
    viewport: &Viewport,
    mask: &Polygon,
    width: u32,
    height: u32,
) -> Option<String> {
    let palette: Vec<[u8; 3]> = SusceptibilityClass::all()
        .iter()
        .map(|c| hex_to_rgb(c.color()))
        .collect();

    let img = RgbaImage::from_fn(width, height, |px, py| {
        let x = (px as f64 + 0.5) / width as f64 * viewport.width;
        let y = (py as f64 + 0.5) / height as f64 * viewport.height;
        let point = viewport.to_lonlat(x, y);
        if !mask.contains(&point) {
            return image::Rgba([0, 0, 0, 0]);
        }
        let class = field::class_at(raster.id(), &point);
        match SusceptibilityClass::from_class_value(class) {
            Some(c) => {
                let [r, g, b] = palette[c.index()];
                image::Rgba([r, g, b, OVERLAY_ALPHA])
            }
            None => image::Rgba([0, 0, 0, 0]),
        }
    });

    let mut buf = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .ok()?;
    Some(format!("data:image/png;base64,{}", STANDARD.encode(&buf)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indus_core::{BBox, CameraTarget};

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex_to_rgb("#147218"), [0x14, 0x72, 0x18]);
        assert_eq!(hex_to_rgb("#fe3c19"), [0xfe, 0x3c, 0x19]);
        assert_eq!(hex_to_rgb("nonsense"), [0, 0, 0]);
    }

    #[test]
    fn test_overlay_encodes_to_data_uri() {
        let viewport = Viewport::for_camera(
            &CameraTarget::Fit(BBox::new(68.0, 25.0, 69.0, 26.0)),
            64.0,
            64.0,
        );
        let mask = Polygon::rect(BBox::new(68.0, 25.0, 69.0, 26.0));
        let uri = raster_overlay_uri(&RasterRef::primary_model(), &viewport, &mask, 64, 64)
            .unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_mask_leaves_outside_transparent() {
        let viewport = Viewport::for_camera(
            &CameraTarget::Fit(BBox::new(0.0, 0.0, 2.0, 2.0)),
            8.0,
            8.0,
        );
        // Mask covers nothing in view; output should still encode.
        let mask = Polygon::rect(BBox::new(10.0, 10.0, 11.0, 11.0));
        let uri = raster_overlay_uri(&RasterRef::primary_model(), &viewport, &mask, 8, 8);
        assert!(uri.is_some());
    }
}
