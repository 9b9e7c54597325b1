//! SVG map surface
//!
//! Renders the controller's map view model: boundary rings from the
//! bundled dataset and raster overlays as PNG data URIs sampled from
//! the synthetic field.

use dioxus::prelude::*;

use indus_core::{LayerKind, MapLayer, ViewController};
use indus_gateway::Dataset;

use crate::projection::{polygon_path, Viewport};
use crate::raster::raster_overlay_uri;

/// Canvas size in viewport units
const MAP_WIDTH: f64 = 960.0;
const MAP_HEIGHT: f64 = 720.0;

/// Raster overlay sampling resolution
const RASTER_WIDTH: u32 = 480;
const RASTER_HEIGHT: u32 = 360;

/// Map surface component
#[component]
pub fn MapSurface(controller: Signal<Option<ViewController>>) -> Element {
    let ctl_ref = controller.read();
    let Some(ctl) = ctl_ref.as_ref() else {
        return rsx! {};
    };
    let map = ctl.map().clone();
    drop(ctl_ref);

    let gateway = crate::gateway();
    let viewport = Viewport::for_camera(&map.camera, MAP_WIDTH, MAP_HEIGHT);

    rsx! {
        div { class: "map-surface",
            svg {
                class: "map-canvas",
                view_box: "0 0 {MAP_WIDTH} {MAP_HEIGHT}",
                preserve_aspect_ratio: "xMidYMid meet",
                for layer in map.layers.iter().filter(|l| l.visible) {
                    {render_layer(layer, &viewport, gateway.dataset())}
                }
            }
        }
    }
}

fn render_layer(layer: &MapLayer, viewport: &Viewport, dataset: &Dataset) -> Element {
    match &layer.kind {
        LayerKind::CountryBoundary => {
            let d = polygon_path(viewport, dataset.country_polygon().ring());
            rsx! {
                path {
                    d: "{d}",
                    fill: "none",
                    stroke: "var(--boundary-color)",
                    stroke_width: "2",
                }
            }
        }
        LayerKind::ProvinceBoundaries => {
            rsx! {
                for province in dataset.provinces() {
                    path {
                        d: "{polygon_path(viewport, province.polygon.ring())}",
                        fill: "none",
                        stroke: "var(--boundary-color)",
                        stroke_width: "1",
                    }
                }
            }
        }
        LayerKind::Raster { raster } => {
            let uri = raster_overlay_uri(
                raster,
                viewport,
                dataset.country_polygon(),
                RASTER_WIDTH,
                RASTER_HEIGHT,
            );
            rsx! {
                if let Some(uri) = uri {
                    image {
                        href: "{uri}",
                        x: "0",
                        y: "0",
                        width: "{viewport.width}",
                        height: "{viewport.height}",
                        preserve_aspect_ratio: "none",
                    }
                }
            }
        }
        LayerKind::ClippedRaster { raster, clip } => {
            let uri = raster_overlay_uri(raster, viewport, clip, RASTER_WIDTH, RASTER_HEIGHT);
            rsx! {
                if let Some(uri) = uri {
                    image {
                        href: "{uri}",
                        x: "0",
                        y: "0",
                        width: "{viewport.width}",
                        height: "{viewport.height}",
                        preserve_aspect_ratio: "none",
                    }
                }
            }
        }
        LayerKind::RegionOutline { outline } => {
            let d = polygon_path(viewport, outline.ring());
            rsx! {
                path {
                    d: "{d}",
                    fill: "none",
                    stroke: "var(--outline-color)",
                    stroke_width: "1.5",
                }
            }
        }
    }
}
