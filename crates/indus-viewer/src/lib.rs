//! # Indus Viewer
//!
//! Dioxus desktop application for the Indus Atlas: sidebar with
//! province/district selection, SVG map surface with raster overlays,
//! and the pie-chart deck. All state transitions go through the
//! [`ViewController`](indus_core::ViewController) from `indus-core`;
//! this crate only renders view models and wires events.

use std::sync::{Arc, OnceLock};

use indus_gateway::SyntheticGateway;

pub mod components;
pub mod projection;
pub mod raster;
pub mod theme;

/// Gateway handle shared by the app root and the map surface
static GATEWAY: OnceLock<Arc<SyntheticGateway>> = OnceLock::new();

/// Install the gateway before launching the app
pub fn install_gateway(gateway: Arc<SyntheticGateway>) {
    GATEWAY.set(gateway).ok();
}

/// The installed gateway; panics if called before [`install_gateway`]
pub fn gateway() -> Arc<SyntheticGateway> {
    GATEWAY
        .get()
        .expect("gateway installed before launch")
        .clone()
}
