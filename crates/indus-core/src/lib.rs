//! # Indus Core
//!
//! Domain model and orchestration logic for the Indus Atlas, a
//! presentation layer over precomputed flood-susceptibility rasters for
//! Pakistan.
//!
//! This crate carries everything that is not UI: the error taxonomy,
//! the gateway trait abstracting the hosted geospatial backend, the
//! region catalog, the area-statistics pipeline, the selection state
//! machine, and the view controller that drives the map and chart view
//! models.
//!
//! ## Key Traits
//!
//! - [`GeoDataGateway`]: the sole external collaborator (boundary
//!   fetch, district listing, zonal reduction)
//!
//! ## Key Types
//!
//! - [`RegionCatalog`]: province/district hierarchy for the session
//! - [`AreaStats`]: the region-selection → area-statistics pipeline
//! - [`ClassAreaDistribution`]: unified chart data for both the
//!   precomputed and live-computed paths
//! - [`ViewController`]: composition root owning selection, map view
//!   model, and chart deck

pub mod charts;
pub mod classes;
pub mod controller;
pub mod distribution;
pub mod error;
pub mod gateway;
pub mod geometry;
pub mod map;
pub mod mock_gateway;
pub mod region;
pub mod selection;
pub mod stats;

// Re-export main types
pub use charts::*;
pub use classes::*;
pub use controller::*;
pub use distribution::*;
pub use error::*;
pub use gateway::*;
pub use geometry::*;
pub use map::*;
pub use mock_gateway::*;
pub use region::*;
pub use selection::*;
pub use stats::*;
