//! # Indus Gateway
//!
//! Production-shaped [`GeoDataGateway`](indus_core::GeoDataGateway)
//! implementation for the Indus Atlas.
//!
//! The hosted geospatial backend is replaced by two bundled pieces:
//!
//! - **Dataset**: an embedded country/province/district boundary
//!   hierarchy for Pakistan, validated at load time
//! - **Synthetic field**: a deterministic susceptibility classification
//!   derived from keyed hash noise and a floodplain prior, standing in
//!   for the published raster assets
//!
//! [`SyntheticGateway`] performs real area-weighted zonal reduction
//! over these: a point-in-polygon grid walk accumulating true ground
//! area per class, with best-effort coarsening under a cell budget.

pub mod dataset;
pub mod field;
pub mod synthetic;

// Re-export main types
pub use dataset::{Dataset, DatasetError, DistrictEntry, ProvinceEntry};
pub use synthetic::SyntheticGateway;
