//! The core pipeline driven end to end against the bundled backend

use std::sync::Arc;

use indus_core::{
    AreaStats, RasterRef, Region, RegionCatalog, ViewController, DEFAULT_SCALE_M,
    PERCENT_TOLERANCE, Selection,
};
use indus_gateway::SyntheticGateway;

fn gateway() -> Arc<SyntheticGateway> {
    Arc::new(SyntheticGateway::bundled().unwrap().with_cell_budget(20_000))
}

#[tokio::test]
async fn catalog_over_bundled_dataset() {
    let catalog = RegionCatalog::bootstrap(gateway()).await.unwrap();
    assert_eq!(catalog.provinces().len(), 7);

    for province in catalog.provinces().to_vec() {
        let districts = catalog.districts(&province).await.unwrap();
        assert!(!districts.is_empty());
        for d in districts {
            assert_eq!(d.parent.as_deref(), Some(province.name.as_str()));
        }
    }
}

#[tokio::test]
async fn district_distribution_sums_to_100() {
    let stats = AreaStats::new(gateway(), DEFAULT_SCALE_M);
    let lahore = Region::district("Lahore", "Punjab");
    let dist = stats
        .compute_distribution(&RasterRef::primary_model(), &lahore)
        .await
        .unwrap();
    assert!((dist.percentage_sum() - 100.0).abs() < PERCENT_TOLERANCE);
    assert!(dist.total_area_km2() > 0.0);
}

#[tokio::test]
async fn pipeline_idempotent_against_synthetic_field() {
    let stats = AreaStats::new(gateway(), DEFAULT_SCALE_M);
    let sukkur = Region::district("Sukkur", "Sindh");
    let raster = RasterRef::primary_model();
    let first = stats.compute(&raster, &sukkur).await.unwrap();
    let second = stats.compute(&raster, &sukkur).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn full_controller_flow_over_bundled_backend() {
    let mut ctl = ViewController::bootstrap(gateway(), DEFAULT_SCALE_M)
        .await
        .unwrap();

    let req = ctl.select_province(Some("Sindh")).unwrap();
    let districts = ctl.catalog().districts(&req.province).await;
    ctl.apply_districts(req, districts);
    assert!(ctl
        .selection()
        .district_options()
        .iter()
        .any(|d| d.name == "Karachi"));

    let req = ctl.select_district("Karachi").unwrap();
    let result = ctl.stats_pipeline().compute(&req.raster, &req.district).await;
    ctl.apply_district_stats(req, result);

    assert!(matches!(ctl.selection(), Selection::DistrictSelected { .. }));
    let panel = ctl.charts().district_panel.as_ref().unwrap();
    assert!((panel.distribution.percentage_sum() - 100.0).abs() < PERCENT_TOLERANCE);
    assert!(ctl
        .map()
        .visible_layer_names()
        .iter()
        .any(|n| n.contains("Karachi")));
}
