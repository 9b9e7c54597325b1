//! End-to-end selection scenarios against the mock gateway
//!
//! Drives the controller through the same interleavings a user
//! produces: province then district selection, deselection, reset from
//! every state, and superseded in-flight requests.

use std::sync::Arc;

use indus_core::{
    BBox, ChartDeck, MapView, MockGateway, Polygon, RasterRef, Selection, ViewController,
    DEFAULT_SCALE_M, PERCENT_TOLERANCE,
};

fn pakistan_gateway() -> Arc<MockGateway> {
    let gw = MockGateway::new();
    for province in [
        "Azad Kashmir",
        "Balochistan",
        "Gilgit Baltistan",
        "Islamabad",
        "Khyber Pakhtunkhwa",
        "Punjab",
        "Sindh",
    ] {
        gw.add_province(province);
    }
    for district in ["Lahore", "Rawalpindi", "Multan"] {
        gw.add_district("Punjab", district);
    }
    gw.add_district("Sindh", "Karachi");

    gw.set_geometry("Lahore", Polygon::rect(BBox::new(74.1, 31.2, 74.6, 31.7)));
    gw.set_geometry("Multan", Polygon::rect(BBox::new(71.2, 29.9, 71.7, 30.4)));
    let primary = RasterRef::primary_model();
    gw.set_zonal(
        &primary,
        "Lahore",
        [(1, 310.0), (2, 240.0), (3, 420.0), (4, 180.0), (5, 95.0)],
    );
    gw.set_zonal(&primary, "Multan", [(3, 120.0), (4, 200.0), (5, 340.0)]);
    Arc::new(gw)
}

async fn bootstrapped() -> ViewController {
    ViewController::bootstrap(pakistan_gateway(), DEFAULT_SCALE_M)
        .await
        .unwrap()
}

/// Drive a full province selection including the options fetch.
async fn select_province(ctl: &mut ViewController, name: &str) {
    let req = ctl.select_province(Some(name)).unwrap();
    let result = ctl.catalog().districts(&req.province).await;
    ctl.apply_districts(req, result);
}

/// Drive a full district selection including the stats round-trip.
async fn select_district(ctl: &mut ViewController, name: &str) {
    let req = ctl.select_district(name).unwrap();
    let result = ctl.stats_pipeline().compute(&req.raster, &req.district).await;
    ctl.apply_district_stats(req, result);
}

#[tokio::test]
async fn punjab_lahore_scenario() {
    let mut ctl = bootstrapped().await;

    select_province(&mut ctl, "Punjab").await;
    let options: Vec<_> = ctl
        .selection()
        .district_options()
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(options, vec!["Lahore", "Rawalpindi", "Multan"]);
    assert_eq!(ctl.charts().visible_titles(), vec!["Punjab"]);
    assert!(!ctl.placeholder_visible());

    select_district(&mut ctl, "Lahore").await;
    assert!(matches!(ctl.selection(), Selection::DistrictSelected { .. }));

    let panel = ctl.charts().district_panel.as_ref().unwrap();
    assert!(panel.title.contains("Lahore"));
    assert!((panel.distribution.percentage_sum() - 100.0).abs() < PERCENT_TOLERANCE);
    assert_eq!(panel.distribution.slices().count(), 5);

    // Map shows the clipped raster named after the district.
    let names = ctl.map().visible_layer_names();
    assert!(names.iter().any(|n| n.contains("Lahore")));
    assert_eq!(names.len(), 2);
}

#[tokio::test]
async fn province_deselect_returns_exact_initial_shape() {
    let mut ctl = bootstrapped().await;
    let initial_charts = ctl.charts().clone();

    select_province(&mut ctl, "Punjab").await;
    ctl.select_province(None);

    assert_eq!(*ctl.selection(), Selection::Initial);
    assert!(!ctl.selection().district_control_enabled());
    assert!(ctl.selection().district_options().is_empty());
    assert!(ctl.placeholder_visible());
    assert_eq!(*ctl.charts(), initial_charts);
}

#[tokio::test]
async fn reset_from_district_matches_fresh_initial() {
    let mut ctl = bootstrapped().await;
    let fresh_map = MapView::baseline();
    let fresh_charts = ChartDeck::baseline(ctl.provinces());

    select_province(&mut ctl, "Punjab").await;
    select_district(&mut ctl, "Lahore").await;
    assert_ne!(*ctl.map(), fresh_map);

    ctl.reset();

    assert_eq!(*ctl.selection(), Selection::Initial);
    assert_eq!(ctl.map().visible_layer_names(), fresh_map.visible_layer_names());
    assert_eq!(*ctl.map(), fresh_map);
    assert_eq!(*ctl.charts(), fresh_charts);
    assert!(ctl.placeholder_visible());
    assert!(ctl.notice().is_none());

    // No stale district outline survives the reset.
    assert!(!ctl
        .map()
        .layers
        .iter()
        .any(|l| l.name.contains("Lahore")));
}

#[tokio::test]
async fn superseded_stats_response_is_discarded() {
    let mut ctl = bootstrapped().await;
    select_province(&mut ctl, "Punjab").await;

    // Request stats for Lahore, but do not apply yet: it is in flight.
    let req_a = ctl.select_district("Lahore").unwrap();
    let stats_a = ctl.stats_pipeline().compute(&req_a.raster, &req_a.district).await;

    // User selects Multan before Lahore resolves.
    select_district(&mut ctl, "Multan").await;
    assert_eq!(ctl.selection().district().unwrap().name, "Multan");

    // Lahore's response arrives late and must be ignored.
    ctl.apply_district_stats(req_a, stats_a);
    assert_eq!(ctl.selection().district().unwrap().name, "Multan");
    let panel = ctl.charts().district_panel.as_ref().unwrap();
    assert!(panel.title.contains("Multan"));
    assert!(ctl
        .map()
        .visible_layer_names()
        .iter()
        .all(|n| !n.contains("Lahore")));
}

#[tokio::test]
async fn switching_province_swaps_visible_chart() {
    let mut ctl = bootstrapped().await;
    select_province(&mut ctl, "Punjab").await;
    assert_eq!(ctl.charts().visible_titles(), vec!["Punjab"]);

    select_province(&mut ctl, "Sindh").await;
    assert_eq!(ctl.charts().visible_titles(), vec!["Sindh"]);
    let options: Vec<_> = ctl
        .selection()
        .district_options()
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(options, vec!["Karachi"]);
}

#[tokio::test]
async fn gateway_outage_mid_session_preserves_context() {
    let gateway = pakistan_gateway();
    let mut ctl = ViewController::bootstrap(gateway.clone(), DEFAULT_SCALE_M)
        .await
        .unwrap();

    select_province(&mut ctl, "Punjab").await;
    select_district(&mut ctl, "Lahore").await;
    let map_before = ctl.map().clone();

    // Backend goes away; selecting another district fails softly.
    gateway.set_unreachable(true);
    let req = ctl.select_district("Multan").unwrap();
    let result = ctl.stats_pipeline().compute(&req.raster, &req.district).await;
    ctl.apply_district_stats(req, result);

    assert!(ctl.notice().is_some());
    assert_eq!(*ctl.map(), map_before);
    assert_eq!(ctl.selection().district().unwrap().name, "Lahore");

    // Re-selecting after recovery works; no automatic retry happened.
    gateway.set_unreachable(false);
    let zonal_before = gateway.zonal_calls();
    select_district(&mut ctl, "Multan").await;
    assert_eq!(gateway.zonal_calls(), zonal_before + 1);
    assert_eq!(ctl.selection().district().unwrap().name, "Multan");
    assert!(ctl.notice().is_none());
}

#[tokio::test]
async fn clear_district_returns_to_province_view() {
    let mut ctl = bootstrapped().await;
    select_province(&mut ctl, "Punjab").await;
    select_district(&mut ctl, "Lahore").await;

    ctl.clear_district();
    assert!(matches!(ctl.selection(), Selection::ProvinceSelected { .. }));
    assert_eq!(ctl.charts().visible_titles(), vec!["Punjab"]);
    assert_eq!(*ctl.map(), MapView::baseline());
    // Options survive so the user can pick again without a refetch.
    assert!(!ctl.selection().district_options().is_empty());
}
