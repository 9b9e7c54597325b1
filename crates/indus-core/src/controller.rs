//! View controller
//!
//! Single composition-root-owned struct replacing the original app's
//! global widget bag: it owns the selection, the map view model, the
//! chart deck, and the notice line, and its transition handlers are the
//! only mutation path.
//!
//! Gateway round-trips are split into an issue step and an apply step:
//! a transition handler returns a request token carrying the selection
//! generation, the caller awaits the gateway, then hands the completion
//! back with the token. A completion whose generation no longer matches
//! the controller is discarded, so a superseded in-flight request can
//! never clobber a newer selection.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::charts::{ChartDeck, ChartPanel};
use crate::error::AtlasResult;
use crate::gateway::{GeoDataGateway, RasterRef};
use crate::map::MapView;
use crate::region::{Region, RegionCatalog};
use crate::selection::{DistrictOptions, Selection};
use crate::stats::{AreaStats, RegionStats};

/// Token for an in-flight district-options fetch
#[derive(Clone, Debug)]
pub struct DistrictsRequest {
    generation: u64,
    pub province: Region,
}

/// Token for an in-flight district-stats computation
#[derive(Clone, Debug)]
pub struct StatsRequest {
    generation: u64,
    pub raster: RasterRef,
    pub district: Region,
}

pub struct ViewController {
    catalog: Arc<RegionCatalog>,
    stats: AreaStats,
    selection: Selection,
    map: MapView,
    charts: ChartDeck,
    notice: Option<String>,
    placeholder_visible: bool,
    /// Bumped on every selection-changing action; stale completions
    /// carry an older value and are dropped
    generation: u64,
}

impl ViewController {
    /// Fetch the province catalog and build the initial view state
    pub async fn bootstrap(
        gateway: Arc<dyn GeoDataGateway>,
        scale_m: f64,
    ) -> AtlasResult<Self> {
        let catalog = Arc::new(RegionCatalog::bootstrap(gateway.clone()).await?);
        let charts = ChartDeck::baseline(catalog.provinces());
        info!(provinces = catalog.provinces().len(), "atlas bootstrapped");
        Ok(Self {
            catalog,
            stats: AreaStats::new(gateway, scale_m),
            selection: Selection::Initial,
            map: MapView::baseline(),
            charts,
            notice: None,
            placeholder_visible: true,
            generation: 0,
        })
    }

    pub fn catalog(&self) -> Arc<RegionCatalog> {
        self.catalog.clone()
    }

    /// The stats pipeline, cloneable for use across an await point
    pub fn stats_pipeline(&self) -> AreaStats {
        self.stats.clone()
    }

    pub fn provinces(&self) -> &[Region] {
        self.catalog.provinces()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }

    pub fn charts(&self) -> &ChartDeck {
        &self.charts
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Whether the "waiting for selection" placeholder is shown
    pub fn placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }

    /// Toggle a map layer (the secondary-model raster, in practice)
    pub fn set_layer_visibility(&mut self, name: &str, visible: bool) {
        if !self.map.set_layer_visibility(name, visible) {
            warn!(layer = name, "visibility toggle for unknown layer ignored");
        }
    }

    /// Select a province (`Some`) or explicitly deselect (`None`)
    ///
    /// On selection, returns the token for the lazy district-options
    /// fetch; the caller resolves it via
    /// [`RegionCatalog::districts`] and reports back through
    /// [`apply_districts`](Self::apply_districts).
    pub fn select_province(&mut self, name: Option<&str>) -> Option<DistrictsRequest> {
        self.generation += 1;
        self.notice = None;

        let Some(name) = name else {
            // Explicit deselect: back to the Initial shape.
            if matches!(self.selection, Selection::DistrictSelected { .. }) {
                self.map = MapView::baseline();
            }
            self.selection = Selection::Initial;
            self.charts.show_all();
            self.placeholder_visible = true;
            return None;
        };

        let province = match self.catalog.province(name) {
            Ok(province) => province,
            Err(err) => {
                // Unreachable through the dropdown, guarded anyway.
                self.notice = Some(err.to_string());
                return None;
            }
        };

        if matches!(self.selection, Selection::DistrictSelected { .. }) {
            self.map = MapView::baseline();
        }
        self.charts.show_all();
        self.charts.show_only(&province.name);
        self.placeholder_visible = false;
        self.selection = Selection::ProvinceSelected {
            province: province.clone(),
            options: DistrictOptions::Loading,
        };
        debug!(province = %province.name, generation = self.generation, "province selected");
        Some(DistrictsRequest { generation: self.generation, province })
    }

    /// Completion of a district-options fetch
    pub fn apply_districts(&mut self, req: DistrictsRequest, result: AtlasResult<Vec<Region>>) {
        if req.generation != self.generation {
            debug!(province = %req.province.name, "discarding stale district-options response");
            return;
        }
        let districts = match result {
            Ok(districts) => districts,
            Err(err) => {
                // Keep the control enabled but empty; re-selecting the
                // province retries.
                self.notice = Some(err.to_string());
                Vec::new()
            }
        };
        if let Selection::ProvinceSelected { options, .. } = &mut self.selection {
            *options = DistrictOptions::Ready(districts);
        }
    }

    /// Select a district from the current options
    ///
    /// Returns the token for the stats computation; the caller runs
    /// [`AreaStats::compute`] and reports back through
    /// [`apply_district_stats`](Self::apply_district_stats). The state
    /// machine only advances to `DistrictSelected` when the stats
    /// arrive successfully.
    pub fn select_district(&mut self, name: &str) -> Option<StatsRequest> {
        let district = match self
            .selection
            .district_options()
            .iter()
            .find(|d| d.name == name)
        {
            Some(district) => district.clone(),
            None => {
                self.notice = Some(format!("Region not found in catalog: {name}"));
                return None;
            }
        };
        self.generation += 1;
        self.notice = None;
        debug!(district = %district.name, generation = self.generation, "district stats requested");
        Some(StatsRequest {
            generation: self.generation,
            raster: RasterRef::primary_model(),
            district,
        })
    }

    /// Completion of a district-stats computation
    ///
    /// On failure the prior map/chart state stays visible and the error
    /// becomes a non-blocking notice.
    pub fn apply_district_stats(&mut self, req: StatsRequest, result: AtlasResult<RegionStats>) {
        if req.generation != self.generation {
            debug!(district = %req.district.name, "discarding stale district-stats response");
            return;
        }
        let stats = match result {
            Ok(stats) => stats,
            Err(err) => {
                self.notice = Some(err.to_string());
                return;
            }
        };
        let (province, options) = match &self.selection {
            Selection::ProvinceSelected { province, options }
            | Selection::DistrictSelected { province, options, .. } => {
                (province.clone(), options.clone())
            }
            Selection::Initial => return,
        };
        self.selection = Selection::DistrictSelected {
            province,
            district: req.district.clone(),
            options,
        };
        self.map = MapView::district_view(req.raster, &req.district, stats.polygon);
        self.charts.set_district_panel(ChartPanel::new(
            format!("{} FSM Area (%)", req.district.name),
            stats.distribution,
        ));
        self.placeholder_visible = false;
        self.notice = None;
        info!(district = %req.district.name, "district view rendered");
    }

    /// Clear only the district, back to the province view
    pub fn clear_district(&mut self) {
        if let Selection::DistrictSelected { province, options, .. } = self.selection.clone() {
            self.generation += 1;
            self.map = MapView::baseline();
            self.charts.show_all();
            self.charts.show_only(&province.name);
            self.selection = Selection::ProvinceSelected { province, options };
        }
    }

    /// Full reinitialization, runnable from any state
    ///
    /// Rebuilds the baseline layer stack and chart deck from scratch
    /// (remove-then-add; nothing from the previous view can survive),
    /// re-homes the camera, clears both selects, and restores the
    /// placeholder. Never waits on the network.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.selection = Selection::Initial;
        self.map = MapView::baseline();
        self.charts = ChartDeck::baseline(self.catalog.provinces());
        self.notice = None;
        self.placeholder_visible = true;
        info!("atlas reset to initial state");
    }
}
