//! Chart deck view model
//!
//! The startup deck is a horizontal strip of precomputed pie panels
//! (one national, one per province). Selecting a district swaps the
//! strip for a single live-computed district panel. Both feed the same
//! renderer through [`ClassAreaDistribution`].

use serde::Serialize;

use crate::distribution::{national_distribution, province_distribution, ClassAreaDistribution};
use crate::region::Region;

/// One pie-chart panel
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartPanel {
    pub title: String,
    pub distribution: ClassAreaDistribution,
    pub visible: bool,
}

impl ChartPanel {
    pub fn new(title: impl Into<String>, distribution: ClassAreaDistribution) -> Self {
        Self { title: title.into(), distribution, visible: true }
    }
}

/// The full set of chart panels the viewer renders
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartDeck {
    /// National + per-province precomputed panels
    pub panels: Vec<ChartPanel>,
    /// Whether the strip of static panels is shown at all
    pub strip_visible: bool,
    /// Live-computed panel for the selected district
    pub district_panel: Option<ChartPanel>,
}

impl ChartDeck {
    /// Full multi-panel deck from the precomputed constant tables
    pub fn baseline(provinces: &[Region]) -> Self {
        let mut panels = vec![ChartPanel::new("Pakistan FSM", national_distribution())];
        for province in provinces {
            if let Some(distribution) = province_distribution(&province.name) {
                panels.push(ChartPanel::new(province.name.clone(), distribution));
            }
        }
        Self { panels, strip_visible: true, district_panel: None }
    }

    /// Hide every static panel except the named province's
    pub fn show_only(&mut self, title: &str) {
        for panel in &mut self.panels {
            panel.visible = panel.title == title;
        }
    }

    pub fn show_all(&mut self) {
        for panel in &mut self.panels {
            panel.visible = true;
        }
        self.strip_visible = true;
        self.district_panel = None;
    }

    /// Replace the strip with a single district panel
    pub fn set_district_panel(&mut self, panel: ChartPanel) {
        self.strip_visible = false;
        self.district_panel = Some(panel);
    }

    /// Titles of everything currently visible, strip then district
    pub fn visible_titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = if self.strip_visible {
            self.panels
                .iter()
                .filter(|p| p.visible)
                .map(|p| p.title.as_str())
                .collect()
        } else {
            Vec::new()
        };
        if let Some(district) = &self.district_panel {
            titles.push(district.title.as_str());
        }
        titles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::PROVINCE_TABLE;

    fn provinces() -> Vec<Region> {
        PROVINCE_TABLE
            .iter()
            .map(|(name, _)| Region::province(*name, "Pakistan"))
            .collect()
    }

    #[test]
    fn test_baseline_deck_has_national_plus_provinces() {
        let deck = ChartDeck::baseline(&provinces());
        assert_eq!(deck.panels.len(), 1 + PROVINCE_TABLE.len());
        assert_eq!(deck.panels[0].title, "Pakistan FSM");
        assert_eq!(deck.visible_titles().len(), deck.panels.len());
    }

    #[test]
    fn test_show_only_province() {
        let mut deck = ChartDeck::baseline(&provinces());
        deck.show_only("Punjab");
        assert_eq!(deck.visible_titles(), vec!["Punjab"]);
    }

    #[test]
    fn test_district_panel_replaces_strip() {
        let mut deck = ChartDeck::baseline(&provinces());
        deck.set_district_panel(ChartPanel::new(
            "Lahore FSM Area (%)",
            ClassAreaDistribution::from_areas([1.0, 2.0, 3.0, 4.0, 5.0]),
        ));
        assert_eq!(deck.visible_titles(), vec!["Lahore FSM Area (%)"]);
    }

    #[test]
    fn test_show_all_restores_baseline_visibility() {
        let mut deck = ChartDeck::baseline(&provinces());
        deck.show_only("Sindh");
        deck.set_district_panel(ChartPanel::new(
            "Karachi",
            ClassAreaDistribution::from_areas([0.0; 5]),
        ));
        deck.show_all();
        assert_eq!(deck, ChartDeck::baseline(&provinces()));
    }
}
