//! Per-class area distributions
//!
//! One data type serves both chart paths: the static precomputed
//! national/province summaries and the live district pipeline. The
//! renderer never needs to know which producer built a distribution.

use serde::Serialize;

use crate::classes::SusceptibilityClass;

/// Tolerance for the "percentages sum to 100" invariant
pub const PERCENT_TOLERANCE: f64 = 0.01;

/// Mapping from susceptibility class to area and percentage
///
/// Percentages sum to 100 within [`PERCENT_TOLERANCE`] when the total
/// area is positive, and are all zero when it is zero. Areas are zero
/// for percent-only producers (the precomputed summary tables).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassAreaDistribution {
    areas_km2: [f64; 5],
    percentages: [f64; 5],
}

impl ClassAreaDistribution {
    /// Build from absolute per-class areas in km², indexed by
    /// [`SusceptibilityClass::index`]; percentages are derived by
    /// normalizing against the total, all-zero when the total is zero
    pub fn from_areas(areas_km2: [f64; 5]) -> Self {
        let total: f64 = areas_km2.iter().sum();
        let percentages = if total > 0.0 {
            areas_km2.map(|a| a / total * 100.0)
        } else {
            [0.0; 5]
        };
        Self { areas_km2, percentages }
    }

    /// Build from a precomputed percentage table (percent-only)
    pub fn from_percentages(percentages: [f64; 5]) -> Self {
        Self { areas_km2: [0.0; 5], percentages }
    }

    pub fn area_km2(&self, class: SusceptibilityClass) -> f64 {
        self.areas_km2[class.index()]
    }

    pub fn percentage(&self, class: SusceptibilityClass) -> f64 {
        self.percentages[class.index()]
    }

    pub fn total_area_km2(&self) -> f64 {
        self.areas_km2.iter().sum()
    }

    pub fn percentage_sum(&self) -> f64 {
        self.percentages.iter().sum()
    }

    /// Percentage slices in severity order, for chart rendering
    pub fn slices(&self) -> impl Iterator<Item = (SusceptibilityClass, f64)> + '_ {
        SusceptibilityClass::all()
            .iter()
            .map(|c| (*c, self.percentages[c.index()]))
    }
}

/// Precomputed national summary (percent of country area per class)
pub fn national_distribution() -> ClassAreaDistribution {
    ClassAreaDistribution::from_percentages([57.91, 12.05, 9.29, 8.04, 12.71])
}

/// Precomputed per-province summaries, in the provider's province order
pub const PROVINCE_TABLE: &[(&str, [f64; 5])] = &[
    ("Azad Kashmir", [98.15, 1.65, 0.18, 0.02, 0.0]),
    ("Balochistan", [65.5, 9.66, 5.26, 4.95, 14.63]),
    ("Gilgit Baltistan", [97.8, 1.78, 0.25, 0.16, 0.01]),
    ("Islamabad", [99.99, 0.01, 0.0, 0.0, 0.0]),
    ("Khyber Pakhtunkhwa", [90.76, 2.45, 2.04, 2.1, 2.65]),
    ("Punjab", [30.6, 24.39, 21.72, 13.02, 10.26]),
    ("Sindh", [25.97, 13.89, 12.32, 18.64, 29.18]),
];

/// Precomputed summary for a province, `None` for unknown names
pub fn province_distribution(name: &str) -> Option<ClassAreaDistribution> {
    PROVINCE_TABLE
        .iter()
        .find(|(province, _)| *province == name)
        .map(|(_, percentages)| ClassAreaDistribution::from_percentages(*percentages))
}
