//! Flood susceptibility classification
//!
//! The five severity bins are fixed process-wide: class values 1-5, the
//! display palette, and the labels all match the published flood
//! susceptibility model for Pakistan.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five ordered flood-susceptibility severity bins
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SusceptibilityClass {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl SusceptibilityClass {
    /// Numeric class value as stored in the raster (1-5)
    pub fn class_value(&self) -> i32 {
        match self {
            SusceptibilityClass::VeryLow => 1,
            SusceptibilityClass::Low => 2,
            SusceptibilityClass::Moderate => 3,
            SusceptibilityClass::High => 4,
            SusceptibilityClass::VeryHigh => 5,
        }
    }

    /// Zero-based index for array-backed per-class tables
    pub fn index(&self) -> usize {
        (self.class_value() - 1) as usize
    }

    /// Map a raster class value back to its class, `None` outside 1-5
    pub fn from_class_value(value: i32) -> Option<Self> {
        match value {
            1 => Some(SusceptibilityClass::VeryLow),
            2 => Some(SusceptibilityClass::Low),
            3 => Some(SusceptibilityClass::Moderate),
            4 => Some(SusceptibilityClass::High),
            5 => Some(SusceptibilityClass::VeryHigh),
            _ => None,
        }
    }

    /// Chart/series label
    pub fn label(&self) -> &'static str {
        match self {
            SusceptibilityClass::VeryLow => "Very Low",
            SusceptibilityClass::Low => "Low",
            SusceptibilityClass::Moderate => "Moderate",
            SusceptibilityClass::High => "High",
            SusceptibilityClass::VeryHigh => "Very High",
        }
    }

    /// Map-legend label
    pub fn legend_label(&self) -> &'static str {
        match self {
            SusceptibilityClass::VeryLow => "Very Low Flood",
            SusceptibilityClass::Low => "Low Flood",
            SusceptibilityClass::Moderate => "Moderate Flood",
            SusceptibilityClass::High => "High Flood",
            SusceptibilityClass::VeryHigh => "Very High Flood",
        }
    }

    /// Fixed display color, shared by map raster and chart slices
    pub fn color(&self) -> &'static str {
        match self {
            SusceptibilityClass::VeryLow => "#147218",
            SusceptibilityClass::Low => "#7cb815",
            SusceptibilityClass::Moderate => "#f2fe2a",
            SusceptibilityClass::High => "#ffac18",
            SusceptibilityClass::VeryHigh => "#fe3c19",
        }
    }

    /// All classes in severity order
    pub fn all() -> &'static [SusceptibilityClass; 5] {
        &[
            SusceptibilityClass::VeryLow,
            SusceptibilityClass::Low,
            SusceptibilityClass::Moderate,
            SusceptibilityClass::High,
            SusceptibilityClass::VeryHigh,
        ]
    }
}

impl fmt::Display for SusceptibilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
