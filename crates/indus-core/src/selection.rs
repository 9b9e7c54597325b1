//! Selection state machine
//!
//! The province/district selection is an enum, so a district without a
//! province is unrepresentable. Transitions happen only through the
//! [`ViewController`](crate::controller::ViewController).

use crate::region::Region;

/// District options for the enabled district control
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DistrictOptions {
    /// The lazy fetch for this province is still in flight
    Loading,
    Ready(Vec<Region>),
}

impl DistrictOptions {
    pub fn as_slice(&self) -> &[Region] {
        match self {
            DistrictOptions::Loading => &[],
            DistrictOptions::Ready(districts) => districts,
        }
    }
}

/// Current (province, district) selection
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Selection {
    /// No selection; full-country map and the national chart strip
    #[default]
    Initial,
    /// Province chosen; district control enabled and empty
    ProvinceSelected {
        province: Region,
        options: DistrictOptions,
    },
    /// District chosen; district-clipped map and single district chart
    DistrictSelected {
        province: Region,
        district: Region,
        options: DistrictOptions,
    },
}

impl Selection {
    pub fn province(&self) -> Option<&Region> {
        match self {
            Selection::Initial => None,
            Selection::ProvinceSelected { province, .. }
            | Selection::DistrictSelected { province, .. } => Some(province),
        }
    }

    pub fn district(&self) -> Option<&Region> {
        match self {
            Selection::DistrictSelected { district, .. } => Some(district),
            _ => None,
        }
    }

    /// Whether the district control is enabled
    pub fn district_control_enabled(&self) -> bool {
        !matches!(self, Selection::Initial)
    }

    /// Options currently offered by the district control
    pub fn district_options(&self) -> &[Region] {
        match self {
            Selection::Initial => &[],
            Selection::ProvinceSelected { options, .. }
            | Selection::DistrictSelected { options, .. } => options.as_slice(),
        }
    }
}
