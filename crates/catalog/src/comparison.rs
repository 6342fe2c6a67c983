//! Side-by-side planet comparison.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::filter::select_by_names;
use crate::record::PlanetRecord;

/// Axis labels of a comparison profile, in value order
pub const COMPARISON_AXES: [&str; 5] = [
    "Mass (M⊕)",
    "Radius (R⊕)",
    "Flux (F⊕)",
    "Temperature (K)",
    "Distance (ly)",
];

/// One planet's values along [`COMPARISON_AXES`]
///
/// Missing measurements stay `None`; the chart decides how to draw gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonProfile {
    pub label: String,
    pub values: [Option<f64>; 5],
}

impl ComparisonProfile {
    pub fn from_record(record: &PlanetRecord) -> Self {
        Self {
            label: record.display_name().to_string(),
            values: [
                record.mass_earth,
                record.radius_earth,
                record.flux_earth,
                record.teq_kelvin,
                record.distance_ly_value(),
            ],
        }
    }
}

/// Comparison profiles for the named planets, in catalog order
///
/// Names with no matching record are ignored. An empty name list is an
/// error; a non-empty list with no matches yields an empty result.
pub fn comparison_profiles<S: AsRef<str>>(
    records: &[PlanetRecord],
    names: &[S],
) -> Result<Vec<ComparisonProfile>, CatalogError> {
    if names.is_empty() {
        return Err(CatalogError::EmptySelection);
    }

    Ok(select_by_names(records, names)
        .into_iter()
        .map(ComparisonProfile::from_record)
        .collect())
}
