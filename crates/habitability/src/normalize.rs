//! Default substitution ahead of scoring.
//!
//! All missing-value policy lives here. Radius, temperature, and flux fall
//! back to their curve's ideal value, which maximizes that factor rather than
//! penalizing incomplete data. Period falls back to the model's default
//! period whenever it is missing, zero, or negative.

use catalog::PlanetRecord;
use stellar::SpectralClass;

use crate::model::HabitabilityModel;

/// Scoring inputs with every default already applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedInputs {
    pub spectral_class: Option<SpectralClass>,
    pub radius_earth: f64,
    pub teq_kelvin: f64,
    pub flux_earth: f64,
    /// Always finite and positive
    pub period_days: f64,
}

impl NormalizedInputs {
    pub fn from_record(record: &PlanetRecord, model: &HabitabilityModel) -> Self {
        Self {
            spectral_class: record
                .star_type
                .as_deref()
                .and_then(SpectralClass::from_star_type),
            radius_earth: finite_or(record.radius_earth, model.radius.ideal),
            teq_kelvin: finite_or(record.teq_kelvin, model.temperature.ideal),
            flux_earth: finite_or(record.flux_earth, model.flux.ideal),
            period_days: record
                .period_days
                .filter(|p| p.is_finite() && *p > 0.0)
                .unwrap_or(model.period.default_days),
        }
    }
}

fn finite_or(value: Option<f64>, fallback: f64) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(fallback)
}
