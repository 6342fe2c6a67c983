//! Weighted habitability score.

use catalog::PlanetRecord;
use serde::{Deserialize, Serialize};

use crate::model::HabitabilityModel;
use crate::normalize::NormalizedInputs;

/// Each factor's suitability alongside the final score
///
/// Factor values are unweighted, in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub star_type: f64,
    pub radius: f64,
    pub temperature: f64,
    pub flux: f64,
    pub period: f64,
    pub habitability: f64,
}

/// Habitability of a planet under the reference model, in [0, 1]
pub fn score(planet: &PlanetRecord) -> f64 {
    HabitabilityModel::default().score(planet)
}

/// Per-factor scores under the reference model
pub fn score_breakdown(planet: &PlanetRecord) -> ScoreBreakdown {
    HabitabilityModel::default().score_breakdown(planet)
}

impl HabitabilityModel {
    /// Habitability of a planet under this model, in [0, 1]
    ///
    /// Total over all records: missing or malformed fields are defaulted by
    /// [`NormalizedInputs`] and never produce NaN for a validated model.
    pub fn score(&self, planet: &PlanetRecord) -> f64 {
        self.score_breakdown(planet).habitability
    }

    /// Per-factor scores under this model
    pub fn score_breakdown(&self, planet: &PlanetRecord) -> ScoreBreakdown {
        let inputs = NormalizedInputs::from_record(planet, self);
        self.score_inputs(&inputs)
    }

    /// Score already-normalized inputs
    pub fn score_inputs(&self, inputs: &NormalizedInputs) -> ScoreBreakdown {
        let star_type = self.star_type.suitability(inputs.spectral_class);
        let radius = self.radius.suitability(inputs.radius_earth);
        let temperature = self.temperature.suitability(inputs.teq_kelvin);
        let flux = self.flux.suitability(inputs.flux_earth);
        let period = self.period.suitability(inputs.period_days);

        let w = &self.weights;
        // Summation order keeps the ideal cases exact (1.0 and 0.75)
        let weighted = w.star_type * star_type
            + w.radius * radius
            + w.temperature * temperature
            + w.period * period
            + w.flux * flux;

        ScoreBreakdown {
            star_type,
            radius,
            temperature,
            flux,
            period,
            habitability: weighted.clamp(0.0, 1.0),
        }
    }
}
