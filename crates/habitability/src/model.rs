//! Scoring model parameters.
//!
//! [`HabitabilityModel::default`] is the reference model. Alternate models can
//! be loaded from TOML; any section left out keeps its default. Within the
//! `weights`, `star_type`, and `period` sections individual keys may be
//! omitted; the bell-curve sections need both `ideal` and `width`.
//!
//! ```toml
//! [weights]
//! star_type = 0.3
//! period = 0.1
//!
//! [temperature]
//! ideal = 288.0
//! width = 50.0
//! ```

use serde::{Deserialize, Serialize};
use stellar::SpectralClass;

/// Errors from loading or validating a model
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid model TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to encode model as TOML: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("{field} must be {requirement}, got {value}")]
    InvalidParameter {
        field: &'static str,
        requirement: &'static str,
        value: f64,
    },
}

/// Inverted parabola centred on an ideal value
///
/// `suitability(x) = max(0, 1 - ((x - ideal) / width)²)`. The curve reaches
/// zero at `ideal ± width`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BellCurve {
    pub ideal: f64,
    pub width: f64,
}

impl BellCurve {
    pub const fn new(ideal: f64, width: f64) -> Self {
        Self { ideal, width }
    }

    pub fn suitability(&self, value: f64) -> f64 {
        let z = (value - self.ideal) / self.width;
        (1.0 - z * z).max(0.0)
    }
}

/// Log-scale bell curve for orbital period
///
/// `suitability(P) = max(0, 1 - (ln(P / reference) / log_width)²)`.
/// `default_days` substitutes for missing or non-positive periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodCurve {
    pub reference_days: f64,
    pub log_width: f64,
    pub default_days: f64,
}

impl Default for PeriodCurve {
    fn default() -> Self {
        Self {
            reference_days: 100.0,
            log_width: 3.0,
            default_days: 365.0,
        }
    }
}

impl PeriodCurve {
    /// Suitability of a period in days. Expects `period_days > 0`.
    pub fn suitability(&self, period_days: f64) -> f64 {
        let z = (period_days / self.reference_days).ln() / self.log_width;
        (1.0 - z * z).max(0.0)
    }
}

/// Host star suitability by spectral class
///
/// Hot O/B stars are too short-lived; late G and K dwarfs are favoured; M
/// dwarfs are penalised for flares and tidal locking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarTypeTable {
    pub o: f64,
    pub b: f64,
    pub a: f64,
    pub f: f64,
    pub g: f64,
    pub k: f64,
    pub m: f64,
    /// Score for missing or unrecognized star types
    pub unknown: f64,
}

impl Default for StarTypeTable {
    fn default() -> Self {
        Self {
            o: 0.0,
            b: 0.0,
            a: 0.1,
            f: 0.7,
            g: 1.0,
            k: 0.8,
            m: 0.3,
            unknown: 0.0,
        }
    }
}

impl StarTypeTable {
    pub fn suitability(&self, class: Option<SpectralClass>) -> f64 {
        match class {
            Some(SpectralClass::O) => self.o,
            Some(SpectralClass::B) => self.b,
            Some(SpectralClass::A) => self.a,
            Some(SpectralClass::F) => self.f,
            Some(SpectralClass::G) => self.g,
            Some(SpectralClass::K) => self.k,
            Some(SpectralClass::M) => self.m,
            None => self.unknown,
        }
    }

    fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("star_type.o", self.o),
            ("star_type.b", self.b),
            ("star_type.a", self.a),
            ("star_type.f", self.f),
            ("star_type.g", self.g),
            ("star_type.k", self.k),
            ("star_type.m", self.m),
            ("star_type.unknown", self.unknown),
        ]
    }
}

/// Relative weight of each factor in the final score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorWeights {
    pub star_type: f64,
    pub radius: f64,
    pub temperature: f64,
    pub flux: f64,
    pub period: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            star_type: 0.25,
            radius: 0.20,
            temperature: 0.20,
            flux: 0.20,
            period: 0.15,
        }
    }
}

impl FactorWeights {
    pub fn total(&self) -> f64 {
        self.star_type + self.radius + self.temperature + self.flux + self.period
    }

    fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("weights.star_type", self.star_type),
            ("weights.radius", self.radius),
            ("weights.temperature", self.temperature),
            ("weights.flux", self.flux),
            ("weights.period", self.period),
        ]
    }
}

/// Complete parameter set for habitability scoring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HabitabilityModel {
    pub weights: FactorWeights,
    pub star_type: StarTypeTable,
    /// Planet radius (R⊕)
    pub radius: BellCurve,
    /// Equilibrium temperature (K)
    pub temperature: BellCurve,
    /// Incident flux (F⊕)
    pub flux: BellCurve,
    pub period: PeriodCurve,
}

impl Default for HabitabilityModel {
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),
            star_type: StarTypeTable::default(),
            radius: BellCurve::new(1.1, 0.3),
            temperature: BellCurve::new(265.0, 65.0),
            flux: BellCurve::new(0.9, 0.6),
            period: PeriodCurve::default(),
        }
    }
}

impl HabitabilityModel {
    /// Parse and validate a model from TOML
    pub fn from_toml_str(source: &str) -> Result<Self, ModelError> {
        let model: Self = toml::from_str(source)?;
        model.validate()?;

        let total = model.weights.total();
        if (total - 1.0).abs() > 1e-9 {
            tracing::warn!(total, "factor weights do not sum to 1; scores will be clamped");
        }
        Ok(model)
    }

    /// Render the model as TOML
    pub fn to_toml_string(&self) -> Result<String, ModelError> {
        Ok(toml::to_string(self)?)
    }

    /// Check that every parameter keeps scores finite
    ///
    /// Weights and star-type scores must be finite and non-negative. Ideals
    /// must be finite. Widths, the period reference, and the default period
    /// must be finite and positive.
    pub fn validate(&self) -> Result<(), ModelError> {
        let weights = self.weights.entries().into_iter();
        for (field, value) in weights.chain(self.star_type.entries()) {
            let ok = value.is_finite() && value >= 0.0;
            require(field, "finite and non-negative", value, ok)?;
        }

        for (ideal_field, width_field, curve) in [
            ("radius.ideal", "radius.width", self.radius),
            ("temperature.ideal", "temperature.width", self.temperature),
            ("flux.ideal", "flux.width", self.flux),
        ] {
            require(ideal_field, "finite", curve.ideal, curve.ideal.is_finite())?;
            require(width_field, POSITIVE, curve.width, positive(curve.width))?;
        }

        for (field, value) in [
            ("period.reference_days", self.period.reference_days),
            ("period.log_width", self.period.log_width),
            ("period.default_days", self.period.default_days),
        ] {
            require(field, POSITIVE, value, positive(value))?;
        }

        Ok(())
    }
}

const POSITIVE: &str = "finite and positive";

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn require(
    field: &'static str,
    requirement: &'static str,
    value: f64,
    ok: bool,
) -> Result<(), ModelError> {
    if ok {
        Ok(())
    } else {
        Err(ModelError::InvalidParameter {
            field,
            requirement,
            value,
        })
    }
}
