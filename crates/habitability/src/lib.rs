//! Habitability scoring for catalog exoplanets.
//!
//! A planet's score is a weighted sum of five sub-scores in [0, 1]:
//!
//! | factor      | curve                                   | weight |
//! |-------------|-----------------------------------------|--------|
//! | star type   | table lookup on spectral class          | 0.25   |
//! | radius      | `1 - ((R - 1.1) / 0.3)²`                | 0.20   |
//! | temperature | `1 - ((Teq - 265) / 65)²`               | 0.20   |
//! | flux        | `1 - ((F - 0.9) / 0.6)²`                | 0.20   |
//! | period      | `1 - (ln(P / 100) / 3)²`                | 0.15   |
//!
//! Each curve is floored at zero and the weighted sum is clamped to [0, 1].
//! Missing or malformed measurements are replaced before scoring (see
//! [`NormalizedInputs`]), so scoring never fails and never yields NaN.
//!
//! ```
//! use catalog::PlanetRecord;
//! use habitability::score;
//!
//! let earth_twin = PlanetRecord::new("twin")
//!     .with_star_type("G2V")
//!     .with_radius(1.1)
//!     .with_teq(265.0)
//!     .with_flux(0.9)
//!     .with_period(100.0);
//!
//! assert_eq!(score(&earth_twin), 1.0);
//! ```

pub mod model;
pub mod normalize;
pub mod score;
pub mod scored;

#[cfg(test)]
mod normalize_test;
#[cfg(test)]
mod score_test;

pub use model::{
    BellCurve, FactorWeights, HabitabilityModel, ModelError, PeriodCurve, StarTypeTable,
};
pub use normalize::NormalizedInputs;
pub use score::{ScoreBreakdown, score, score_breakdown};
pub use scored::{ScoredPlanet, score_all};
