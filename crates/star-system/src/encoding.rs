//! Visual encodings for the star map
//!
//! Color follows habitability on a linear pale-yellow to green ramp; marker
//! size follows the largest planet radius on a square-root scale so marker
//! area grows with radius.

use habitability::ScoredPlanet;
use serde::{Deserialize, Serialize};
use stellar::StellarColor;

use crate::system::StarSystem;

/// Marker radius range in pixels
pub const MARKER_RADIUS_RANGE: (f64, f64) = (4.0, 15.0);

/// Linear interpolation between two colors over [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScale {
    pub from: StellarColor,
    pub to: StellarColor,
}

impl ColorScale {
    pub const fn linear(from: StellarColor, to: StellarColor) -> Self {
        Self { from, to }
    }

    /// Habitability ramp: #EFE490 at 0, #6EBF11 at 1
    pub const fn habitability() -> Self {
        Self::linear(
            StellarColor::new(0xEF, 0xE4, 0x90),
            StellarColor::new(0x6E, 0xBF, 0x11),
        )
    }

    /// Color at `t`, clamped to [0, 1]
    pub fn color(&self, t: f64) -> StellarColor {
        self.from.lerp(&self.to, t)
    }

    pub fn hex(&self, t: f64) -> String {
        self.color(t).to_hex()
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::habitability()
    }
}

/// Square-root scale from a value domain to an output range
///
/// Output is clamped to the range. A degenerate domain (equal endpoints or
/// non-finite values) maps everything to the start of the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SqrtScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl SqrtScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let lo = signed_sqrt(self.domain.0);
        let hi = signed_sqrt(self.domain.1);
        let span = hi - lo;

        if !span.is_finite() || span == 0.0 || !value.is_finite() {
            return self.range.0;
        }

        let t = ((signed_sqrt(value) - lo) / span).clamp(0.0, 1.0);
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

fn signed_sqrt(x: f64) -> f64 {
    x.signum() * x.abs().sqrt()
}

/// What the star map needs to draw one system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemEncoding {
    pub name: String,
    pub planet_count: usize,
    pub mean_habitability: f64,
    /// Fill color as `#RRGGBB`
    pub color: String,
    /// Marker radius in pixels
    pub marker_radius: f64,
}

/// Encode systems for drawing, preserving their order
///
/// Marker radii scale from zero up to the largest `max_radius` among the
/// given systems.
pub fn encode_systems(systems: &[StarSystem]) -> Vec<SystemEncoding> {
    let largest = systems.iter().map(|s| s.max_radius).fold(0.0, f64::max);
    let size = SqrtScale::new((0.0, largest), MARKER_RADIUS_RANGE);
    let color = ColorScale::habitability();

    systems
        .iter()
        .map(|system| SystemEncoding {
            name: system.name.clone(),
            planet_count: system.planet_count(),
            mean_habitability: system.mean_habitability,
            color: color.hex(system.mean_habitability),
            marker_radius: size.apply(system.max_radius),
        })
        .collect()
}

/// Fill color for a single planet's habitability
pub fn planet_color(planet: &ScoredPlanet) -> String {
    ColorScale::habitability().hex(planet.habitability())
}
