use serde::{Deserialize, Serialize};

use crate::spectral::SpectralClass;

/// RGB color used when encoding stars and planets for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StellarColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Failure to parse a `#RRGGBB` string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("invalid hex color length: {0}")]
    Length(String),

    #[error("invalid {channel} component: {value}")]
    Component {
        channel: &'static str,
        value: String,
    },
}

impl StellarColor {
    /// Fallback for star types with no recognizable class letter
    pub const UNCLASSIFIED: StellarColor = StellarColor::new(199, 199, 199);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Display color for a spectral class
    ///
    /// O/B are blue, A is white, F is yellow-white, G is yellow, K is orange,
    /// M is red.
    pub const fn for_class(class: SpectralClass) -> Self {
        match class {
            SpectralClass::O => Self::new(0, 191, 255),
            SpectralClass::B => Self::new(135, 206, 235),
            SpectralClass::A => Self::new(255, 255, 255),
            SpectralClass::F => Self::new(255, 255, 224),
            SpectralClass::G => Self::new(255, 215, 0),
            SpectralClass::K => Self::new(255, 165, 0),
            SpectralClass::M => Self::new(255, 0, 0),
        }
    }

    /// Display color for a raw catalog star type string
    ///
    /// Unlike [`SpectralClass::from_star_type`], this matches a class letter
    /// anywhere in the string, checking hottest classes first, so `"sdB"`
    /// colors as B. Matching is case-sensitive.
    pub fn for_star_type(star_type: &str) -> Self {
        SpectralClass::ALL
            .into_iter()
            .find(|class| star_type.contains(class.letter()))
            .map(Self::for_class)
            .unwrap_or(Self::UNCLASSIFIED)
    }

    /// Linear interpolation toward `other`
    ///
    /// `t` is clamped to [0, 1]; NaN is treated as 0.
    pub fn lerp(&self, other: &StellarColor, t: f64) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Returns the color as a hex string (e.g., "#FF9944")
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse a hex color string (e.g., "#FF9944" or "ff9944")
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let s = s.strip_prefix('#').unwrap_or(s);

        if s.len() != 6 || !s.is_ascii() {
            return Err(ParseColorError::Length(s.to_string()));
        }

        let component = |channel: &'static str, range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range.clone()], 16).map_err(|_| ParseColorError::Component {
                channel,
                value: s[range].to_string(),
            })
        };

        Ok(Self {
            r: component("red", 0..2)?,
            g: component("green", 2..4)?,
            b: component("blue", 4..6)?,
        })
    }
}
