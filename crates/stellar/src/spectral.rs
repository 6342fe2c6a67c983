use std::fmt;

use serde::{Deserialize, Serialize};

/// Main-sequence spectral class of a host star.
///
/// Catalog star types arrive as free-form strings ("G2V", "k1", "M4.5 V").
/// Only the leading letter is significant here; anything outside the
/// O-B-A-F-G-K-M sequence is treated as unclassified by callers.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralClass {
    /// All classes, hottest first.
    pub const ALL: [SpectralClass; 7] = [
        SpectralClass::O,
        SpectralClass::B,
        SpectralClass::A,
        SpectralClass::F,
        SpectralClass::G,
        SpectralClass::K,
        SpectralClass::M,
    ];

    /// Parse the class from the first character of a star type string.
    ///
    /// Case-insensitive. Leading whitespace is not skipped, matching how the
    /// catalog strings are keyed.
    ///
    /// # Examples
    /// ```
    /// use stellar::SpectralClass;
    ///
    /// assert_eq!(SpectralClass::from_star_type("G2V"), Some(SpectralClass::G));
    /// assert_eq!(SpectralClass::from_star_type("m4.5"), Some(SpectralClass::M));
    /// assert_eq!(SpectralClass::from_star_type("DA"), None);
    /// assert_eq!(SpectralClass::from_star_type(""), None);
    /// ```
    pub fn from_star_type(star_type: &str) -> Option<Self> {
        let first = star_type.chars().next()?;
        Self::from_letter(first)
    }

    /// Parse a single class letter (case-insensitive).
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'O' => Some(SpectralClass::O),
            'B' => Some(SpectralClass::B),
            'A' => Some(SpectralClass::A),
            'F' => Some(SpectralClass::F),
            'G' => Some(SpectralClass::G),
            'K' => Some(SpectralClass::K),
            'M' => Some(SpectralClass::M),
            _ => None,
        }
    }

    /// The class letter as an uppercase char
    pub fn letter(&self) -> char {
        match self {
            SpectralClass::O => 'O',
            SpectralClass::B => 'B',
            SpectralClass::A => 'A',
            SpectralClass::F => 'F',
            SpectralClass::G => 'G',
            SpectralClass::K => 'K',
            SpectralClass::M => 'M',
        }
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
