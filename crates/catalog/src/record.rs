//! Planet records as served by the catalog endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::numeric::{optional_number, optional_text, parse_number};

/// One row of the exoplanet catalog.
///
/// Field names on the wire are the catalog's column headers. Every field is
/// optional: missing, null, and malformed values all deserialize to `None`.
/// Columns this type does not model are kept in [`PlanetRecord::extra`] and
/// written back out unchanged.
///
/// # Examples
///
/// ```
/// use catalog::PlanetRecord;
///
/// let record: PlanetRecord = serde_json::from_str(
///     r#"{"Object": "Kepler-442 b", "Star": "Kepler-442", "Radius (R⊕)": "1.34"}"#,
/// ).unwrap();
///
/// assert_eq!(record.star.as_deref(), Some("Kepler-442"));
/// assert_eq!(record.radius_earth, Some(1.34));
/// assert_eq!(record.teq_kelvin, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanetRecord {
    /// Planet designation
    #[serde(
        rename = "Object",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_text"
    )]
    pub object: Option<String>,

    /// Host star designation, used as the grouping key for star systems
    #[serde(
        rename = "Star",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_text"
    )]
    pub star: Option<String>,

    /// Spectral type string, e.g. "G2V" or "M4.5"
    #[serde(
        rename = "Star type",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_text"
    )]
    pub star_type: Option<String>,

    /// Planet radius (R⊕)
    #[serde(
        rename = "Radius (R⊕)",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_number"
    )]
    pub radius_earth: Option<f64>,

    /// Planet mass (M⊕)
    #[serde(
        rename = "Mass (M⊕)",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_number"
    )]
    pub mass_earth: Option<f64>,

    /// Equilibrium temperature (K)
    #[serde(
        rename = "Teq (K)",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_number"
    )]
    pub teq_kelvin: Option<f64>,

    /// Incident stellar flux relative to Earth (F⊕)
    #[serde(
        rename = "Flux (F⊕)",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_number"
    )]
    pub flux_earth: Option<f64>,

    /// Orbital period (days)
    #[serde(
        rename = "Period (days)",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_number"
    )]
    pub period_days: Option<f64>,

    /// Distance from Earth as displayed (light years)
    #[serde(
        rename = "Distance (ly)",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_text"
    )]
    pub distance_ly: Option<String>,

    #[serde(
        rename = "Constellation",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_text"
    )]
    pub constellation: Option<String>,

    /// Free-form annotation, e.g. "Potentially habitable"
    #[serde(
        rename = "Note",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_text"
    )]
    pub note: Option<String>,

    /// Columns not modeled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlanetRecord {
    /// Create a record with only its designation set
    pub fn new(object: impl Into<String>) -> Self {
        Self {
            object: Some(object.into()),
            ..Self::default()
        }
    }

    pub fn with_star(mut self, star: impl Into<String>) -> Self {
        self.star = Some(star.into());
        self
    }

    pub fn with_star_type(mut self, star_type: impl Into<String>) -> Self {
        self.star_type = Some(star_type.into());
        self
    }

    pub fn with_radius(mut self, radius_earth: f64) -> Self {
        self.radius_earth = Some(radius_earth);
        self
    }

    pub fn with_mass(mut self, mass_earth: f64) -> Self {
        self.mass_earth = Some(mass_earth);
        self
    }

    pub fn with_teq(mut self, teq_kelvin: f64) -> Self {
        self.teq_kelvin = Some(teq_kelvin);
        self
    }

    pub fn with_flux(mut self, flux_earth: f64) -> Self {
        self.flux_earth = Some(flux_earth);
        self
    }

    pub fn with_period(mut self, period_days: f64) -> Self {
        self.period_days = Some(period_days);
        self
    }

    pub fn with_distance(mut self, distance_ly: impl Into<String>) -> Self {
        self.distance_ly = Some(distance_ly.into());
        self
    }

    pub fn with_constellation(mut self, constellation: impl Into<String>) -> Self {
        self.constellation = Some(constellation.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Whether the catalog note flags this planet as habitable
    ///
    /// Case-insensitive substring match on "habitable", so "Potentially
    /// Habitable" and "habitable zone" both count.
    pub fn is_noted_habitable(&self) -> bool {
        self.note
            .as_deref()
            .is_some_and(|note| note.to_lowercase().contains("habitable"))
    }

    /// Distance parsed as a number of light years, if it is numeric
    pub fn distance_ly_value(&self) -> Option<f64> {
        self.distance_ly.as_deref().and_then(parse_number)
    }

    /// Designation for display, falling back to a placeholder
    pub fn display_name(&self) -> &str {
        self.object.as_deref().unwrap_or("Unnamed")
    }
}
