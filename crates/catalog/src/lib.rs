//! Exoplanet catalog records.
//!
//! Records arrive as JSON objects keyed by human-readable column names
//! (`"Radius (R⊕)"`, `"Teq (K)"`, ...). Any field may be absent, null, or of
//! the wrong type; this crate normalizes those cases to `None` at the
//! deserialization boundary so downstream code never sees NaN.

pub mod comparison;
pub mod error;
pub mod filter;
pub mod load;
pub mod numeric;
pub mod record;

#[cfg(test)]
mod filter_test;

pub use comparison::{COMPARISON_AXES, ComparisonProfile, comparison_profiles};
pub use error::CatalogError;
pub use filter::{
    NO_NOTE_LABEL, NoteFilter, distinct_notes, select_by_names, with_complete_measurements,
    with_note, within_flux_range,
};
pub use load::{load_planets_from_path, load_planets_from_reader, load_planets_from_str};
pub use record::PlanetRecord;
