//! Dataset selections used by the chart views.

use std::collections::HashSet;

use crate::record::PlanetRecord;

/// Label used for planets without a note
pub const NO_NOTE_LABEL: &str = "None";

/// Note-based selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NoteFilter {
    #[default]
    All,
    /// Exact match on the note text. [`NO_NOTE_LABEL`] matches planets
    /// without a note.
    Exact(String),
}

impl NoteFilter {
    pub fn matches(&self, record: &PlanetRecord) -> bool {
        match self {
            NoteFilter::All => true,
            NoteFilter::Exact(wanted) => note_label(record) == wanted,
        }
    }
}

fn note_label(record: &PlanetRecord) -> &str {
    record.note.as_deref().unwrap_or(NO_NOTE_LABEL)
}

fn present_nonzero(value: Option<f64>) -> bool {
    value.is_some_and(|v| v != 0.0)
}

/// Planets with non-zero temperature, flux, and radius
///
/// These are the planets that can be placed on the temperature/flux chart.
pub fn with_complete_measurements<'a, I>(records: I) -> Vec<&'a PlanetRecord>
where
    I: IntoIterator<Item = &'a PlanetRecord>,
{
    records
        .into_iter()
        .filter(|p| {
            present_nonzero(p.teq_kelvin)
                && present_nonzero(p.flux_earth)
                && present_nonzero(p.radius_earth)
        })
        .collect()
}

/// Planets whose flux lies within `[min, max]` (F⊕, inclusive)
///
/// Planets without a flux value are excluded.
pub fn within_flux_range<'a, I>(records: I, min: f64, max: f64) -> Vec<&'a PlanetRecord>
where
    I: IntoIterator<Item = &'a PlanetRecord>,
{
    records
        .into_iter()
        .filter(|p| p.flux_earth.is_some_and(|flux| flux >= min && flux <= max))
        .collect()
}

/// Distinct note labels in first-seen order
///
/// Planets without a note contribute [`NO_NOTE_LABEL`].
pub fn distinct_notes<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a PlanetRecord>,
{
    let mut seen = HashSet::new();
    records
        .into_iter()
        .map(note_label)
        .filter(|label| seen.insert(*label))
        .map(str::to_string)
        .collect()
}

/// Planets matching a note filter
pub fn with_note<'a, I>(records: I, filter: &NoteFilter) -> Vec<&'a PlanetRecord>
where
    I: IntoIterator<Item = &'a PlanetRecord>,
{
    records.into_iter().filter(|p| filter.matches(p)).collect()
}

/// Planets whose designation is in `names`, in catalog order
///
/// Every record carrying a selected designation is returned, so duplicate
/// designations in the catalog all appear.
pub fn select_by_names<'a, I, S>(records: I, names: &[S]) -> Vec<&'a PlanetRecord>
where
    I: IntoIterator<Item = &'a PlanetRecord>,
    S: AsRef<str>,
{
    let wanted: HashSet<&str> = names.iter().map(AsRef::as_ref).collect();
    records
        .into_iter()
        .filter(|p| p.object.as_deref().is_some_and(|name| wanted.contains(name)))
        .collect()
}
