use catalog::PlanetRecord;
use serde::{Deserialize, Serialize};

use crate::model::HabitabilityModel;

/// A catalog record with its habitability score
///
/// Read-only once built, so the score always matches the record. Serializes
/// as the record's own columns plus a `habitability` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPlanet {
    #[serde(flatten)]
    record: PlanetRecord,
    habitability: f64,
}

impl ScoredPlanet {
    /// Score a record under the reference model
    pub fn from_record(record: PlanetRecord) -> Self {
        Self::with_model(&HabitabilityModel::default(), record)
    }

    pub fn with_model(model: &HabitabilityModel, record: PlanetRecord) -> Self {
        let habitability = model.score(&record);
        Self {
            record,
            habitability,
        }
    }

    pub fn record(&self) -> &PlanetRecord {
        &self.record
    }

    /// Habitability score in [0, 1]
    pub fn habitability(&self) -> f64 {
        self.habitability
    }

    /// Give back the record, dropping the score
    pub fn into_record(self) -> PlanetRecord {
        self.record
    }
}

/// Score every record under the given model, preserving order
pub fn score_all<'a, I>(model: &HabitabilityModel, records: I) -> Vec<ScoredPlanet>
where
    I: IntoIterator<Item = &'a PlanetRecord>,
{
    records
        .into_iter()
        .map(|record| ScoredPlanet::with_model(model, record.clone()))
        .collect()
}
