//! Per-star grouping of scored planets

use std::collections::HashMap;

use catalog::PlanetRecord;
use habitability::{HabitabilityModel, ScoredPlanet};
use serde::{Deserialize, Serialize};
use stellar::SpectralClass;

/// Name given to the group of planets with no host star recorded
pub const UNKNOWN_STAR_NAME: &str = "Unknown";

/// All catalog planets orbiting one host star
///
/// A star system is a derived view: it is rebuilt from the planet list by
/// [`aggregate`] and has no identity beyond its star name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    /// Host star designation, or [`UNKNOWN_STAR_NAME`]
    pub name: String,

    /// False for the bucket of planets whose star is missing
    pub identified: bool,

    /// Star type as recorded on the first planet
    pub star_type: Option<String>,

    /// Constellation as recorded on the first planet
    pub constellation: Option<String>,

    /// Member planets in catalog order
    pub planets: Vec<ScoredPlanet>,

    /// Arithmetic mean of member habitability scores
    pub mean_habitability: f64,

    /// Largest member radius (R⊕), counting missing radii as zero
    pub max_radius: f64,

    /// Share of members whose catalog note calls them habitable
    pub noted_habitable_fraction: f64,
}

impl StarSystem {
    /// Summarize a non-empty group of planets sharing a host star
    fn from_members(star: Option<&str>, planets: Vec<ScoredPlanet>) -> Self {
        let count = planets.len() as f64;
        let mean_habitability = planets.iter().map(|p| p.habitability()).sum::<f64>() / count;
        let max_radius = planets
            .iter()
            .map(|p| p.record().radius_earth.unwrap_or(0.0))
            .reduce(f64::max)
            .unwrap_or(0.0);
        let noted = planets
            .iter()
            .filter(|p| p.record().is_noted_habitable())
            .count();

        let first = planets.first().map(|p| p.record());

        Self {
            name: star.unwrap_or(UNKNOWN_STAR_NAME).to_string(),
            identified: star.is_some(),
            star_type: first.and_then(|r| r.star_type.clone()),
            constellation: first.and_then(|r| r.constellation.clone()),
            noted_habitable_fraction: noted as f64 / count,
            mean_habitability,
            max_radius,
            planets,
        }
    }

    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    /// Spectral class of the host star, if recognizable
    pub fn spectral_class(&self) -> Option<SpectralClass> {
        self.star_type
            .as_deref()
            .and_then(SpectralClass::from_star_type)
    }

    /// Non-empty member notes in catalog order
    pub fn notes(&self) -> Vec<&str> {
        self.planets
            .iter()
            .filter_map(|p| p.record().note.as_deref())
            .filter(|note| !note.is_empty())
            .collect()
    }

    /// Highest-scoring member; the earliest wins ties
    pub fn most_habitable(&self) -> Option<&ScoredPlanet> {
        self.planets.iter().reduce(|best, p| {
            if p.habitability() > best.habitability() {
                p
            } else {
                best
            }
        })
    }
}

/// Group planets into star systems under the reference model
///
/// Systems appear in the order their star is first seen. Planets with no
/// `Star` share a single [`UNKNOWN_STAR_NAME`] system.
///
/// # Examples
///
/// ```
/// use catalog::PlanetRecord;
/// use star_system::aggregate;
///
/// let planets = vec![
///     PlanetRecord::new("Kepler-42 b").with_star("Kepler-42").with_radius(0.78),
///     PlanetRecord::new("Kepler-22 b").with_star("Kepler-22").with_radius(2.1),
///     PlanetRecord::new("Kepler-42 c").with_star("Kepler-42").with_radius(0.73),
/// ];
///
/// let systems = aggregate(&planets);
/// assert_eq!(systems.len(), 2);
/// assert_eq!(systems[0].name, "Kepler-42");
/// assert_eq!(systems[0].planet_count(), 2);
/// ```
pub fn aggregate<'a, I>(records: I) -> Vec<StarSystem>
where
    I: IntoIterator<Item = &'a PlanetRecord>,
{
    aggregate_with(&HabitabilityModel::default(), records)
}

/// Group planets into star systems, scoring with `model`
pub fn aggregate_with<'a, I>(model: &HabitabilityModel, records: I) -> Vec<StarSystem>
where
    I: IntoIterator<Item = &'a PlanetRecord>,
{
    let mut slots: HashMap<Option<&'a str>, usize> = HashMap::new();
    let mut groups: Vec<(Option<&'a str>, Vec<ScoredPlanet>)> = Vec::new();
    let mut planet_count = 0usize;

    for record in records {
        let star = record.star.as_deref().filter(|s| !s.is_empty());
        let slot = *slots.entry(star).or_insert_with(|| {
            groups.push((star, Vec::new()));
            groups.len() - 1
        });
        groups[slot]
            .1
            .push(ScoredPlanet::with_model(model, record.clone()));
        planet_count += 1;
    }

    tracing::debug!(
        planets = planet_count,
        systems = groups.len(),
        "aggregated star systems"
    );

    groups
        .into_iter()
        .map(|(star, planets)| StarSystem::from_members(star, planets))
        .collect()
}

/// Order systems by descending mean habitability
///
/// The sort is stable, so systems with equal scores keep catalog order.
pub fn rank_by_habitability(systems: &mut [StarSystem]) {
    systems.sort_by(|a, b| b.mean_habitability.total_cmp(&a.mean_habitability));
}
