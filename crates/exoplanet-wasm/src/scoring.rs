//! Per-planet scoring bindings.

use catalog::PlanetRecord;
use habitability::{HabitabilityModel, score, score_all, score_breakdown};
use star_system::ColorScale;
use wasm_bindgen::prelude::*;

use crate::{from_js, to_js};

/// Habitability score in [0, 1] for one planet record.
#[wasm_bindgen]
pub fn score_planet(record: JsValue) -> Result<f64, JsError> {
    let record: PlanetRecord = from_js(record)?;
    Ok(score(&record))
}

/// Per-factor scores for one planet record.
///
/// Returns `{ starType, radius, temperature, flux, period, habitability }`.
#[wasm_bindgen(js_name = score_breakdown)]
pub fn planet_score_breakdown(record: JsValue) -> Result<JsValue, JsError> {
    let record: PlanetRecord = from_js(record)?;
    to_js(&score_breakdown(&record))
}

/// Score an array of planet records.
///
/// Returns the records in the same order, each with a `habitability` key added.
#[wasm_bindgen]
pub fn score_planets(records: JsValue) -> Result<JsValue, JsError> {
    let records: Vec<PlanetRecord> = from_js(records)?;
    to_js(&score_all(&HabitabilityModel::default(), &records))
}

/// Score an array of planet records under a model given as TOML.
#[wasm_bindgen]
pub fn score_planets_with_model(records: JsValue, model_toml: &str) -> Result<JsValue, JsError> {
    let model = HabitabilityModel::from_toml_str(model_toml)
        .map_err(|e| JsError::new(&e.to_string()))?;
    let records: Vec<PlanetRecord> = from_js(records)?;
    to_js(&score_all(&model, &records))
}

/// Fill color (`#RRGGBB`) for a habitability score.
#[wasm_bindgen]
pub fn habitability_color(score: f64) -> String {
    ColorScale::habitability().hex(score)
}
