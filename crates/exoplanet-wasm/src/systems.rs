//! Star-system bindings for the star map.

use catalog::PlanetRecord;
use star_system::{aggregate, encode_systems, rank_by_habitability};
use wasm_bindgen::prelude::*;

use crate::{from_js, to_js};

/// Group planet records into star systems, in first-seen order.
///
/// Each system carries `name`, `planets`, `meanHabitability`, `maxRadius`,
/// and `notedHabitableFraction`.
#[wasm_bindgen]
pub fn aggregate_planets(records: JsValue) -> Result<JsValue, JsError> {
    let records: Vec<PlanetRecord> = from_js(records)?;
    to_js(&aggregate(&records))
}

/// Star systems sorted by descending mean habitability.
#[wasm_bindgen]
pub fn rank_star_systems(records: JsValue) -> Result<JsValue, JsError> {
    let records: Vec<PlanetRecord> = from_js(records)?;
    let mut systems = aggregate(&records);
    rank_by_habitability(&mut systems);
    to_js(&systems)
}

/// Color and marker size for each star system, in first-seen order.
#[wasm_bindgen]
pub fn encode_star_systems(records: JsValue) -> Result<JsValue, JsError> {
    let records: Vec<PlanetRecord> = from_js(records)?;
    to_js(&encode_systems(&aggregate(&records)))
}
