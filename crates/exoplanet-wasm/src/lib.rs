//! WASM bindings for exoplanet habitability scoring.
//!
//! Exposes the scoring and star-system aggregation to the browser charts.
//! Planet records are passed exactly as returned by `/api/planets`.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, { score_planets, aggregate_planets } from 'exoplanet-wasm';
//!
//! await init();
//!
//! const planets = await (await fetch('/api/planets')).json();
//! const scored = score_planets(planets);
//! const systems = aggregate_planets(planets);
//! console.log(`${systems.length} systems, best: ${systems[0].name}`);
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

mod scoring;
mod systems;

#[wasm_bindgen(typescript_custom_section)]
const TS_TYPES: &'static str = r#"
/** Planet record as served by /api/planets; every field is optional */
export type PlanetRecord = Record<string, unknown>;
/** Habitability score in [0, 1] */
export type Habitability = number;
"#;

/// Plain JS objects (not `Map`) for structs and maps, `null` for `None`
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}
