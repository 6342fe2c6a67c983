//! Reading catalogs from JSON.
//!
//! The expected input is the array served by `/api/planets`: one object per
//! planet. Array entries that are not objects carry no usable fields and are
//! skipped with a warning.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::error::CatalogError;
use crate::record::PlanetRecord;

/// Parse a catalog from a JSON string
///
/// # Examples
/// ```
/// use catalog::load_planets_from_str;
///
/// let planets = load_planets_from_str(r#"[{"Object": "55 Cnc e", "Star": "55 Cnc"}]"#).unwrap();
/// assert_eq!(planets.len(), 1);
/// ```
pub fn load_planets_from_str(json: &str) -> Result<Vec<PlanetRecord>, CatalogError> {
    records_from_value(serde_json::from_str(json)?)
}

/// Parse a catalog from any reader
pub fn load_planets_from_reader<R: Read>(reader: R) -> Result<Vec<PlanetRecord>, CatalogError> {
    records_from_value(serde_json::from_reader(reader)?)
}

/// Read and parse a catalog file
pub fn load_planets_from_path(path: impl AsRef<Path>) -> Result<Vec<PlanetRecord>, CatalogError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let planets = load_planets_from_reader(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), count = planets.len(), "loaded planet catalog");
    Ok(planets)
}

fn records_from_value(value: Value) -> Result<Vec<PlanetRecord>, CatalogError> {
    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(CatalogError::NotAnArray {
                found: json_kind(&other),
            });
        }
    };

    let mut planets = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        if !entry.is_object() {
            tracing::warn!(index, kind = json_kind(&entry), "skipping non-object catalog entry");
            continue;
        }
        let record = serde_json::from_value(entry)
            .map_err(|source| CatalogError::Record { index, source })?;
        planets.push(record);
    }

    tracing::debug!(count = planets.len(), "decoded planet records");
    Ok(planets)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
