//! Lenient coercion for catalog fields.
//!
//! Catalog exports are loosely typed: numbers may arrive as JSON numbers or
//! as strings, and text columns occasionally hold numbers. Values that cannot
//! be interpreted become `None`.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Any JSON scalar or structure, sorted into what we can use.
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl Loose {
    fn into_number(self) -> Option<f64> {
        match self {
            Loose::Number(value) => finite(value),
            Loose::Text(text) => parse_number(&text),
            Loose::Other(_) => None,
        }
    }

    fn into_text(self) -> Option<String> {
        match self {
            Loose::Number(value) if value.is_finite() => Some(value.to_string()),
            Loose::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Parse a numeric string, trimming surrounding whitespace.
///
/// Returns `None` for empty, unparsable, infinite, or NaN input.
///
/// # Examples
/// ```
/// use catalog::numeric::parse_number;
///
/// assert_eq!(parse_number(" 1.5 "), Some(1.5));
/// assert_eq!(parse_number("1e3"), Some(1000.0));
/// assert_eq!(parse_number("n/a"), None);
/// assert_eq!(parse_number("NaN"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().and_then(finite)
}

/// `deserialize_with` helper for optional numeric columns
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?.and_then(Loose::into_number))
}

/// `deserialize_with` helper for optional text columns
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?.and_then(Loose::into_text))
}
