//! Serde structures for the fuel-price API responses.
//!
//! Every record field deserializes leniently: a field that is absent,
//! null, or of an unexpected type becomes `None` instead of failing the
//! record. The sentinel substitution itself happens in [`super::convert`].

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Envelope for one page of the records endpoint.
///
/// `results` is kept as raw JSON values so that one malformed record can
/// be skipped without discarding the page.
#[derive(Debug, Deserialize)]
pub struct RecordsPage {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub results: Option<Vec<Value>>,
}

/// One raw station record as the API returns it.
#[derive(Debug, Default, Deserialize)]
pub struct RawStation {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: Option<String>,
    /// City name; the dataset calls this `com_arm_name`.
    #[serde(default, deserialize_with = "lenient_string", rename = "com_arm_name")]
    pub city: Option<String>,
    /// Postal code; the dataset calls this `cp`.
    #[serde(default, deserialize_with = "lenient_string", rename = "cp")]
    pub postal_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub fuel: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price_gazole: Option<f64>,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price_sp95: Option<f64>,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price_sp98: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub brand: Option<String>,
    /// `"/"`-delimited service capability list, when present.
    #[serde(default, deserialize_with = "lenient_string")]
    pub service: Option<String>,
}

/// Accept a JSON string, or a number rendered as its decimal text
/// (station ids and postal codes show up both ways). Anything else
/// degrades to `None`.
fn lenient_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Accept a JSON number or a numeric string. A present-but-unparseable
/// price degrades to `None` without touching the rest of the record.
fn lenient_price<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Accept an array, keeping only its string elements.
fn lenient_string_list<'de, D>(de: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}
