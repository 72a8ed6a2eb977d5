//! Cell value model for coordinate metadata

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered string-keyed mapping of cell values
pub type CellMap = IndexMap<String, CellValue>;

/// A single metadata value as it appears in a coordinate cell.
///
/// Covers the value grammar of STAC-style item and asset metadata:
/// the JSON scalars and containers plus timestamps. Maps preserve
/// insertion order, which is what keys the deterministic ordering of
/// [`unnest_dicts`](crate::unnest_dicts) output.
///
/// Equality is structural. Floats use IEEE semantics, so a NaN cell is
/// not equal to itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Present but null
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating-point value
    Float(f64),
    /// Text value
    Text(String),
    /// UTC timestamp
    Timestamp(DateTime<Utc>),
    /// Sequence of values
    List(Vec<CellValue>),
    /// Nested mapping, insertion-ordered
    Map(CellMap),
}

impl CellValue {
    /// Whether this value is a mapping.
    pub fn is_map(&self) -> bool {
        matches!(self, CellValue::Map(_))
    }

    /// Borrow the entries if this value is a mapping.
    pub fn as_map(&self) -> Option<&CellMap> {
        match self {
            CellValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Null,
            serde_json::Value::Bool(b) => CellValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Int(i),
                None => n.as_f64().map_or(CellValue::Null, CellValue::Float),
            },
            serde_json::Value::String(s) => CellValue::Text(s),
            serde_json::Value::Array(items) => {
                CellValue::List(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(map) => {
                CellValue::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<CellValue> for serde_json::Value {
    fn from(value: CellValue) -> Self {
        match value {
            CellValue::Null => serde_json::Value::Null,
            CellValue::Bool(b) => b.into(),
            CellValue::Int(i) => i.into(),
            CellValue::Float(f) => serde_json::Number::from_f64(f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            CellValue::Text(s) => serde_json::Value::String(s),
            // JSON has no timestamp type; render as RFC 3339 text.
            CellValue::Timestamp(ts) => serde_json::Value::String(ts.to_rfc3339()),
            CellValue::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            CellValue::Map(map) => {
                serde_json::Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        CellValue::Timestamp(value)
    }
}

impl From<Vec<CellValue>> for CellValue {
    fn from(value: Vec<CellValue>) -> Self {
        CellValue::List(value)
    }
}

impl From<CellMap> for CellValue {
    fn from(value: CellMap) -> Self {
        CellValue::Map(value)
    }
}
