//! Rastack Test Utilities
//!
//! This crate provides shared testing helpers for the rastack
//! workspace: a fluent builder for nested metadata mappings and
//! proptest strategies over the recursive cell-value grammar.

use chrono::{DateTime, Utc};
use ndarray::{ArrayD, IxDyn};
use proptest::prelude::*;
use rastack_coords::{CellMap, CellValue};

/// Builder for creating nested test mappings with common patterns
pub struct MapBuilder {
    entries: CellMap,
}

impl MapBuilder {
    /// Create a new map builder
    pub fn new() -> Self {
        Self {
            entries: CellMap::new(),
        }
    }

    /// Add an entry with a null value
    pub fn null(mut self, key: &str) -> Self {
        self.entries.insert(key.to_string(), CellValue::Null);
        self
    }

    /// Add an entry with a boolean value
    pub fn bool(mut self, key: &str, value: bool) -> Self {
        self.entries.insert(key.to_string(), CellValue::Bool(value));
        self
    }

    /// Add an entry with an integer value
    pub fn int(mut self, key: &str, value: i64) -> Self {
        self.entries.insert(key.to_string(), CellValue::Int(value));
        self
    }

    /// Add an entry with a float value
    pub fn float(mut self, key: &str, value: f64) -> Self {
        self.entries
            .insert(key.to_string(), CellValue::Float(value));
        self
    }

    /// Add an entry with a text value
    pub fn text(mut self, key: &str, value: &str) -> Self {
        self.entries
            .insert(key.to_string(), CellValue::Text(value.to_string()));
        self
    }

    /// Add an entry with a timestamp value
    pub fn timestamp(mut self, key: &str, value: DateTime<Utc>) -> Self {
        self.entries
            .insert(key.to_string(), CellValue::Timestamp(value));
        self
    }

    /// Add an entry with a list value
    pub fn list(mut self, key: &str, values: Vec<CellValue>) -> Self {
        self.entries.insert(key.to_string(), CellValue::List(values));
        self
    }

    /// Add an entry with a nested mapping built by another builder
    pub fn nested(mut self, key: &str, value: MapBuilder) -> Self {
        self.entries.insert(key.to_string(), value.build());
        self
    }

    /// Add an entry with an arbitrary value
    pub fn value(mut self, key: &str, value: CellValue) -> Self {
        self.entries.insert(key.to_string(), value);
        self
    }

    /// Build the mapping
    pub fn build(self) -> CellValue {
        CellValue::Map(self.entries)
    }
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Strategy over timestamps in a plausible observation range
/// (1970 through 2100, second precision).
pub fn arb_timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800).prop_map(|secs| {
        DateTime::<Utc>::from_timestamp(secs, 0).expect("timestamp within range")
    })
}

/// Strategy over leaf cell values: no lists, no maps.
///
/// Floats exclude NaN so structural equality stays an equivalence
/// relation over generated data.
pub fn arb_leaf() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Null),
        any::<bool>().prop_map(CellValue::Bool),
        any::<i64>().prop_map(CellValue::Int),
        (-1.0e12f64..1.0e12).prop_map(CellValue::Float),
        arb_timestamp().prop_map(CellValue::Timestamp),
        "[ -~]{0,12}".prop_map(CellValue::Text),
    ]
}

/// Strategy over non-map values: leaves and flat lists of leaves.
pub fn arb_nonmap_value() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        arb_leaf(),
        prop::collection::vec(arb_leaf(), 0..4).prop_map(CellValue::List),
    ]
}

/// Strategy over single-level mappings whose values are all leaves.
pub fn arb_flat_map() -> impl Strategy<Value = CellValue> {
    prop::collection::vec(("[a-z]{1,6}", arb_leaf()), 0..8)
        .prop_map(|entries| CellValue::Map(entries.into_iter().collect()))
}

/// Strategy over the full recursive value grammar: leaves plus
/// arbitrarily nested lists and mappings of them.
pub fn arb_cell_value() -> impl Strategy<Value = CellValue> {
    arb_leaf().prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(CellValue::List),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6)
                .prop_map(|entries| CellValue::Map(entries.into_iter().collect())),
        ]
    })
}

/// Strategy over dynamic-rank integer arrays of rank 1 through 3.
///
/// Axis lengths stay small and the element domain is narrow so that
/// constant axes actually occur in generated data.
pub fn arb_int_array() -> impl Strategy<Value = ArrayD<i64>> {
    prop::collection::vec(1usize..=4, 1..=3).prop_flat_map(|shape| {
        let len = shape.iter().product::<usize>();
        prop::collection::vec(-3i64..=3, len).prop_map(move |data| {
            ArrayD::from_shape_vec(IxDyn(&shape), data).expect("shape matches data length")
        })
    })
}
