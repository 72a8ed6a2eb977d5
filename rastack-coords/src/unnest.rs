//! Recursive unnesting of nested metadata mappings

use crate::value::{CellMap, CellValue};

/// Flatten nested maps into a single level, joining key paths with `_`.
///
/// `{"a": 1, "b": {"x": "foo"}}` becomes `{"a": 1, "b_x": "foo"}`, and
/// deeper nesting keeps chaining (`a_b_x`). Result entries appear in
/// first-occurrence traversal order. When a joined key collides with an
/// existing one, the later value wins but the first occurrence keeps
/// its position.
///
/// Anything that is not a map is returned unchanged, lists included:
/// list elements are never inspected, even when they contain maps.
pub fn unnest_dicts(value: &CellValue) -> CellValue {
    match value {
        CellValue::Map(map) => CellValue::Map(unnest_map(map)),
        other => other.clone(),
    }
}

/// Unnest every item of a slice, preserving order.
pub fn unnest_items(items: &[CellValue]) -> Vec<CellValue> {
    items.iter().map(unnest_dicts).collect()
}

fn unnest_map(map: &CellMap) -> CellMap {
    let mut flat = CellMap::with_capacity(map.len());
    for (key, value) in map {
        match value {
            CellValue::Map(nested) => {
                for (child_key, child_value) in unnest_map(nested) {
                    flat.insert(format!("{key}_{child_key}"), child_value);
                }
            }
            other => {
                flat.insert(key.clone(), other.clone());
            }
        }
    }
    flat
}
