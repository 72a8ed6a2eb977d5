//! Opaque scalar cells for object-typed arrays

use ndarray::{Array, ArrayD, IxDyn};
use smallvec::SmallVec;

use crate::error::{CoordsError, Result};
use crate::value::CellValue;

/// A single opaque array cell holding one arbitrary value.
///
/// Structural array construction expands nested lists into additional
/// axes (see [`expand_array`]). Wrapping a value first makes it a leaf
/// the constructor will not look inside, so a list- or map-shaped value
/// can occupy exactly one cell of an object-typed array.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarCell(CellValue);

impl ScalarCell {
    /// Wrap a value as one opaque cell.
    pub fn wrap(value: CellValue) -> Self {
        Self(value)
    }

    /// Borrow the wrapped value.
    pub fn get(&self) -> &CellValue {
        &self.0
    }

    /// Unwrap back into the original value.
    pub fn into_inner(self) -> CellValue {
        self.0
    }
}

impl From<CellValue> for ScalarCell {
    fn from(value: CellValue) -> Self {
        Self::wrap(value)
    }
}

/// Build the one-element object array holding a single wrapped cell.
///
/// The result always has shape `[1]`, whatever the wrapped value's
/// structure.
pub fn scalar_array(cell: ScalarCell) -> ArrayD<ScalarCell> {
    Array::from_vec(vec![cell]).into_dyn()
}

/// Extract the value back out of a single-element object array.
///
/// Inverse of [`ScalarCell::wrap`] followed by [`scalar_array`]. An
/// array holding anything other than exactly one element is a caller
/// bug and fails fast with [`CoordsError::NotSingleton`].
pub fn unwrap_scalar_array(arr: &ArrayD<ScalarCell>) -> Result<CellValue> {
    match arr.first() {
        Some(cell) if arr.len() == 1 => Ok(cell.get().clone()),
        _ => Err(CoordsError::NotSingleton { len: arr.len() }),
    }
}

/// Interpret a value as an object-typed array, expanding nested lists
/// into axes.
///
/// Each nesting level of lists becomes one axis; every non-list value
/// becomes a wrapped leaf cell, so a top-level non-list yields a rank-0
/// array. The nesting must be rectangular: sibling lists of unequal
/// length fail with [`CoordsError::RaggedSequence`], and a scalar where
/// a list is expected (or vice versa) fails with
/// [`CoordsError::MixedNesting`].
pub fn expand_array(value: &CellValue) -> Result<ArrayD<ScalarCell>> {
    // The first element at each level establishes the shape.
    let mut shape: SmallVec<[usize; 4]> = SmallVec::new();
    let mut probe = value;
    while let CellValue::List(items) = probe {
        shape.push(items.len());
        match items.first() {
            Some(first) => probe = first,
            None => break,
        }
    }

    let mut cells = Vec::with_capacity(shape.iter().product());
    collect_cells(value, &shape, 0, &mut cells)?;
    ArrayD::from_shape_vec(IxDyn(&shape), cells)
        .map_err(|err| CoordsError::Internal(err.to_string()))
}

fn collect_cells(
    value: &CellValue,
    shape: &[usize],
    depth: usize,
    out: &mut Vec<ScalarCell>,
) -> Result<()> {
    if depth == shape.len() {
        return match value {
            CellValue::List(_) => Err(CoordsError::MixedNesting { depth }),
            other => {
                out.push(ScalarCell::wrap(other.clone()));
                Ok(())
            }
        };
    }
    match value {
        CellValue::List(items) => {
            if items.len() != shape[depth] {
                return Err(CoordsError::RaggedSequence {
                    axis: depth,
                    expected: shape[depth],
                    actual: items.len(),
                });
            }
            for item in items {
                collect_cells(item, shape, depth + 1, out)?;
            }
            Ok(())
        }
        _ => Err(CoordsError::MixedNesting { depth }),
    }
}
