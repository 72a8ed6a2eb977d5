//! Axis deduplication for dynamic-rank arrays

use ndarray::{ArrayBase, ArrayD, Axis, Data, IxDyn, Slice};

/// Collapse every axis whose lanes are all identical down to length 1.
///
/// For each axis independently: if every slice obtained by fixing that
/// axis's index equals the first such slice, the axis is reduced to
/// length 1, keeping the first slice; axes that vary are left at full
/// length. The rank of the result therefore always matches the rank of
/// the input, and a collapsed result broadcasts back to the input's
/// shape.
///
/// Length-0 and length-1 axes and rank-0 inputs are returned as they
/// are. The input is never mutated.
pub fn deduplicate_axes<A, S>(arr: &ArrayBase<S, IxDyn>) -> ArrayD<A>
where
    S: Data<Elem = A>,
    A: Clone + PartialEq,
{
    let mut view = arr.view();
    for axis in (0..view.ndim()).map(Axis) {
        if view.len_of(axis) <= 1 {
            continue;
        }
        let first = view.index_axis(axis, 0);
        let constant = view.axis_iter(axis).skip(1).all(|lane| lane == first);
        if constant {
            view.slice_axis_inplace(axis, Slice::from(0..1));
        }
    }
    view.to_owned()
}
