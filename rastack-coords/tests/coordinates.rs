//! Regression suite for the coordinate-normalization primitives

use ndarray::{Array, Array1, Axis};
use rastack_coords::{
    deduplicate_axes, expand_array, scalar_array, unnest_dicts, unnest_items, unwrap_scalar_array,
    CellValue, CoordsError, ScalarCell,
};
use rastack_test_utils::MapBuilder;

#[test]
fn deduplicate_axes_1d() {
    let varying = Array1::from_iter(0..5).into_dyn();
    assert_eq!(deduplicate_axes(&varying), varying);

    let constant = Array::from_elem(5, 1).into_dyn();
    let d = deduplicate_axes(&constant);
    assert_eq!(d.shape(), &[1]);
    assert_eq!(d, Array::from_elem(1, 1).into_dyn());
}

#[test]
fn deduplicate_axes_2d() {
    let varying = Array::from_shape_fn((3, 4), |(i, j)| i * 4 + j).into_dyn();
    assert_eq!(deduplicate_axes(&varying), varying);

    let rows_equal = Array::from_shape_fn((3, 4), |(_, j)| j).into_dyn();
    let d = deduplicate_axes(&rows_equal);
    assert_eq!(d.shape(), &[1, 4]);
    assert_eq!(d.index_axis(Axis(0), 0), rows_equal.index_axis(Axis(0), 0));

    let cols_equal = Array::from_shape_fn((3, 4), |(i, _)| i).into_dyn();
    let d = deduplicate_axes(&cols_equal);
    assert_eq!(d.shape(), &[3, 1]);
    assert_eq!(d.index_axis(Axis(1), 0), cols_equal.index_axis(Axis(1), 0));

    let all_equal = Array::from_elem((3, 4), 1).into_dyn();
    let d = deduplicate_axes(&all_equal);
    assert_eq!(d.shape(), &[1, 1]);
}

#[test]
fn deduplicate_axes_on_opaque_cells() {
    // Per-asset metadata axis where every asset carries the same value.
    let cell = ScalarCell::wrap(MapBuilder::new().text("type", "image/tiff").build());
    let arr = Array::from_elem((2, 3), cell.clone()).into_dyn();
    let d = deduplicate_axes(&arr);
    assert_eq!(d.shape(), &[1, 1]);
    assert_eq!(d.first(), Some(&cell));
}

#[test]
fn unnest_dicts_flattens_nested_maps() {
    let input = MapBuilder::new()
        .int("a", 1)
        .nested(
            "b",
            MapBuilder::new()
                .text("a", "foo")
                .nested("b", MapBuilder::new().int("x", 0)),
        )
        .build();
    let expected = MapBuilder::new()
        .int("a", 1)
        .text("b_a", "foo")
        .int("b_b_x", 0)
        .build();
    assert_eq!(unnest_dicts(&input), expected);
}

#[test]
fn unnest_dicts_leaves_non_maps_alone() {
    let inputs = vec![
        CellValue::Text("abc".to_string()),
        CellValue::Int(1),
        CellValue::Null,
        CellValue::List(vec![1.into(), 2.into(), "foo".into(), true.into()]),
        // Even a list of maps is opaque.
        CellValue::List(vec![
            MapBuilder::new()
                .nested("a", MapBuilder::new().text("b", "c"))
                .build(),
            MapBuilder::new()
                .nested("a2", MapBuilder::new().text("b2", "c2"))
                .build(),
        ]),
    ];

    for input in inputs {
        assert_eq!(unnest_dicts(&input), input);
    }
}

#[test]
fn unnest_items_maps_over_slice() {
    let items = vec![
        MapBuilder::new()
            .nested("properties", MapBuilder::new().float("eo:cloud_cover", 12.5))
            .build(),
        MapBuilder::new()
            .nested("properties", MapBuilder::new().float("eo:cloud_cover", 3.0))
            .build(),
    ];
    let flat = unnest_items(&items);
    assert_eq!(
        flat,
        vec![
            MapBuilder::new().float("properties_eo:cloud_cover", 12.5).build(),
            MapBuilder::new().float("properties_eo:cloud_cover", 3.0).build(),
        ]
    );
}

#[test]
fn wrapped_structured_value_occupies_one_cell() {
    let value = MapBuilder::new()
        .list("a", vec![1.into(), 2.into()])
        .build();
    let arr = scalar_array(ScalarCell::wrap(value.clone()));
    assert_eq!(arr.shape(), &[1]);
    assert_eq!(unwrap_scalar_array(&arr).unwrap(), value);
}

#[test]
fn expansion_grows_axes_unless_wrapped() {
    let value = CellValue::List(vec![
        CellValue::List(vec!["a".into(), "b".into()]),
        CellValue::List(vec!["c".into(), "d".into()]),
    ]);
    assert_eq!(expand_array(&value).unwrap().shape(), &[2, 2]);
    assert_eq!(scalar_array(ScalarCell::wrap(value)).shape(), &[1]);
}

#[test]
fn unwrap_rejects_non_singleton() {
    let cells = vec![ScalarCell::wrap(1.into()), ScalarCell::wrap(2.into())];
    let arr = Array1::from_vec(cells).into_dyn();
    match unwrap_scalar_array(&arr) {
        Err(CoordsError::NotSingleton { len }) => assert_eq!(len, 2),
        other => panic!("expected NotSingleton, got {other:?}"),
    }
}
