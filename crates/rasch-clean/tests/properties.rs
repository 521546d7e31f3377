//! Property tests for the cleaning pipeline invariants.

use proptest::prelude::*;

use rasch_clean::{ItemCountRange, clean, normalize, pick_best_block};
use rasch_model::{FillMissing, RawCell, RawMatrix, Response};

fn raw_cell() -> impl Strategy<Value = RawCell> {
    prop_oneof![
        Just(RawCell::Empty),
        any::<bool>().prop_map(RawCell::Bool),
        (-3i64..4).prop_map(RawCell::Int),
        any::<i64>().prop_map(RawCell::Int),
        any::<f64>().prop_map(RawCell::Float),
        prop::sample::select(vec![
            "", " ", "1", "0", "yes", "NO", "x", "-", "na", "Q1", "Ism", "2", "1.0", "abc",
        ])
        .prop_map(RawCell::from),
        ".{0,6}".prop_map(RawCell::from),
    ]
}

fn raw_matrix() -> impl Strategy<Value = RawMatrix> {
    prop::collection::vec(prop::collection::vec(raw_cell(), 0..12), 0..10).prop_map(RawMatrix::new)
}

proptest! {
    #[test]
    fn normalize_is_total(cell in raw_cell()) {
        let response = normalize(&cell);
        prop_assert!(matches!(
            response,
            Response::Missing | Response::Incorrect | Response::Correct
        ));
    }

    #[test]
    fn integers_outside_binary_are_missing(value in any::<i64>().prop_filter("non-binary", |v| *v != 0 && *v != 1)) {
        prop_assert_eq!(normalize(&RawCell::Int(value)), Response::Missing);
    }

    #[test]
    fn cleaned_matrix_is_rectangular_and_informative(raw in raw_matrix()) {
        let matrix = clean(&raw, None);
        prop_assert!(matrix.is_rectangular());
        prop_assert!(matrix.height() <= raw.len());
        for row in matrix.rows() {
            prop_assert!(row.iter().any(|value| value.is_observed()));
        }
    }

    #[test]
    fn fill_leaves_no_missing(raw in raw_matrix()) {
        let matrix = clean(&raw, Some(FillMissing::One));
        prop_assert_eq!(matrix.missing_count(), 0);
        prop_assert_eq!(matrix.height(), clean(&raw, None).height());
    }

    #[test]
    fn best_block_is_contiguous_subset(columns in prop::collection::btree_set(0usize..120, 1..80)) {
        let columns: Vec<usize> = columns.into_iter().collect();
        let target = ItemCountRange::default();
        let block = pick_best_block(&columns, target).expect("non-empty input has a block");
        prop_assert!(block.len() <= target.max);
        prop_assert!(!block.is_empty());
        for index in block.indices() {
            prop_assert!(columns.contains(&index));
        }
    }
}
