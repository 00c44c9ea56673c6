use super::*;
use crate::error::StoreError;

fn fill_pattern<S: AdjacencyStore<Value = bool>>(store: &mut S) {
    store.resize(4, 4);
    assert!(store.set(0, 1, true));
    assert!(store.set(0, 3, true));
    assert!(store.set(2, 1, true));
    assert!(store.set(3, 0, true));
}

#[test]
fn dense_matrix_get_set_and_bounds() {
    let mut m = DenseMatrix::<bool>::new(3, 3);
    assert_eq!(m.rows(), 3);
    assert_eq!(m.columns(), 3);
    assert_eq!(m.get(1, 2), Some(false));
    assert!(m.set(1, 2, true));
    assert_eq!(m.get(1, 2), Some(true));
    assert!(m.has_edge(1, 2));

    assert_eq!(m.get(3, 0), None);
    assert!(!m.set(0, 3, true));
    assert!(!m.has_edge(5, 5));
}

#[test]
fn dense_row_neighbours_scan_in_order() {
    let mut m = DenseMatrix::<bool>::default();
    fill_pattern(&mut m);
    assert_eq!(m.row_neighbours(0).collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(m.row_neighbours(1).count(), 0);
    assert_eq!(m.row_neighbours(9).count(), 0);
    assert_eq!(m.stored_edges(), 4);
}

#[test]
fn dense_resize_keeps_overlap() {
    let mut m = DenseMatrix::<bool>::default();
    fill_pattern(&mut m);
    m.resize(6, 2);
    assert_eq!(m.rows(), 6);
    assert_eq!(m.columns(), 2);
    assert_eq!(m.get(0, 1), Some(true));
    assert_eq!(m.get(2, 1), Some(true));
    assert_eq!(m.get(0, 3), None);
    assert_eq!(m.get(5, 1), Some(false));
}

#[test]
fn sparse_matrix_keeps_rows_sorted() {
    let mut m = SparseMatrix::<bool>::new(2, 10);
    for c in [7, 2, 9, 0, 2] {
        m.set(0, c, true);
    }
    assert_eq!(m.row(0).unwrap().iter().map(|e| e.0).collect::<Vec<_>>(), vec![0, 2, 7, 9]);
    assert_eq!(m.non_zeros(), 4);

    // Writing the absent value drops the entry.
    m.set(0, 7, false);
    assert_eq!(m.row_neighbours(0).collect::<Vec<_>>(), vec![0, 2, 9]);
    assert_eq!(m.get(0, 7), Some(false));
}

#[test]
fn sparse_resize_drops_out_of_range_columns() {
    let mut m = SparseMatrix::<bool>::default();
    fill_pattern(&mut m);
    m.resize(2, 2);
    assert_eq!(m.rows(), 2);
    assert_eq!(m.row_neighbours(0).collect::<Vec<_>>(), vec![1]);
    assert_eq!(m.get(0, 3), None);
    assert!(!m.set(3, 0, true));
}

#[test]
fn reset_clears_entries_but_not_dimensions() {
    let mut dense = DenseMatrix::<bool>::default();
    let mut sparse = SparseMatrix::<bool>::default();
    fill_pattern(&mut dense);
    fill_pattern(&mut sparse);
    dense.reset();
    sparse.reset();
    assert_eq!((dense.rows(), dense.columns()), (4, 4));
    assert_eq!((sparse.rows(), sparse.columns()), (4, 4));
    assert_eq!(dense.stored_edges(), 0);
    assert_eq!(sparse.stored_edges(), 0);
}

#[test]
fn dense_and_sparse_agree_on_rows() {
    let mut dense = DenseMatrix::<bool>::default();
    let mut sparse = SparseMatrix::<bool>::default();
    fill_pattern(&mut dense);
    fill_pattern(&mut sparse);
    for r in 0..4 {
        assert_eq!(
            dense.row_neighbours(r).collect::<Vec<_>>(),
            sparse.row_neighbours(r).collect::<Vec<_>>()
        );
    }
}

#[test]
fn weighted_values_report_no_boolean_adjacency() {
    let mut m = DenseMatrix::<f64>::new(2, 2);
    assert!(!m.supports_boolean_adjacency());
    m.set(0, 1, 0.5);
    assert_eq!(m.row_neighbours(0).collect::<Vec<_>>(), vec![1]);
    assert_eq!(m.get(1, 0), Some(0.0));

    let s = SparseMatrix::<u32>::new(1, 1);
    assert!(!s.supports_boolean_adjacency());
    assert!(DenseMatrix::<bool>::new(1, 1).supports_boolean_adjacency());
}

#[test]
fn edge_value_presence() {
    assert!(true.is_present());
    assert!(!bool::default().is_present());
    assert_eq!(<u8 as EdgeValue>::present(), 1);
    assert!(!0.0f32.is_present());
    assert!((-2i32).is_present());
}

#[test]
fn dense_deserialization_checks_data_length() {
    let err = serde_json::from_str::<DenseMatrix<bool>>(r#"{"data":[],"rows":2,"cols":2}"#).unwrap_err();
    assert!(err.to_string().contains("dense store is 2x2 but holds 0 values"), "{err}");

    let huge = format!(r#"{{"data":[],"rows":{},"cols":2}}"#, usize::MAX);
    assert!(serde_json::from_str::<DenseMatrix<bool>>(&huge).is_err());

    let m: DenseMatrix<bool> =
        serde_json::from_str(r#"{"data":[false,true,true,false],"rows":2,"cols":2}"#).unwrap();
    assert_eq!(m.row_neighbours(0).collect::<Vec<_>>(), vec![1]);
    assert_eq!(serde_json::from_str::<DenseMatrix<bool>>(&serde_json::to_string(&m).unwrap()).unwrap(), m);
}

#[test]
fn sparse_deserialization_checks_rows() {
    let cases = [
        (r#"{"entries":[[[1,true],[0,true]]],"cols":2}"#, StoreError::UnsortedRow { row: 0 }),
        (r#"{"entries":[[],[[1,true],[1,true]]],"cols":2}"#, StoreError::UnsortedRow { row: 1 }),
        (
            r#"{"entries":[[[3,true]]],"cols":2}"#,
            StoreError::ColumnOutOfRange { row: 0, column: 3, columns: 2 },
        ),
        (r#"{"entries":[[[0,false]]],"cols":2}"#, StoreError::AbsentEntry { row: 0, column: 0 }),
    ];
    for (json, expected) in cases {
        let err = serde_json::from_str::<SparseMatrix<bool>>(json).unwrap_err();
        assert!(err.to_string().contains(&expected.to_string()), "{json}: {err}");
    }

    let m: SparseMatrix<bool> = serde_json::from_str(r#"{"entries":[[[1,true]],[[0,true]]],"cols":2}"#).unwrap();
    assert_eq!(m.get(0, 1), Some(true));
    assert_eq!(m.non_zeros(), 2);
}

#[test]
fn rejected_store_never_reaches_a_graph() {
    use crate::graph::Graph;

    let bad = serde_json::from_str::<DenseMatrix<bool>>(r#"{"data":[true],"rows":2,"cols":2}"#);
    assert!(bad.is_err());

    let good: DenseMatrix<bool> =
        serde_json::from_str(r#"{"data":[false,true,true,false],"rows":2,"cols":2}"#).unwrap();
    let g = Graph::from_matrix(good);
    assert!(g.is_valid());
    assert_eq!(g.neighbours(0, 1).level(1), &[1]);
}
