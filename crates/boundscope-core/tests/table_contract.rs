//! Accessor contract tests for boundscope-core.
//!
//! These tests exercise the public table API the way the aggregation engine
//! uses it: lookups that miss, sorted enumerations, and validation failures
//! surfaced with the offending (dataset, window).

use boundscope_core::{
    BoundId, BoundRegistry, Metric, ResultTable, ResultTableBuilder, TableError, WindowKey,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn registry() -> BoundRegistry {
    BoundRegistry::new(["A", "B", "C"]).expect("valid registry")
}

fn sample_table() -> ResultTable {
    let mut builder = ResultTableBuilder::new(registry());
    builder
        .insert("Wafer", "w10", Some(&[0.9, 0.9, 0.9]), Some(&[0.0, 40.0, 40.0]), None)
        .unwrap()
        .insert("Wafer", "w2", Some(&[0.8, 0.8, 0.8]), Some(&[0.0, 10.0, 30.0]), Some(&[3.0, 2.0, 1.0]))
        .unwrap()
        .insert("Adiac", "w5", None, Some(&[1.0, 2.0, 3.0]), None)
        .unwrap()
        .insert("Adiac", "full", None, None, Some(&[1.0, 1.0, 1.0]))
        .unwrap()
        .dataset("Beef")
        .unwrap();
    builder.build()
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

#[test]
fn misses_are_none_not_errors() {
    let table = sample_table();
    assert!(table.cell("Wafer", "w5").is_none());
    assert!(table.cell("Missing", "w2").is_none());
    assert!(table.windows("Missing").is_none());
    assert_eq!(table.windows("Beef").unwrap().len(), 0);
}

#[test]
fn enumerations_are_sorted() {
    let table = sample_table();
    let names: Vec<&str> = table.dataset_names().iter().map(|d| d.as_str()).collect();
    assert_eq!(names, vec!["Adiac", "Beef", "Wafer"]);

    let wafer: Vec<&str> = table
        .windows("Wafer")
        .unwrap()
        .iter()
        .map(|w| w.as_str())
        .collect();
    assert_eq!(wafer, vec!["w2", "w10"]);

    // digit-less keys sort after every numeric key
    let union: Vec<&str> = table.all_windows().iter().map(|w| w.as_str()).collect();
    assert_eq!(union, vec!["w2", "w5", "w10", "full"]);
    assert_eq!(table.cell_count(), 4);
    assert_eq!(table.dataset_count(), 3);
}

#[test]
fn cells_expose_best_bounds_per_metric() {
    let table = sample_table();

    // pruned tie between B and C at w10 goes to B
    let w10 = table.cell("Wafer", "w10").unwrap();
    assert_eq!(w10.best_bound(Metric::Pruned), Some(BoundId::new(1)));
    assert_eq!(w10.best_bound(Metric::Time), None);
    assert!(!w10.has(Metric::Time));
    assert_eq!(w10.series(Metric::Time), vec![0.0, 0.0, 0.0]);

    let w2 = table.cell("Wafer", "w2").unwrap();
    assert_eq!(w2.best_bound(Metric::Pruned), Some(BoundId::new(2)));
    assert_eq!(w2.best_bound(Metric::Time), Some(BoundId::new(2)));
    assert_eq!(w2.best_bound(Metric::Accuracy), Some(BoundId::new(0)));
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn misaligned_series_reports_location() {
    let mut builder = ResultTableBuilder::new(registry());
    let err = builder
        .insert("Wafer", "w1", None, Some(&[1.0, 2.0]), None)
        .unwrap_err();

    match err {
        TableError::InvalidCell {
            dataset,
            window,
            source,
        } => {
            assert_eq!(dataset, "Wafer");
            assert_eq!(window, "w1");
            assert_eq!(
                *source,
                TableError::SeriesLengthMismatch {
                    metric: Metric::Pruned,
                    expected: 3,
                    got: 2,
                }
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn duplicate_cell_rejected() {
    let mut builder = ResultTableBuilder::new(registry());
    builder.insert("Wafer", "w1", None, None, None).unwrap();
    let err = builder.insert("Wafer", "w1", None, None, None).unwrap_err();
    assert!(matches!(err, TableError::DuplicateCell { .. }));
}

#[test]
fn window_keys_compare_numerically() {
    let mut keys: Vec<WindowKey> = ["w10", "w2", "w1", "x", "w02"]
        .into_iter()
        .map(WindowKey::parse)
        .collect();
    keys.sort();
    let raw: Vec<&str> = keys.iter().map(WindowKey::as_str).collect();
    assert_eq!(raw, vec!["w1", "w02", "w2", "w10", "x"]);
    assert_eq!(WindowKey::parse("w10").label(), "10");
    assert_eq!(WindowKey::parse("full").label(), "full");
}
