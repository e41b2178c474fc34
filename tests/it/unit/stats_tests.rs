//! Unit tests for the statistics engine.

use crate::helpers::{int, text, TestTableBuilder};
use dataviewer::stats::compute_statistics;
use dataviewer::types::{DataType, DynamicValue};

#[test]
fn even_count_median_averages_the_middles() {
    let table = TestTableBuilder::new("t")
        .with_column("score", DataType::Integer)
        .with_row(vec![int(1)])
        .with_row(vec![int(2)])
        .with_row(vec![int(3)])
        .with_row(vec![int(4)])
        .build();

    let stats = compute_statistics(&table);
    assert_eq!(stats.len(), 1);
    let (name, s) = &stats[0];
    assert_eq!(name, "score");
    assert_eq!(s.mean, 2.5);
    assert_eq!(s.median, 2.5);
    // Population variance, divide by N
    assert_eq!(s.variance, 1.25);
}

#[test]
fn only_integer_declared_columns_are_analyzed() {
    let table = TestTableBuilder::new("t")
        .with_column("name", DataType::Text)
        .with_column("age", DataType::Integer)
        .with_column("height", DataType::Float)
        .with_row(vec![text("Alice"), int(30), DynamicValue::Float(1.7)])
        .build();

    let stats = compute_statistics(&table);
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].0, "age");
}

#[test]
fn non_numeric_cells_in_an_integer_column_are_skipped() {
    let table = TestTableBuilder::new("t")
        .with_column("age", DataType::Integer)
        .with_row(vec![int(10)])
        .with_row(vec![DynamicValue::Null])
        .with_row(vec![int(20)])
        .build();

    let stats = compute_statistics(&table);
    assert_eq!(stats[0].1.mean, 15.0);
}

#[test]
fn empty_integer_column_reports_undefined_not_panic() {
    let table = TestTableBuilder::new("t")
        .with_column("age", DataType::Integer)
        .build();

    let stats = compute_statistics(&table);
    assert!(stats[0].1.is_undefined());
    assert!(stats[0].1.mean.is_nan());
    assert!(stats[0].1.median.is_nan());
    assert!(stats[0].1.variance.is_nan());
}
