//! Unit tests for the core value model.

use crate::helpers::{int, mapping, text};
use dataviewer::types::{Column, DataOrigin, DataType, DynamicValue, Row};

#[test]
fn integers_display_without_a_decimal_point() {
    assert_eq!(int(42).display(), "42");
    assert_eq!(DynamicValue::Float(42.5).display(), "42.5");
}

#[test]
fn null_displays_as_literal_null() {
    assert_eq!(DynamicValue::Null.display(), "null");
}

#[test]
fn mapping_and_sequence_display_forms() {
    let m = mapping(vec![("a", int(1)), ("b", text("x"))]);
    assert_eq!(m.display(), "{a=1, b=x}");

    let s = DynamicValue::Sequence(vec![text("Reading"), text("Cycling")]);
    assert_eq!(s.display(), "[Reading, Cycling]");
}

#[test]
fn image_reference_detection() {
    assert!(text("http://example.com/a.png").is_image_reference());
    assert!(text("https://example.com/a.png").is_image_reference());
    assert!(text("http").is_image_reference());
    assert!(text("/images/photo.jpg").is_image_reference());
    assert!(text("/a").is_image_reference());

    assert!(!text("photo.jpg").is_image_reference());
    assert!(!text("see http://example.com").is_image_reference());
    assert!(!int(7).is_image_reference());
}

#[test]
fn row_entries_pair_values_with_column_names() {
    let columns = vec![
        Column::new("name", DataType::Text),
        Column::new("age", DataType::Integer),
    ];
    let row = Row::new(vec![text("Alice"), int(30)]);

    let entries: Vec<_> = row.entries(&columns).collect();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].0, "name");
    assert_eq!(entries[1], ("age", &int(30)));
}

#[test]
fn only_file_backed_origins_have_a_path() {
    assert_eq!(DataOrigin::Sample.path(), None);
    let origin = DataOrigin::Json {
        path: "/data/p.json".into(),
    };
    assert_eq!(origin.path().unwrap().to_str(), Some("/data/p.json"));
}
