//! Unit tests for HTML and PDF export.

use crate::helpers::{int, mapping, text, TestTableBuilder};
use dataviewer::export::{export_html, export_pdf, write_html};
use dataviewer::types::{DataType, DynamicValue};
use std::fs;

fn people() -> dataviewer::types::TableSource {
    TestTableBuilder::new("people")
        .with_column("name", DataType::Text)
        .with_column("age", DataType::Integer)
        .with_row(vec![text("Alice"), int(30)])
        .with_row(vec![text("Bob"), DynamicValue::Null])
        .build()
}

#[test]
fn html_document_has_one_table_and_all_cells() {
    let html = export_html(&people()).unwrap();

    assert!(html.starts_with("<html>"));
    assert!(html.contains("<h1>people</h1>"));
    assert_eq!(html.matches("<table").count(), 1);
    assert_eq!(html.matches("<th>").count(), 2);
    assert_eq!(html.matches("<tr>").count(), 3);
    assert_eq!(html.matches("<td>").count(), 4);
}

#[test]
fn html_export_writes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.html");

    write_html(&people(), &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("<td>Alice</td>"));
    assert!(written.contains("<td>null</td>"));
}

#[test]
fn nested_cells_export_in_bracketed_form() {
    let table = TestTableBuilder::new("nested")
        .with_column("details", DataType::Nested)
        .with_row(vec![mapping(vec![("age", int(25))])])
        .build();

    let html = export_html(&table).unwrap();
    assert!(html.contains("<td>{age=25}</td>"));
}

#[test]
fn pdf_export_writes_a_pdf_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");

    export_pdf(&people(), &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 500);
}
