//! Core types for the Dataviewer tabular model.
//!
//! This module defines the data structures shared by the loaders, the
//! hierarchical card renderer, the statistics engine, and the exporters.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An arbitrary loosely-typed data value.
///
/// Loaders produce these; the renderer and exporters consume them. The
/// union is closed on purpose: anything a loader cannot classify must be
/// mapped to one of these variants up front rather than falling through
/// to runtime type inspection later.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DynamicValue {
    Null,
    Text(String),
    Boolean(bool),
    /// Integer-kinded numbers keep their kind so they display without a
    /// decimal point.
    Integer(i64),
    Float(f64),
    /// Ordered key/value pairs. Keys are unique within one mapping and
    /// iteration order is the document order of the source.
    Mapping(Vec<(String, DynamicValue)>),
    Sequence(Vec<DynamicValue>),
}

impl DynamicValue {
    /// True for text values that reference an image rather than prose.
    ///
    /// Any text starting with "http" or "/" counts, regardless of length
    /// or whether it is a well-formed URL. This check takes priority over
    /// truncation in the card renderer.
    pub fn is_image_reference(&self) -> bool {
        match self {
            DynamicValue::Text(s) => s.starts_with("http") || s.starts_with('/'),
            _ => false,
        }
    }

    /// Natural display form of a value.
    ///
    /// Integers render without a decimal point, floats with their native
    /// formatting, null as the literal text "null". Mappings and
    /// sequences get a generic bracketed form; the card view never calls
    /// this for mappings it traverses itself.
    pub fn display(&self) -> String {
        match self {
            DynamicValue::Null => "null".to_string(),
            DynamicValue::Text(s) => s.clone(),
            DynamicValue::Boolean(b) => b.to_string(),
            DynamicValue::Integer(i) => i.to_string(),
            DynamicValue::Float(f) => f.to_string(),
            DynamicValue::Mapping(pairs) => {
                let inner: Vec<String> = pairs
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, v.display()))
                    .collect();
                format!("{{{}}}", inner.join(", "))
            }
            DynamicValue::Sequence(items) => {
                let inner: Vec<String> = items.iter().map(|v| v.display()).collect();
                format!("[{}]", inner.join(", "))
            }
        }
    }

    /// Numeric view of a value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DynamicValue::Integer(i) => Some(*i as f64),
            DynamicValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

/// Declared element type of a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    #[default]
    Text,
    Integer,
    Float,
    Boolean,
    Date,
    /// Nested mappings or sequences (JSON sources)
    Nested,
}

impl DataType {
    pub fn label(&self) -> &'static str {
        match self {
            DataType::Text => "Text",
            DataType::Integer => "Integer",
            DataType::Float => "Float",
            DataType::Boolean => "Boolean",
            DataType::Date => "Date",
            DataType::Nested => "Nested",
        }
    }
}

/// Column metadata
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub data_type: DataType,
}

impl Column {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
        }
    }
}

/// One record of the tabular source.
///
/// Values are aligned with the owning table's column list. Rows are
/// built once by a loader and never mutated afterwards; all mutable
/// per-row display state lives in the presentation layer, keyed by node
/// path.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Row {
    pub values: Vec<DynamicValue>,
}

impl Row {
    pub fn new(values: Vec<DynamicValue>) -> Self {
        Self { values }
    }

    /// Iterate (column name, value) pairs in column order.
    pub fn entries<'a>(
        &'a self,
        columns: &'a [Column],
    ) -> impl Iterator<Item = (&'a str, &'a DynamicValue)> {
        columns
            .iter()
            .zip(self.values.iter())
            .map(|(c, v)| (c.name.as_str(), v))
    }
}

/// Where a table came from, kept for display and reload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DataOrigin {
    /// Built-in demo dataset shown before any file is opened
    Sample,
    Csv { path: PathBuf, delimiter: char },
    Json { path: PathBuf },
    Excel { path: PathBuf },
    Sql { path: PathBuf },
}

impl DataOrigin {
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            DataOrigin::Sample => None,
            DataOrigin::Csv { path, .. }
            | DataOrigin::Json { path }
            | DataOrigin::Excel { path }
            | DataOrigin::Sql { path } => Some(path),
        }
    }
}

/// A full tabular source: schema plus rows.
///
/// Replace-on-load semantics: a successful load builds a fresh
/// `TableSource` and swaps it in wholesale; a failed load leaves the
/// previous one displayed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableSource {
    pub name: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub origin: DataOrigin,
}

impl TableSource {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All numeric values of one column, skipping non-numeric cells.
    pub fn numeric_column(&self, index: usize) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.values.get(index).and_then(|v| v.as_f64()))
            .collect()
    }
}
