//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestTableBuilder` - Builder pattern for creating test tables
//! - Value constructors for nested mappings and sequences

use dataviewer::types::{Column, DataOrigin, DataType, DynamicValue, Row, TableSource};

// ============================================================================
// TestTableBuilder - Builder pattern for creating test tables
// ============================================================================

/// Builder for creating test tables with columns and rows.
///
/// # Example
/// ```ignore
/// let table = TestTableBuilder::new("people")
///     .with_column("name", DataType::Text)
///     .with_column("age", DataType::Integer)
///     .with_row(vec![text("Alice"), int(30)])
///     .build();
/// ```
pub struct TestTableBuilder {
    name: String,
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl TestTableBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn with_column(mut self, name: &str, data_type: DataType) -> Self {
        self.columns.push(Column::new(name, data_type));
        self
    }

    pub fn with_row(mut self, values: Vec<DynamicValue>) -> Self {
        self.rows.push(Row::new(values));
        self
    }

    pub fn build(self) -> TableSource {
        TableSource {
            name: self.name,
            columns: self.columns,
            rows: self.rows,
            origin: DataOrigin::Sample,
        }
    }
}

// ============================================================================
// Value constructors
// ============================================================================

pub fn text(s: &str) -> DynamicValue {
    DynamicValue::Text(s.to_string())
}

pub fn int(i: i64) -> DynamicValue {
    DynamicValue::Integer(i)
}

pub fn mapping(pairs: Vec<(&str, DynamicValue)>) -> DynamicValue {
    DynamicValue::Mapping(
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    )
}
