//! SQL (.sql) loading via an in-memory SQLite database.
//!
//! The script is executed against a fresh in-memory database and the
//! first user table it created is read back. This covers the common
//! "CREATE TABLE + INSERT" dump shape without owning any SQL semantics
//! ourselves.

use crate::constants::MAX_TABLE_ROWS;
use crate::data::error::{DataError, DataResult};
use crate::data::infer_value_column_type;
use crate::types::{Column, DataOrigin, DynamicValue, Row, TableSource};
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use std::path::Path;

/// Execute a SQL script file and load the first table it defines
pub fn parse_sql_file(path: &Path) -> DataResult<TableSource> {
    let script = std::fs::read_to_string(path)?;
    let mut table = parse_sql_script(&script)?;
    table.name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Data")
        .to_string();
    table.origin = DataOrigin::Sql {
        path: path.to_path_buf(),
    };
    Ok(table)
}

/// Execute a SQL script and read back the first user table
pub fn parse_sql_script(script: &str) -> DataResult<TableSource> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch(script)?;

    let table_name: String = conn
        .query_row(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
             ORDER BY rowid LIMIT 1",
            [],
            |row| row.get(0),
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => {
                DataError::InvalidData("SQL script created no tables".into())
            }
            other => DataError::Sql(other),
        })?;

    let quoted = table_name.replace('"', "\"\"");
    let mut stmt = conn.prepare(&format!("SELECT * FROM \"{}\"", quoted))?;
    let names: Vec<String> = stmt
        .column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let column_count = names.len();

    let mut rows: Vec<Row> = Vec::new();
    let mut query = stmt.query([])?;
    while let Some(row) = query.next()? {
        if rows.len() >= MAX_TABLE_ROWS {
            return Err(DataError::TooManyRows {
                rows: rows.len() + 1,
                max_rows: MAX_TABLE_ROWS,
            });
        }
        let mut values = Vec::with_capacity(column_count);
        for i in 0..column_count {
            values.push(match row.get_ref(i)? {
                ValueRef::Null => DynamicValue::Null,
                ValueRef::Integer(v) => DynamicValue::Integer(v),
                ValueRef::Real(v) => DynamicValue::Float(v),
                ValueRef::Text(t) => DynamicValue::Text(String::from_utf8_lossy(t).to_string()),
                ValueRef::Blob(b) => DynamicValue::Text(format!("<blob {} bytes>", b.len())),
            });
        }
        rows.push(Row::new(values));
    }

    let columns: Vec<Column> = names
        .iter()
        .enumerate()
        .map(|(i, name)| Column::new(name, infer_value_column_type(&rows, i)))
        .collect();

    Ok(TableSource {
        name: table_name,
        columns,
        rows,
        origin: DataOrigin::Sql {
            path: Default::default(),
        },
    })
}
