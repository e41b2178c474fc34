//! HTML table export.

use super::{ExportError, ExportResult};
use crate::types::{DynamicValue, TableSource};
use std::path::Path;

/// Serialize a table to a standalone HTML document.
///
/// One `<table>` with one header row of `<th>` per column and one
/// `<tr>` of `<td>` per data row. Null cells render as the literal text
/// `null`.
pub fn export_html(table: &TableSource) -> ExportResult<String> {
    if table.columns.is_empty() {
        return Err(ExportError::EmptyTable);
    }

    let mut out = String::new();
    out.push_str("<html><body>");
    out.push_str(&format!("<h1>{}</h1>", escape(&table.name)));
    out.push_str("<table border='1'>");

    out.push_str("<tr>");
    for column in &table.columns {
        out.push_str(&format!("<th>{}</th>", escape(&column.name)));
    }
    out.push_str("</tr>");

    for row in &table.rows {
        out.push_str("<tr>");
        for value in &row.values {
            out.push_str(&format!("<td>{}</td>", cell_text(value)));
        }
        out.push_str("</tr>");
    }

    out.push_str("</table>");
    out.push_str("</body></html>");
    Ok(out)
}

/// Export to HTML and write the document to `path`.
pub fn write_html(table: &TableSource, path: &Path) -> ExportResult<()> {
    let content = export_html(table)?;
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), "HTML export written");
    Ok(())
}

fn cell_text(value: &DynamicValue) -> String {
    match value {
        DynamicValue::Null => "null".to_string(),
        other => escape(&other.display()),
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
