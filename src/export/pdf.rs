//! PDF table export via printpdf.
//!
//! Lays out the table as fixed-pitch text rows on A4 pages. This is a
//! direct rendering of the table model, not an HTML conversion.

use super::{ExportError, ExportResult};
use crate::types::{DynamicValue, TableSource};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 6.0;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 10.0;
/// Cell text wider than this is cut to keep columns aligned
const MAX_CELL_CHARS: usize = 24;

/// Export a table as a PDF file at `path`.
pub fn export_pdf(table: &TableSource, path: &Path) -> ExportResult<()> {
    if table.columns.is_empty() {
        return Err(ExportError::EmptyTable);
    }

    let (doc, page, layer) = PdfDocument::new(
        table.name.clone(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Table",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let title_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let mut current = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    current.use_text(table.name.clone(), TITLE_SIZE, Mm(MARGIN_MM), Mm(y), &title_font);
    y -= LINE_HEIGHT_MM * 2.0;

    let header: Vec<String> = table.columns.iter().map(|c| c.name.clone()).collect();
    current.use_text(format_line(&header), BODY_SIZE, Mm(MARGIN_MM), Mm(y), &font);
    y -= LINE_HEIGHT_MM;

    for row in &table.rows {
        if y < MARGIN_MM {
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Table");
            current = doc.get_page(next_page).get_layer(next_layer);
            y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        let cells: Vec<String> = row.values.iter().map(cell_text).collect();
        current.use_text(format_line(&cells), BODY_SIZE, Mm(MARGIN_MM), Mm(y), &font);
        y -= LINE_HEIGHT_MM;
    }

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    tracing::info!(path = %path.display(), "PDF export written");
    Ok(())
}

fn cell_text(value: &DynamicValue) -> String {
    match value {
        DynamicValue::Null => "null".to_string(),
        other => other.display(),
    }
}

fn format_line(cells: &[String]) -> String {
    cells
        .iter()
        .map(|c| {
            let mut text: String = c.chars().take(MAX_CELL_CHARS).collect();
            while text.chars().count() < MAX_CELL_CHARS {
                text.push(' ');
            }
            text
        })
        .collect::<Vec<_>>()
        .join(" ")
}
