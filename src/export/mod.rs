//! Table export to HTML and PDF.
//!
//! Both exporters walk the same [`TableSource`] model the viewer
//! displays. The HTML form is a plain `<table>`; the PDF form lays the
//! same grid out directly with printpdf rather than rendering the HTML
//! through a browser engine.

mod html;
mod pdf;

pub use html::{export_html, write_html};
pub use pdf::export_pdf;

use thiserror::Error;

/// Errors that can occur during export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("Nothing to export: table has no columns")]
    EmptyTable,
}

pub type ExportResult<T> = Result<T, ExportError>;
