//! HTML/PDF export handlers.
//!
//! Exports run on the worker pool like loads do, and failures land in
//! the same inline error banner.

use super::{AppEvent, DataViewer};
use crate::export::{export_pdf, write_html};
use gpui::*;
use std::path::PathBuf;

impl DataViewer {
    pub fn export_html_action(&mut self, cx: &mut Context<Self>) {
        let table = self.table.clone();
        let tx = self.events_tx.clone();
        self.background.spawn(
            "export-html",
            move || {
                let path = PathBuf::from("output.html");
                write_html(&table, &path)
                    .map(|_| path)
                    .map_err(|e| e.to_string())
            },
            move |result| {
                let _ = tx.send(AppEvent::ExportFinished(result));
            },
        );
        self.kick_result_poller(cx);
    }

    pub fn export_pdf_action(&mut self, cx: &mut Context<Self>) {
        let table = self.table.clone();
        let tx = self.events_tx.clone();
        self.background.spawn(
            "export-pdf",
            move || {
                let path = PathBuf::from("output.pdf");
                export_pdf(&table, &path)
                    .map(|_| path)
                    .map_err(|e| e.to_string())
            },
            move |result| {
                let _ = tx.send(AppEvent::ExportFinished(result));
            },
        );
        self.kick_result_poller(cx);
    }
}
