//! Dataset load/reload handlers.

use super::{AppEvent, DataViewer};
use crate::data::load_table;
use crate::images::resolve_image_reference;
use gpui::*;
use std::path::PathBuf;

impl DataViewer {
    /// Load a tabular file on the worker pool. Completion either
    /// replaces the dataset or raises the inline error banner.
    pub fn load_from_path(&mut self, path: PathBuf, cx: &mut Context<Self>) {
        let tx = self.events_tx.clone();
        self.background.spawn(
            "load-table",
            move || load_table(&path).map_err(|e| e.to_string()),
            move |result| {
                let _ = tx.send(AppEvent::TableLoaded(result));
            },
        );
        self.kick_result_poller(cx);
        cx.notify();
    }

    /// Reload the current dataset from its originating file.
    pub fn reload_current(&mut self, cx: &mut Context<Self>) {
        if let Some(path) = self.table.origin.path() {
            self.load_from_path(path.to_path_buf(), cx);
        }
    }

    /// Ensure an image reference is being resolved. Safe to call on
    /// every render: known references (loading, loaded, or failed) are
    /// not fetched again.
    pub fn request_image(&mut self, reference: &str, cx: &mut Context<Self>) {
        if !self.images.begin(reference) {
            return;
        }

        let generation = self.images.generation();
        let resources = self.settings.resources_root();
        let cache = self.cache_dir.clone();
        let tx = self.events_tx.clone();
        let owned_reference = reference.to_string();
        let event_reference = owned_reference.clone();

        self.background.spawn(
            "resolve-image",
            move || resolve_image_reference(&owned_reference, &resources, &cache),
            move |result| {
                let _ = tx.send(AppEvent::ImageResolved {
                    generation,
                    reference: event_reference,
                    result,
                });
            },
        );
        self.kick_result_poller(cx);
    }
}
