//! Application lifecycle - initialization and background result pumping.

use super::{AppEvent, DataViewer, ViewMode};
use crate::background::BackgroundExecutor;
use crate::constants::RESULT_POLL_MS;
use crate::data::sample_table;
use crate::hierarchy::NodeStateStore;
use crate::images::ImageStore;
use crate::settings::Settings;
use gpui::*;
use std::path::PathBuf;
use std::sync::mpsc::channel;
use std::time::Duration;

impl DataViewer {
    pub fn new(initial_path: Option<PathBuf>, cx: &mut Context<Self>) -> Self {
        let settings = Settings::load();
        let (events_tx, events_rx) = channel();

        let (cache_dir, cache_guard) = match tempfile::tempdir() {
            Ok(dir) => (dir.path().to_path_buf(), Some(dir)),
            Err(e) => {
                tracing::warn!(error = %e, "temp cache dir unavailable, using system temp");
                (std::env::temp_dir(), None)
            }
        };

        let startup_path = initial_path.or_else(|| settings.default_dataset.clone());

        let mut viewer = Self {
            table: sample_table(),
            node_states: NodeStateStore::new(),
            images: ImageStore::new(),
            view_mode: ViewMode::default(),
            error_message: None,
            settings,
            background: BackgroundExecutor::with_default_workers(),
            events_tx,
            events_rx,
            cache_dir,
            _cache_guard: cache_guard,
            polling: false,
        };

        if let Some(path) = startup_path {
            viewer.load_from_path(path, cx);
        }
        viewer
    }

    /// Toggle between the schema view and the cards.
    pub fn toggle_schema(&mut self, cx: &mut Context<Self>) {
        self.view_mode = if self.view_mode == ViewMode::Schema {
            ViewMode::Cards
        } else {
            ViewMode::Schema
        };
        cx.notify();
    }

    /// Toggle between the statistics view and the cards.
    pub fn toggle_statistics(&mut self, cx: &mut Context<Self>) {
        self.view_mode = if self.view_mode == ViewMode::Statistics {
            ViewMode::Cards
        } else {
            ViewMode::Statistics
        };
        cx.notify();
    }

    /// Process background completions and apply queued events.
    pub fn drain_background(&mut self, cx: &mut Context<Self>) {
        self.background.process_results();
        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
            changed = true;
        }
        if changed {
            cx.notify();
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::TableLoaded(Ok(table)) => {
                tracing::info!(name = %table.name, rows = table.row_count(), "dataset replaced");
                self.table = table;
                self.node_states.clear();
                self.images.reset();
                self.error_message = None;
            }
            AppEvent::TableLoaded(Err(e)) => {
                // Previous dataset stays on screen.
                self.error_message = Some(format!("Error loading file: {}", e));
            }
            AppEvent::ImageResolved {
                generation,
                reference,
                result,
            } => {
                self.images.apply(generation, &reference, result);
            }
            AppEvent::ExportFinished(Ok(path)) => {
                tracing::info!(path = %path.display(), "export finished");
                self.error_message = None;
            }
            AppEvent::ExportFinished(Err(e)) => {
                // Same channel as load errors, not just the log.
                self.error_message = Some(format!("Export failed: {}", e));
            }
        }
    }

    /// Start the UI-thread poller that pumps background completions.
    /// Idle once nothing is pending; restarted by the next spawn.
    pub(crate) fn kick_result_poller(&mut self, cx: &mut Context<Self>) {
        if self.polling {
            return;
        }
        self.polling = true;

        cx.spawn(async move |this, cx| {
            loop {
                cx.background_executor()
                    .timer(Duration::from_millis(RESULT_POLL_MS))
                    .await;
                let still_pending = this.update(cx, |this, cx| {
                    this.drain_background(cx);
                    this.background.has_pending()
                });
                match still_pending {
                    Ok(true) => continue,
                    _ => break,
                }
            }
            this.update(cx, |this, _| this.polling = false).ok();
        })
        .detach();
    }
}
