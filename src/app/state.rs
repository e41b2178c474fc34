//! Application state - the DataViewer struct definition.

use crate::background::BackgroundExecutor;
use crate::hierarchy::NodeStateStore;
use crate::images::ImageStore;
use crate::settings::Settings;
use crate::types::TableSource;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};

/// Which main view fills the content area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// One hierarchical card per row
    #[default]
    Cards,
    /// Column names and declared types
    Schema,
    /// Mean/median/variance per integer column
    Statistics,
}

/// State updates posted back from background tasks.
///
/// Workers never touch application state; they send one of these
/// through the event channel and the UI thread applies it.
pub enum AppEvent {
    TableLoaded(Result<TableSource, String>),
    ImageResolved {
        generation: u64,
        reference: String,
        result: Result<PathBuf, String>,
    },
    ExportFinished(Result<PathBuf, String>),
}

/// Main application state.
///
/// Everything here is owned by and mutated on the UI thread only.
pub struct DataViewer {
    /// Currently displayed dataset; replaced wholesale on load
    pub table: TableSource,
    /// Per-node expand/collapse and truncation state, keyed by path
    pub node_states: NodeStateStore,
    /// Image slot cache keyed by reference string
    pub images: ImageStore,
    /// Active content view
    pub view_mode: ViewMode,
    /// Inline error banner; None hides it
    pub error_message: Option<String>,
    /// User settings (resources dir, default dataset)
    pub settings: Settings,
    /// Worker pool for blocking loads and image fetches
    pub background: BackgroundExecutor,
    /// Event channel drained on the UI thread
    pub events_tx: Sender<AppEvent>,
    pub events_rx: Receiver<AppEvent>,
    /// Decoded-image cache location for this run
    pub cache_dir: PathBuf,
    /// Keeps the temp cache dir alive for the process lifetime
    pub(crate) _cache_guard: Option<tempfile::TempDir>,
    /// True while the completion poller task is running
    pub(crate) polling: bool,
}
