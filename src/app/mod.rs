//! Application module - the main DataViewer state and logic.
//!
//! This module is organized into several submodules:
//! - `state` - The DataViewer struct, view modes, and app events
//! - `lifecycle` - Initialization and background result pumping
//! - `loading` - Dataset load/reload handlers
//! - `exporting` - HTML/PDF export handlers

mod exporting;
mod lifecycle;
mod loading;
mod state;

pub use state::{AppEvent, DataViewer, ViewMode};
