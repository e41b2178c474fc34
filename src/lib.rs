//! Dataviewer - a desktop viewer for loosely-typed tabular data.
//!
//! Loads CSV, JSON, Excel, and SQL sources into a shared tabular model
//! and renders each row as a hierarchical card with per-node
//! expand/collapse and truncation state. Also provides a schema view,
//! summary statistics over integer columns, and HTML/PDF export.

pub mod app;
pub mod background;
pub mod constants;
pub mod data;
pub mod export;
pub mod hierarchy;
pub mod images;
pub mod render;
pub mod settings;
pub mod stats;
pub mod types;
