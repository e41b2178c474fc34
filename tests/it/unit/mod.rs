//! Unit tests for Dataviewer.

mod background_tests;
mod export_tests;
mod images_tests;
mod snapshot_tests;
mod stats_tests;
mod types_tests;
