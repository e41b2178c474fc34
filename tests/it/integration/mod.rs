//! Integration tests for Dataviewer.
//!
//! These tests verify the interaction between multiple components
//! and test complete workflows end-to-end.

mod render_workflow_tests;
