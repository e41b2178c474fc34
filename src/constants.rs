//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the toolbar in pixels
pub const TOOLBAR_HEIGHT: f32 = 44.0;

/// Horizontal padding of the main content area
pub const CONTENT_PADDING: f32 = 8.0;

/// Outer padding of a row card
pub const CARD_PADDING: f32 = 16.0;

/// Vertical padding of a single rendered node line
pub const NODE_PADDING: f32 = 4.0;

/// Indent per nesting level inside an expanded mapping
pub const NEST_INDENT: f32 = 16.0;

/// Displayed edge length of an inline image slot
pub const IMAGE_SLOT_SIZE: f32 = 100.0;

// ============================================================================
// Hierarchical Rendering
// ============================================================================

/// Text values longer than this render truncated until clicked
pub const TRUNCATE_THRESHOLD: usize = 50;

/// Collapsed/expanded markers for mapping nodes
pub const MARKER_EXPANDED: &str = "▼ ";
pub const MARKER_COLLAPSED: &str = "▶ ";

// ============================================================================
// Data Loading
// ============================================================================

/// Maximum number of rows to load eagerly
pub const MAX_TABLE_ROWS: usize = 100_000;

/// Maximum input file size in MB
pub const MAX_FILE_SIZE_MB: usize = 100;

/// Rows sampled when inferring a column type
pub const TYPE_INFERENCE_SAMPLE: usize = 100;

// ============================================================================
// Background Tasks
// ============================================================================

/// Worker threads in the default background executor
pub const DEFAULT_WORKER_COUNT: usize = 2;

/// UI-thread poll interval for background task completions, in ms
pub const RESULT_POLL_MS: u64 = 30;

/// HTTP timeout for image fetches, in seconds
pub const IMAGE_FETCH_TIMEOUT_SECS: u64 = 15;
