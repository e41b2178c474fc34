//! Asynchronous image slot resolution.
//!
//! Text values that reference images ("http…" or "/…") render as a slot
//! that resolves off the UI thread. [`ImageStore`] holds the per-slot
//! tri-state keyed by the reference string, so re-rendering a node with
//! an unchanged reference never re-fetches, and a failed resolution
//! shows a visible error state instead of loading forever.
//!
//! Resolution order, first match wins:
//! - "http...": fetched over HTTP(S)
//! - "/...":    resolved inside the bundled resources directory
//! - other:     filesystem path relative to the working directory
//!
//! Decoded images are re-encoded as PNG into a per-run temp cache
//! directory; the gpui layer displays them from those paths.

use crate::constants::IMAGE_FETCH_TIMEOUT_SECS;
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolution state of one image slot.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageSlotState {
    Loading,
    /// Decoded and cached; the path points into the run's cache dir.
    Loaded(PathBuf),
    Failed(String),
}

/// Reference-keyed cache of image slot states.
///
/// Owned and mutated only by the UI thread. The generation counter
/// guards against stale completions: a background resolution started
/// before the dataset was replaced carries the old generation and is
/// dropped on arrival.
pub struct ImageStore {
    slots: HashMap<String, ImageSlotState>,
    generation: u64,
}

impl Default for ImageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageStore {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            generation: 0,
        }
    }

    pub fn state(&self, reference: &str) -> Option<&ImageSlotState> {
        self.slots.get(reference)
    }

    /// Mark a reference as loading. Returns false when the reference is
    /// already known (in any state), in which case no new fetch should
    /// be started.
    pub fn begin(&mut self, reference: &str) -> bool {
        if self.slots.contains_key(reference) {
            return false;
        }
        self.slots
            .insert(reference.to_string(), ImageSlotState::Loading);
        true
    }

    /// Apply a completed resolution. Completions from an older
    /// generation are discarded; their owning nodes are gone.
    pub fn apply(&mut self, generation: u64, reference: &str, result: Result<PathBuf, String>) {
        if generation != self.generation {
            tracing::debug!(%reference, "discarding stale image resolution");
            return;
        }
        let state = match result {
            Ok(path) => ImageSlotState::Loaded(path),
            Err(e) => {
                tracing::warn!(%reference, error = %e, "image resolution failed");
                ImageSlotState::Failed(e)
            }
        };
        self.slots.insert(reference.to_string(), state);
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Forget all slots and invalidate in-flight resolutions. Called
    /// when the dataset is replaced.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.generation += 1;
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Resolve a reference to a decoded, cached image file.
///
/// Blocking; runs on the background executor, never the UI thread.
pub fn resolve_image_reference(
    reference: &str,
    resources_dir: &Path,
    cache_dir: &Path,
) -> Result<PathBuf, String> {
    let bytes = fetch_bytes(reference, resources_dir)?;
    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| format!("failed to decode image {}: {}", reference, e))?;

    let cache_path = cache_dir.join(format!("{:016x}.png", reference_hash(reference)));
    decoded
        .save(&cache_path)
        .map_err(|e| format!("failed to cache image: {}", e))?;
    Ok(cache_path)
}

fn fetch_bytes(reference: &str, resources_dir: &Path) -> Result<Vec<u8>, String> {
    if reference.starts_with("http") {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(IMAGE_FETCH_TIMEOUT_SECS))
            .build()
            .map_err(|e| format!("http client: {}", e))?;
        let response = client
            .get(reference)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| format!("fetch failed: {}", e))?;
        let bytes = response.bytes().map_err(|e| format!("read failed: {}", e))?;
        Ok(bytes.to_vec())
    } else if let Some(resource) = reference.strip_prefix('/') {
        let path = resources_dir.join(resource);
        std::fs::read(&path).map_err(|e| format!("resource {}: {}", path.display(), e))
    } else {
        std::fs::read(reference).map_err(|e| format!("file {}: {}", reference, e))
    }
}

fn reference_hash(reference: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    reference.hash(&mut hasher);
    hasher.finish()
}
