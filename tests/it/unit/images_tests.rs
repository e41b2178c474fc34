//! Unit tests for image slot resolution and caching.

use dataviewer::images::{resolve_image_reference, ImageSlotState, ImageStore};
use std::path::{Path, PathBuf};

#[test]
fn slot_moves_from_loading_to_loaded() {
    let mut store = ImageStore::new();
    assert!(store.begin("/photos/cat.png"));
    assert_eq!(store.state("/photos/cat.png"), Some(&ImageSlotState::Loading));

    store.apply(
        store.generation(),
        "/photos/cat.png",
        Ok(PathBuf::from("/tmp/cache/abc.png")),
    );
    assert!(matches!(
        store.state("/photos/cat.png"),
        Some(ImageSlotState::Loaded(_))
    ));
}

#[test]
fn second_begin_for_the_same_reference_is_rejected() {
    let mut store = ImageStore::new();
    assert!(store.begin("http://example.com/a.png"));
    assert!(!store.begin("http://example.com/a.png"));
    assert_eq!(store.len(), 1);
}

#[test]
fn dataset_replacement_invalidates_inflight_resolutions() {
    let mut store = ImageStore::new();
    store.begin("/old.png");
    let stale_generation = store.generation();

    store.reset();
    store.apply(stale_generation, "/old.png", Ok(PathBuf::from("/tmp/x.png")));

    assert!(store.is_empty());
    assert!(store.begin("/old.png"));
}

#[test]
fn local_file_references_resolve_and_cache_as_png() {
    let dir = tempfile::tempdir().unwrap();
    let cache = tempfile::tempdir().unwrap();

    // Smallest valid image: 1x1 white pixel
    let source = dir.path().join("pixel.png");
    let pixel = image::RgbImage::from_pixel(1, 1, image::Rgb([255u8, 255, 255]));
    pixel.save(&source).unwrap();

    let cached = resolve_image_reference(
        source.to_str().unwrap(),
        Path::new("/unused-resources"),
        cache.path(),
    )
    .unwrap();

    assert!(cached.starts_with(cache.path()));
    assert_eq!(cached.extension().and_then(|e| e.to_str()), Some("png"));
    assert!(image::open(&cached).is_ok());
}

#[test]
fn slash_references_are_rooted_in_the_resources_dir() {
    let resources = tempfile::tempdir().unwrap();
    let cache = tempfile::tempdir().unwrap();

    let pixel = image::RgbImage::from_pixel(1, 1, image::Rgb([0u8, 0, 0]));
    pixel.save(resources.path().join("logo.png")).unwrap();

    let cached = resolve_image_reference("/logo.png", resources.path(), cache.path()).unwrap();
    assert!(cached.starts_with(cache.path()));
}

#[test]
fn undecodable_bytes_fail_with_a_message() {
    let dir = tempfile::tempdir().unwrap();
    let cache = tempfile::tempdir().unwrap();
    let source = dir.path().join("not-an-image.png");
    std::fs::write(&source, b"plain text").unwrap();

    let err = resolve_image_reference(
        source.to_str().unwrap(),
        Path::new("/unused-resources"),
        cache.path(),
    )
    .unwrap_err();
    assert!(err.contains("failed to decode"));
}
