mod common;

use common::{color_for, FailingRenderer, GradientRenderer, SolidRenderer};
use meshview_core::cache::{Generation, ScaledImageCache};
use meshview_core::error::MeshViewError;
use meshview_core::render::{RenderOptions, RenderToggle};

#[test]
fn test_empty_cache_has_no_generation() {
    let cache = ScaledImageCache::new();
    assert!(cache.current().is_none());
    assert_eq!(cache.next_id(), 1);
}

#[test]
fn test_regenerate_builds_both_images() {
    let renderer = SolidRenderer::new(800, 600);
    let mut cache = ScaledImageCache::new();
    let generation = cache
        .regenerate(&renderer, RenderOptions::default(), (200, 150))
        .unwrap();

    assert_eq!(generation.id, 1);
    assert_eq!(generation.full_size(), (800, 600));
    assert_eq!(generation.preview_size(), (200, 150));
    assert_eq!(generation.options, RenderOptions::default());
    assert_eq!(renderer.calls(), 1);
}

#[test]
fn test_preview_is_resampled_from_full_image() {
    let renderer = SolidRenderer::new(640, 480);
    let options = RenderOptions::default().with(RenderToggle::Monsters, false);
    let generation = Generation::build(&renderer, options, (64, 48), 1).unwrap();

    // Resampling a flat image leaves the colour intact.
    let expected = color_for(&options);
    assert_eq!(*generation.preview.get_pixel(0, 0), expected);
    assert_eq!(*generation.preview.get_pixel(63, 47), expected);
    assert_eq!(*generation.preview.get_pixel(31, 20), expected);
}

#[test]
fn test_ids_increase_and_old_generation_is_replaced() {
    let renderer = SolidRenderer::new(100, 100);
    let mut cache = ScaledImageCache::new();
    cache.regenerate(&renderer, RenderOptions::default(), (10, 10)).unwrap();
    let second = RenderOptions::default().with(RenderToggle::SubScenes, true);
    let generation = cache.regenerate(&renderer, second, (10, 10)).unwrap();

    assert_eq!(generation.id, 2);
    assert_eq!(generation.options, second);
    assert_eq!(cache.current().map(|g| g.id), Some(2));
    assert_eq!(cache.next_id(), 3);
}

#[test]
fn test_failed_regeneration_keeps_previous_images() {
    let mut cache = ScaledImageCache::new();
    cache
        .regenerate(&SolidRenderer::new(50, 40), RenderOptions::default(), (10, 8))
        .unwrap();

    let err = cache
        .regenerate(&FailingRenderer, RenderOptions::default(), (10, 8))
        .unwrap_err();
    assert!(matches!(err, MeshViewError::Render(_)), "got: {err}");

    let current = cache.current().expect("previous generation retained");
    assert_eq!(current.id, 1);
    assert_eq!(current.full_size(), (50, 40));
    // A failed attempt does not burn an id.
    assert_eq!(cache.next_id(), 2);
}

#[test]
fn test_zero_preview_size_is_rejected() {
    let renderer = SolidRenderer::new(50, 40);
    let mut cache = ScaledImageCache::new();
    let err = cache
        .regenerate(&renderer, RenderOptions::default(), (0, 10))
        .unwrap_err();
    assert!(matches!(err, MeshViewError::InvalidDimensions { width: 0, height: 10 }));
    assert!(cache.current().is_none());
    // Rejected before the expensive render.
    assert_eq!(renderer.calls(), 0);
}

#[test]
fn test_empty_render_is_rejected() {
    let renderer = SolidRenderer::new(0, 0);
    let mut cache = ScaledImageCache::new();
    assert!(cache.regenerate(&renderer, RenderOptions::default(), (10, 10)).is_err());
    assert!(cache.current().is_none());
}

#[test]
fn test_regeneration_is_idempotent() {
    let renderer = GradientRenderer {
        width: 300,
        height: 200,
    };
    let options = RenderOptions::default().with(RenderToggle::PrintLabels, true);
    let mut cache = ScaledImageCache::new();

    let first = cache.regenerate(&renderer, options, (75, 50)).unwrap().clone();
    let second = cache.regenerate(&renderer, options, (75, 50)).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.full.as_raw(), second.full.as_raw());
    assert_eq!(first.preview.as_raw(), second.preview.as_raw());
}

#[test]
fn test_release_drops_generation() {
    let mut cache = ScaledImageCache::new();
    cache
        .regenerate(&SolidRenderer::new(20, 20), RenderOptions::default(), (5, 5))
        .unwrap();
    assert_eq!(cache.release(), Some(1));
    assert!(cache.current().is_none());
    assert_eq!(cache.release(), None);
    // Ids keep counting after a release.
    assert_eq!(cache.next_id(), 2);
}

#[test]
fn test_install_external_generation() {
    let renderer = SolidRenderer::new(20, 20);
    let mut cache = ScaledImageCache::new();
    let generation = Generation::build(&renderer, RenderOptions::default(), (5, 5), cache.next_id()).unwrap();
    let installed = cache.install(generation);
    assert_eq!(installed.id, 1);
    assert_eq!(cache.next_id(), 2);
}

#[test]
fn test_install_with_later_id_advances_counter() {
    let renderer = SolidRenderer::new(20, 20);
    let mut cache = ScaledImageCache::new();
    let generation = Generation::build(&renderer, RenderOptions::default(), (5, 5), 7).unwrap();
    cache.install(generation);
    assert_eq!(cache.current().map(|g| g.id), Some(7));
    assert_eq!(cache.next_id(), 8);
}
