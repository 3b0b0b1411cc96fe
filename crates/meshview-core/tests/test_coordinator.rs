mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use common::{color_for, gated_renderer, FailingRenderer, SolidRenderer};
use meshview_core::coordinator::{RenderCoordinator, View};
use meshview_core::error::MeshViewError;
use meshview_core::render::{MeshRenderer, RenderOptions, RenderToggle};

fn recording() -> (Arc<Mutex<Vec<View>>>, impl Fn(View) + Send + Sync + 'static) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    (log, move |view: View| sink.lock().unwrap().push(view))
}

fn coordinator(renderer: Arc<dyn MeshRenderer>) -> Arc<RenderCoordinator> {
    Arc::new(RenderCoordinator::new(renderer, |_: View| {}))
}

#[test]
fn test_paint_before_first_generation() {
    let c = coordinator(Arc::new(SolidRenderer::new(10, 10)));
    assert!(matches!(c.paint(|_| ()), Err(MeshViewError::NoImage)));
    assert!(c.current_generation().is_none());
}

#[test]
fn test_regenerate_installs_and_invalidates_both_views() {
    let (log, invalidator) = recording();
    let c = Arc::new(RenderCoordinator::new(
        Arc::new(SolidRenderer::new(400, 300)),
        invalidator,
    ));

    let info = c.regenerate(RenderOptions::default(), (40, 30)).unwrap();
    assert_eq!(info.id, 1);
    assert_eq!(info.full_size, (400, 300));
    assert_eq!(info.preview_size, (40, 30));
    assert_eq!(*log.lock().unwrap(), vec![View::Stage, View::Preview]);
    assert!(c.is_input_enabled());

    let (full, preview) = c.paint(|g| (g.full.dimensions(), g.preview.dimensions())).unwrap();
    assert_eq!(full, (400, 300));
    assert_eq!(preview, (40, 30));
}

#[test]
fn test_ticket_holds_options_snapshot() {
    let c = coordinator(Arc::new(SolidRenderer::new(10, 10)));
    let mut options = RenderOptions::default();
    let ticket = c.begin_regeneration(options).unwrap();

    // Later edits do not leak into the in-flight regeneration.
    options.set(RenderToggle::FillCells, false);
    assert!(ticket.options().fill_cells);

    ticket.run((5, 5)).unwrap();
    assert!(c.paint(|g| g.options.fill_cells).unwrap());
}

#[test]
fn test_second_request_rejected_while_pending() {
    let (renderer, gate) = gated_renderer();
    let c = coordinator(Arc::new(renderer));

    let ticket = c.begin_regeneration(RenderOptions::default()).unwrap();
    assert!(!c.is_input_enabled());
    let worker = thread::spawn(move || ticket.run((8, 4)));

    gate.started.recv().unwrap();
    let toggled = RenderOptions::default().with(RenderToggle::Players, false);
    assert!(matches!(
        c.begin_regeneration(toggled),
        Err(MeshViewError::RegenerationInProgress)
    ));
    assert!(matches!(
        c.regenerate(toggled, (8, 4)),
        Err(MeshViewError::RegenerationInProgress)
    ));

    gate.release.send(()).unwrap();
    let info = worker.join().unwrap().unwrap();
    assert_eq!(info.id, 1);
    assert!(c.is_input_enabled());

    // Now a new one is accepted.
    let ticket = c.begin_regeneration(toggled).unwrap();
    drop(ticket);
    assert!(c.is_input_enabled());
}

#[test]
fn test_first_failure_reenables_input() {
    let c = coordinator(Arc::new(FailingRenderer));
    let err = c.regenerate(RenderOptions::default(), (8, 4)).unwrap_err();
    assert!(matches!(err, MeshViewError::Render(_)));
    assert!(c.is_input_enabled());
    assert!(matches!(c.paint(|_| ()), Err(MeshViewError::NoImage)));
}

#[test]
fn test_failure_after_success_retains_previous_generation() {
    let fail = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&fail);
    let renderer = move |options: &RenderOptions| {
        if flag.load(Ordering::SeqCst) {
            Err(MeshViewError::Render("world unloaded".into()))
        } else {
            Ok(image::RgbaImage::from_pixel(16, 16, color_for(options)))
        }
    };
    let (log, invalidator) = recording();
    let c = Arc::new(RenderCoordinator::new(Arc::new(renderer), invalidator));

    c.regenerate(RenderOptions::default(), (4, 4)).unwrap();
    log.lock().unwrap().clear();

    fail.store(true, Ordering::SeqCst);
    let toggled = RenderOptions::default().with(RenderToggle::Npcs, false);
    assert!(c.regenerate(toggled, (4, 4)).is_err());

    assert!(c.is_input_enabled());
    assert!(log.lock().unwrap().is_empty(), "failed regeneration must not invalidate");
    let (id, options) = c.paint(|g| (g.id, g.options)).unwrap();
    assert_eq!(id, 1);
    assert_eq!(options, RenderOptions::default());
}

#[test]
fn test_abandoned_ticket_reenables_input() {
    let c = coordinator(Arc::new(SolidRenderer::new(10, 10)));
    {
        let _ticket = c.begin_regeneration(RenderOptions::default()).unwrap();
        assert!(!c.is_input_enabled());
    }
    assert!(c.is_input_enabled());
    assert!(c.current_generation().is_none());
}

#[test]
fn test_concurrent_paints_never_see_torn_generation() {
    let c = coordinator(Arc::new(SolidRenderer::new(64, 48)));
    let a = RenderOptions::default();
    let b = RenderOptions::default().with(RenderToggle::MasterScenes, false);
    c.regenerate(a, (16, 12)).unwrap();

    let done = Arc::new(AtomicBool::new(false));
    let painters: Vec<_> = (0..4)
        .map(|_| {
            let c = Arc::clone(&c);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut checked = 0usize;
                loop {
                    c.paint(|g| {
                        let expected = color_for(&g.options);
                        assert_eq!(*g.full.get_pixel(0, 0), expected, "full image from another generation");
                        assert_eq!(*g.preview.get_pixel(0, 0), expected, "preview from another generation");
                    })
                    .unwrap();
                    checked += 1;
                    if done.load(Ordering::SeqCst) {
                        break checked;
                    }
                }
            })
        })
        .collect();

    for i in 0..50 {
        let options = if i % 2 == 0 { b } else { a };
        c.regenerate(options, (16, 12)).unwrap();
    }
    done.store(true, Ordering::SeqCst);

    for p in painters {
        assert!(p.join().unwrap() > 0);
    }
    assert_eq!(c.current_generation().map(|g| g.id), Some(51));
}

#[test]
fn test_close_releases_images_and_renderer() {
    let renderer: Arc<dyn MeshRenderer> = Arc::new(SolidRenderer::new(32, 32));
    let c = Arc::new(RenderCoordinator::new(Arc::clone(&renderer), |_: View| {}));
    c.regenerate(RenderOptions::default(), (8, 8)).unwrap();
    assert_eq!(Arc::strong_count(&renderer), 2);

    c.close();
    assert!(c.is_closed());
    assert_eq!(Arc::strong_count(&renderer), 1);
    assert!(c.current_generation().is_none());
    assert!(matches!(c.paint(|_| ()), Err(MeshViewError::Closed)));
    assert!(matches!(
        c.regenerate(RenderOptions::default(), (8, 8)),
        Err(MeshViewError::Closed)
    ));

    // Closing twice is harmless.
    c.close();
    assert!(c.is_closed());
}

#[test]
fn test_close_during_regeneration_discards_result() {
    let (renderer, gate) = gated_renderer();
    let c = coordinator(Arc::new(renderer));
    let ticket = c.begin_regeneration(RenderOptions::default()).unwrap();
    let worker = thread::spawn(move || ticket.run((8, 4)));

    gate.started.recv().unwrap();
    c.close();
    gate.release.send(()).unwrap();

    assert!(matches!(worker.join().unwrap(), Err(MeshViewError::Closed)));
    assert!(matches!(c.paint(|_| ()), Err(MeshViewError::Closed)));
}
