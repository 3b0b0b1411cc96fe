#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::Mutex;

use image::{Rgba, RgbaImage};
use meshview_core::error::{MeshViewError, Result};
use meshview_core::render::{MeshRenderer, RenderOptions};
use meshview_core::world::WorldParams;

/// Colour a renderer fills with for a given set of options, so a test can
/// tell which snapshot an image came from.
pub fn color_for(options: &RenderOptions) -> Rgba<u8> {
    let mut bits = 0u8;
    for (i, (_, on)) in options.toggles().enumerate().take(8) {
        if on {
            bits |= 1 << i;
        }
    }
    Rgba([bits, 255 - bits, if options.fill_cells { 200 } else { 50 }, 255])
}

/// Fills the whole image with `color_for(options)`.
pub struct SolidRenderer {
    pub width: u32,
    pub height: u32,
    pub calls: AtomicUsize,
}

impl SolidRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MeshRenderer for SolidRenderer {
    fn render(&self, options: &RenderOptions) -> Result<RgbaImage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(RgbaImage::from_pixel(self.width, self.height, color_for(options)))
    }
}

/// Diagonal gradient whose channels depend on the options; exercises resampling.
pub struct GradientRenderer {
    pub width: u32,
    pub height: u32,
}

impl MeshRenderer for GradientRenderer {
    fn render(&self, options: &RenderOptions) -> Result<RgbaImage> {
        let tint = color_for(options);
        Ok(RgbaImage::from_fn(self.width, self.height, |x, y| {
            let v = ((x + y) % 256) as u8;
            Rgba([v, tint.0[1], tint.0[2], 255])
        }))
    }
}

pub struct FailingRenderer;

impl MeshRenderer for FailingRenderer {
    fn render(&self, _options: &RenderOptions) -> Result<RgbaImage> {
        Err(MeshViewError::Render("mesh unavailable".into()))
    }
}

/// Blocks inside `render` until the test lets it go.
pub struct GatedRenderer {
    started: Mutex<mpsc::Sender<()>>,
    release: Mutex<mpsc::Receiver<()>>,
}

/// Handles the test keeps to observe and release a `GatedRenderer`.
pub struct Gate {
    pub started: mpsc::Receiver<()>,
    pub release: mpsc::Sender<()>,
}

pub fn gated_renderer() -> (GatedRenderer, Gate) {
    let (started_tx, started_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    (
        GatedRenderer {
            started: Mutex::new(started_tx),
            release: Mutex::new(release_rx),
        },
        Gate {
            started: started_rx,
            release: release_tx,
        },
    )
}

impl MeshRenderer for GatedRenderer {
    fn render(&self, options: &RenderOptions) -> Result<RgbaImage> {
        let _ = self.started.lock().unwrap().send(());
        let _ = self.release.lock().unwrap().recv();
        Ok(RgbaImage::from_pixel(32, 16, color_for(options)))
    }
}

/// A small world that renders quickly.
pub fn small_world_params() -> WorldParams {
    WorldParams {
        scene_columns: 3,
        scene_rows: 2,
        scene_size: 60,
        cell_size: 10,
        monsters: 5,
        npcs: 2,
        players: 1,
        ..WorldParams::default()
    }
}
