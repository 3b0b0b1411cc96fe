use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use crate::cache::{Generation, GenerationInfo, ScaledImageCache};
use crate::error::{MeshViewError, Result};
use crate::render::{MeshRenderer, RenderOptions};

/// The two views that show the diagnostic image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Stage,
    Preview,
}

/// Repaint requests from the core to whatever hosts the views.
pub trait Invalidate: Send + Sync {
    fn invalidate(&self, view: View);
}

impl<F> Invalidate for F
where
    F: Fn(View) + Send + Sync,
{
    fn invalidate(&self, view: View) {
        self(view)
    }
}

/// Image state behind the single lock: both images and the closed flag
/// always change together.
#[derive(Debug, Default)]
struct ImageState {
    cache: ScaledImageCache,
    closed: bool,
}

/// Serialises regenerations and guards the image pair against concurrent paints.
///
/// A regeneration is a two-step affair: [`RenderCoordinator::begin_regeneration`]
/// disables input and snapshots the options, then [`RegenerationTicket::run`]
/// renders and swaps the new generation in. Input stays disabled for as long
/// as the ticket lives, so the second step can run on another thread.
pub struct RenderCoordinator {
    renderer: Mutex<Option<Arc<dyn MeshRenderer>>>,
    images: Mutex<ImageState>,
    input_enabled: AtomicBool,
    invalidator: Box<dyn Invalidate>,
}

impl RenderCoordinator {
    pub fn new(renderer: Arc<dyn MeshRenderer>, invalidator: impl Invalidate + 'static) -> Self {
        Self {
            renderer: Mutex::new(Some(renderer)),
            images: Mutex::new(ImageState::default()),
            input_enabled: AtomicBool::new(true),
            invalidator: Box::new(invalidator),
        }
    }

    fn lock_images(&self) -> Result<MutexGuard<'_, ImageState>> {
        self.images.lock().map_err(|_| MeshViewError::LockPoisoned)
    }

    /// Whether configuration input is currently accepted.
    pub fn is_input_enabled(&self) -> bool {
        self.input_enabled.load(Ordering::Acquire)
    }

    pub fn is_closed(&self) -> bool {
        self.images.lock().map(|s| s.closed).unwrap_or(true)
    }

    /// Disable configuration input and take a snapshot of `options`.
    ///
    /// Fails with [`MeshViewError::RegenerationInProgress`] while another
    /// ticket is alive.
    pub fn begin_regeneration(self: &Arc<Self>, options: RenderOptions) -> Result<RegenerationTicket> {
        if self.lock_images()?.closed {
            return Err(MeshViewError::Closed);
        }
        if self
            .input_enabled
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Regeneration request rejected: one is already in flight");
            return Err(MeshViewError::RegenerationInProgress);
        }
        Ok(RegenerationTicket {
            coordinator: Arc::clone(self),
            options,
        })
    }

    /// Begin and run a regeneration on the calling thread.
    pub fn regenerate(
        self: &Arc<Self>,
        options: RenderOptions,
        preview_size: (u32, u32),
    ) -> Result<GenerationInfo> {
        self.begin_regeneration(options)?.run(preview_size)
    }

    /// Run `f` against the current generation while holding the image lock.
    pub fn paint<T>(&self, f: impl FnOnce(&Generation) -> T) -> Result<T> {
        let state = self.lock_images()?;
        if state.closed {
            return Err(MeshViewError::Closed);
        }
        let generation = state.cache.current().ok_or(MeshViewError::NoImage)?;
        Ok(f(generation))
    }

    pub fn current_generation(&self) -> Option<GenerationInfo> {
        let state = self.images.lock().ok()?;
        state.cache.current().map(GenerationInfo::from)
    }

    /// Release both images and the renderer. Safe to call more than once.
    pub fn close(&self) {
        let mut state = self.images.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("Image lock poisoned during close; releasing anyway");
            PoisonError::into_inner(poisoned)
        });
        let released = state.cache.release();
        state.closed = true;
        drop(state);

        let renderer = self
            .renderer
            .lock()
            .unwrap_or_else(|poisoned| {
                tracing::warn!("Renderer lock poisoned during close");
                PoisonError::into_inner(poisoned)
            })
            .take();
        tracing::debug!(
            generation = ?released,
            renderer_dropped = renderer.is_some(),
            "Viewport closed"
        );
    }

    fn renderer(&self) -> Result<Arc<dyn MeshRenderer>> {
        self.renderer
            .lock()
            .map_err(|_| MeshViewError::LockPoisoned)?
            .clone()
            .ok_or(MeshViewError::Closed)
    }
}

/// Proof that input is disabled for one regeneration. Dropping it, whether
/// the regeneration ran, failed or was abandoned, re-enables input.
pub struct RegenerationTicket {
    coordinator: Arc<RenderCoordinator>,
    options: RenderOptions,
}

impl RegenerationTicket {
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render the snapshot, swap the new generation in and invalidate both views.
    ///
    /// The renderer runs without the image lock held so paints of the old
    /// generation continue meanwhile; only the swap takes the lock.
    pub fn run(self, preview_size: (u32, u32)) -> Result<GenerationInfo> {
        let coordinator = &self.coordinator;
        let start = Instant::now();
        let renderer = coordinator.renderer()?;
        let id = coordinator.lock_images()?.cache.next_id();

        let generation = match Generation::build(renderer.as_ref(), self.options, preview_size, id) {
            Ok(g) => g,
            Err(e) => {
                tracing::warn!(id, "Regeneration failed, keeping previous images: {e}");
                return Err(e);
            }
        };

        let info = {
            let mut state = coordinator.lock_images()?;
            if state.closed {
                return Err(MeshViewError::Closed);
            }
            GenerationInfo::from(state.cache.install(generation))
        };

        tracing::info!(
            id = info.id,
            width = info.full_size.0,
            height = info.full_size.1,
            "Regenerated diagnostic image in {:.0}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );
        coordinator.invalidator.invalidate(View::Stage);
        coordinator.invalidator.invalidate(View::Preview);
        Ok(info)
    }
}

impl Drop for RegenerationTicket {
    fn drop(&mut self) {
        self.coordinator.input_enabled.store(true, Ordering::Release);
    }
}
