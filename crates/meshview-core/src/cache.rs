use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::{MeshViewError, Result};
use crate::render::{MeshRenderer, RenderOptions};

/// One complete regeneration: a full-resolution diagnostic image plus the
/// preview resampled from it. The two images never exist apart.
#[derive(Clone, Debug)]
pub struct Generation {
    pub id: u64,
    pub options: RenderOptions,
    pub full: RgbaImage,
    pub preview: RgbaImage,
}

impl Generation {
    /// Render `options` and derive a `preview_size` preview from the result.
    ///
    /// Bicubic (Catmull-Rom) resampling keeps thin mesh edges readable at
    /// small preview sizes.
    pub fn build<R: MeshRenderer + ?Sized>(
        renderer: &R,
        options: RenderOptions,
        preview_size: (u32, u32),
        id: u64,
    ) -> Result<Generation> {
        let (pw, ph) = preview_size;
        if pw == 0 || ph == 0 {
            return Err(MeshViewError::InvalidDimensions {
                width: pw,
                height: ph,
            });
        }

        let full = renderer.render(&options)?;
        if full.width() == 0 || full.height() == 0 {
            return Err(MeshViewError::InvalidDimensions {
                width: full.width(),
                height: full.height(),
            });
        }
        let preview = imageops::resize(&full, pw, ph, FilterType::CatmullRom);

        Ok(Generation {
            id,
            options,
            full,
            preview,
        })
    }

    pub fn full_size(&self) -> (u32, u32) {
        self.full.dimensions()
    }

    pub fn preview_size(&self) -> (u32, u32) {
        self.preview.dimensions()
    }
}

/// Lightweight description of an installed generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationInfo {
    pub id: u64,
    pub full_size: (u32, u32),
    pub preview_size: (u32, u32),
}

impl From<&Generation> for GenerationInfo {
    fn from(g: &Generation) -> Self {
        Self {
            id: g.id,
            full_size: g.full_size(),
            preview_size: g.preview_size(),
        }
    }
}

/// Holds at most one generation of (diagnostic, preview) images.
#[derive(Debug, Default)]
pub struct ScaledImageCache {
    current: Option<Generation>,
    last_id: u64,
}

impl ScaledImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Generation> {
        self.current.as_ref()
    }

    /// Id the next generation will receive.
    pub fn next_id(&self) -> u64 {
        self.last_id + 1
    }

    /// Build and install a new generation.
    ///
    /// On failure nothing changes: the previous generation stays installed.
    pub fn regenerate<R: MeshRenderer + ?Sized>(
        &mut self,
        renderer: &R,
        options: RenderOptions,
        preview_size: (u32, u32),
    ) -> Result<&Generation> {
        let generation = Generation::build(renderer, options, preview_size, self.next_id())?;
        Ok(self.install(generation))
    }

    /// Replace the held generation, dropping the previous one.
    ///
    /// Generations built elsewhere must carry `next_id()`; ids only move forward.
    pub fn install(&mut self, generation: Generation) -> &Generation {
        self.last_id = self.last_id.max(generation.id);
        if let Some(old) = self.current.take() {
            tracing::debug!(old = old.id, new = generation.id, "Releasing superseded generation");
        }
        self.current.insert(generation)
    }

    /// Drop both images. Returns the id of the released generation, if any.
    pub fn release(&mut self) -> Option<u64> {
        let released = self.current.take().map(|g| g.id);
        if let Some(id) = released {
            tracing::debug!(id, "Released generation");
        }
        released
    }
}
