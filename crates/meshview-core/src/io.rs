use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::cache::Generation;
use crate::error::Result;

/// Save an RGBA image as 8-bit PNG.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save the full-resolution image of `generation`, and its preview when a
/// second path is given.
pub fn save_generation(generation: &Generation, stage_path: &Path, preview_path: Option<&Path>) -> Result<()> {
    save_png(&generation.full, stage_path)?;
    if let Some(path) = preview_path {
        save_png(&generation.preview, path)?;
    }
    Ok(())
}
