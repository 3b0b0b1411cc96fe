use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_PREVIEW_HEIGHT, DEFAULT_PREVIEW_WIDTH};
use crate::render::RenderOptions;
use crate::world::WorldParams;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_PREVIEW_WIDTH,
            height: DEFAULT_PREVIEW_HEIGHT,
        }
    }
}

impl PreviewConfig {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Everything needed to build a world and show it: loaded from TOML by the
/// binaries, every section optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub world: WorldParams,
    pub render: RenderOptions,
    pub preview: PreviewConfig,
}
