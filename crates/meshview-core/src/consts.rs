/// Default preview (minimap) width in pixels.
pub const DEFAULT_PREVIEW_WIDTH: u32 = 320;

/// Default preview (minimap) height in pixels.
pub const DEFAULT_PREVIEW_HEIGHT: u32 = 240;

/// Stroke width of the visible-region rectangle drawn over the preview.
pub const SELECTION_STROKE_WIDTH: f32 = 2.0;

/// RGBA colour of the visible-region rectangle.
pub const SELECTION_COLOR: [u8; 4] = [0, 0, 255, 255];

/// Background both views are cleared to before the image is drawn.
pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];

/// Largest diagnostic image edge the navmesh renderer will allocate.
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;

/// Pixel size of one glyph cell of the built-in label font.
pub const LABEL_SCALE: u32 = 2;

/// Radius of the disc drawn for each actor.
pub const ACTOR_RADIUS: i32 = 4;

/// Minimum pixel count of a cell row pass to go parallel.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;
