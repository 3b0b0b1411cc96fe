use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeshViewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid world parameters: {0}")]
    InvalidWorldParams(String),

    #[error("Mesh rendering failed: {0}")]
    Render(String),

    #[error("A regeneration is already in progress")]
    RegenerationInProgress,

    #[error("No diagnostic image has been generated yet")]
    NoImage,

    #[error("Viewport has been closed")]
    Closed,

    #[error("Image lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, MeshViewError>;
