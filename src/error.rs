use thiserror::Error;

/// Errors surfaced by the canvas outside of the (infallible) drawing path
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to read or write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid canvas configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid brush width range: {min}..={max}")]
    InvalidLineWidthRange { min: f32, max: f32 },
}

/// Result type for canvas operations that can fail
pub type CanvasResult<T> = Result<T, CanvasError>;
