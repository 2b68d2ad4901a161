/// Errors raised while building transforms or materializing pixels.
#[derive(Debug, thiserror::Error)]
pub enum XformError {
    #[error("degenerate primaries: {0}")]
    DegeneratePrimaries(&'static str),
    #[error("invalid transfer function: {0}")]
    InvalidTransfer(String),
    #[error("pixel buffer length {len} is not a whole number of RGBA8 pixels")]
    PixelBuffer { len: usize },
    #[error("generator produced {actual:?} pixels, expected {expected:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
    #[error("image generator failed: {0}")]
    Generator(String),
    #[error("failed to decode image: {0}")]
    Decode(#[from] ::image::ImageError),
}
