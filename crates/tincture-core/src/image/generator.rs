//! Deferred pixel production for lazy images.

use std::fmt;
use std::io::Cursor;
use std::sync::Arc;

use ::image::{ImageReader, RgbaImage};

use crate::error::XformError;

/// Produces the pixels of a lazy [`Image`](super::Image) on demand.
///
/// Dimensions must be known up front; `generate` must return a buffer of
/// exactly that size.
pub trait ImageGenerator: fmt::Debug + Send + Sync {
    fn dimensions(&self) -> (u32, u32);

    fn generate(&self) -> Result<RgbaImage, XformError>;
}

/// Decodes encoded bytes (PNG, JPEG) with the `image` crate.
pub struct EncodedGenerator {
    data: Arc<[u8]>,
    width: u32,
    height: u32,
}

impl EncodedGenerator {
    /// Reads only the header; the full decode waits for [`generate`](ImageGenerator::generate).
    pub fn new(data: impl Into<Arc<[u8]>>) -> Result<Self, XformError> {
        let data = data.into();
        let (width, height) = ImageReader::new(Cursor::new(&data[..]))
            .with_guessed_format()
            .map_err(|e| XformError::Decode(::image::ImageError::IoError(e)))?
            .into_dimensions()?;
        Ok(Self { data, width, height })
    }
}

impl ImageGenerator for EncodedGenerator {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn generate(&self) -> Result<RgbaImage, XformError> {
        Ok(::image::load_from_memory(&self.data)?.to_rgba8())
    }
}

impl fmt::Debug for EncodedGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedGenerator")
            .field("bytes", &self.data.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
