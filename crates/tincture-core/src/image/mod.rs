//! Immutable images tagged with a color space.
//!
//! Pixels are RGBA8 with straight alpha. An image is either backed by a
//! raster buffer or by a generator that produces the buffer on first use.

mod generator;

pub use generator::{EncodedGenerator, ImageGenerator};

use std::fmt;
use std::sync::Arc;

use ::image::RgbaImage;
use parking_lot::Mutex;

use crate::color_management::color_space::ColorSpace;
use crate::color_management::xform::ColorSpaceXform;
use crate::error::XformError;

enum PixelSource {
    Raster(Arc<RgbaImage>),
    Lazy {
        generator: Arc<dyn ImageGenerator>,
        decoded: Mutex<Option<Arc<RgbaImage>>>,
    },
}

/// An immutable 2D pixel source. Shared by reference as `Arc<Image>`.
pub struct Image {
    width: u32,
    height: u32,
    color_space: Option<Arc<ColorSpace>>,
    source: PixelSource,
}

impl Image {
    /// Wrap an existing raster buffer. `None` tags the pixels as sRGB.
    pub fn from_raster(pixels: Arc<RgbaImage>, color_space: Option<Arc<ColorSpace>>) -> Self {
        let (width, height) = pixels.dimensions();
        Self {
            width,
            height,
            color_space,
            source: PixelSource::Raster(pixels),
        }
    }

    /// Defer pixel production to `generator` until the pixels are needed.
    pub fn from_generator(
        generator: Arc<dyn ImageGenerator>,
        color_space: Option<Arc<ColorSpace>>,
    ) -> Self {
        let (width, height) = generator.dimensions();
        Self {
            width,
            height,
            color_space,
            source: PixelSource::Lazy {
                generator,
                decoded: Mutex::new(None),
            },
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The color space tag, `None` for untagged (sRGB) images.
    pub fn color_space(&self) -> Option<&Arc<ColorSpace>> {
        self.color_space.as_ref()
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self.source, PixelSource::Lazy { .. })
    }

    /// True when both images read from the same pixel buffer.
    pub fn shares_pixels_with(&self, other: &Image) -> bool {
        match (&self.source, &other.source) {
            (PixelSource::Raster(a), PixelSource::Raster(b)) => Arc::ptr_eq(a, b),
            (PixelSource::Lazy { generator: a, .. }, PixelSource::Lazy { generator: b, .. }) => {
                Arc::ptr_eq(a, b)
            }
            _ => false,
        }
    }

    /// Materialize the pixels, running the generator once for lazy images.
    pub fn pixels(&self) -> Result<Arc<RgbaImage>, XformError> {
        match &self.source {
            PixelSource::Raster(pixels) => Ok(Arc::clone(pixels)),
            PixelSource::Lazy { generator, decoded } => {
                let mut decoded = decoded.lock();
                if let Some(pixels) = decoded.as_ref() {
                    return Ok(Arc::clone(pixels));
                }

                let pixels = generator.generate()?;
                if pixels.dimensions() != self.dimensions() {
                    return Err(XformError::DimensionMismatch {
                        expected: self.dimensions(),
                        actual: pixels.dimensions(),
                    });
                }
                tracing::debug!("generated {}x{} image", self.width, self.height);

                let pixels = Arc::new(pixels);
                *decoded = Some(Arc::clone(&pixels));
                Ok(pixels)
            }
        }
    }

    /// Produce a new raster image tagged with `dst`.
    ///
    /// When the pixels are already in `dst` the new image shares this image's
    /// pixel buffer; otherwise the pixels are converted. The result is always
    /// a distinct `Image`.
    pub fn make_color_space(&self, dst: &Arc<ColorSpace>) -> Result<Image, XformError> {
        let pixels = self.pixels()?;
        let src = self.color_space.clone().unwrap_or_else(ColorSpace::srgb);

        if *src == **dst {
            return Ok(Image::from_raster(pixels, Some(Arc::clone(dst))));
        }

        let xform = ColorSpaceXform::new(&src, dst)?;
        let mut converted = RgbaImage::clone(&pixels);
        xform.apply_rgba8_buffer(&mut converted)?;
        Ok(Image::from_raster(Arc::new(converted), Some(Arc::clone(dst))))
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("color_space", &self.color_space)
            .field("lazy", &self.is_lazy())
            .finish()
    }
}
