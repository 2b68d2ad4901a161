use std::sync::Arc;

use ::image::RgbaImage;
use tincture_core::{ColorSpace, Image};

use super::ColorSpaceXformer;

impl ColorSpaceXformer {
    /// Produce a distinct image tagged with the destination space.
    ///
    /// Returns `None` when the image's pixels cannot be materialized or its
    /// own color space cannot be converted.
    pub fn apply_image(&self, image: &Image) -> Option<Arc<Image>> {
        match image.make_color_space(&self.dst) {
            Ok(xformed) => Some(Arc::new(xformed)),
            Err(e) => {
                tracing::warn!(
                    "image {}x{} not retargeted: {e}",
                    image.width(),
                    image.height()
                );
                None
            }
        }
    }

    /// Retarget a raw RGBA bitmap tagged `color_space` (`None` for sRGB).
    pub fn apply_bitmap(
        &self,
        bitmap: &RgbaImage,
        color_space: Option<Arc<ColorSpace>>,
    ) -> Option<Arc<Image>> {
        let wrapped = Image::from_raster(Arc::new(bitmap.clone()), color_space);
        self.apply_image(&wrapped)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ::image::{Rgba, RgbaImage};
    use tincture_core::{ColorSpace, Image, ImageGenerator, XformError};

    use super::ColorSpaceXformer;

    #[derive(Debug)]
    struct Broken;

    impl ImageGenerator for Broken {
        fn dimensions(&self) -> (u32, u32) {
            (8, 8)
        }

        fn generate(&self) -> Result<RgbaImage, XformError> {
            Err(XformError::Generator("corrupt stream".into()))
        }
    }

    #[test]
    fn test_result_is_distinct_and_tagged() {
        let xformer = ColorSpaceXformer::make(ColorSpace::display_p3()).unwrap();
        let src = Image::from_raster(
            Arc::new(RgbaImage::from_pixel(2, 2, Rgba([0, 128, 255, 255]))),
            None,
        );
        let out = xformer.apply_image(&src).unwrap();
        assert!(!std::ptr::eq(Arc::as_ptr(&out), &src));
        assert_eq!(out.dimensions(), src.dimensions());
        assert_eq!(**out.color_space().unwrap(), **xformer.dst());
    }

    #[test]
    fn test_already_in_destination_shares_pixels() {
        let xformer = ColorSpaceXformer::make(ColorSpace::display_p3()).unwrap();
        let src = Image::from_raster(
            Arc::new(RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 4]))),
            Some(ColorSpace::display_p3()),
        );
        let out = xformer.apply_image(&src).unwrap();
        assert!(!std::ptr::eq(Arc::as_ptr(&out), &src));
        assert!(out.shares_pixels_with(&src));
    }

    #[test]
    fn test_unmaterializable_image_fails() {
        let xformer = ColorSpaceXformer::make(ColorSpace::display_p3()).unwrap();
        let src = Image::from_generator(Arc::new(Broken), None);
        assert!(xformer.apply_image(&src).is_none());
    }

    #[test]
    fn test_bitmap_is_converted() {
        let xformer = ColorSpaceXformer::make(ColorSpace::rec2020()).unwrap();
        let bitmap = RgbaImage::from_pixel(3, 1, Rgba([255, 0, 0, 200]));
        let out = xformer.apply_bitmap(&bitmap, None).unwrap();
        let expected = xformer.apply_color(tincture_core::Color::from_argb(200, 255, 0, 0));
        let pixels = out.pixels().unwrap();
        assert!(pixels.pixels().all(|p| p.0 == expected.to_rgba8()));
        // Caller's bitmap untouched.
        assert_eq!(bitmap.get_pixel(0, 0).0, [255, 0, 0, 200]);
    }
}
