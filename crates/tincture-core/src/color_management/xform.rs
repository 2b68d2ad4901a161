//! Numeric source → destination color transform.
//!
//! ```text
//! rgb_dst = encode_dst( M · decode_src(rgb_src) )
//! M       = to_xyz(dst)⁻¹ · to_xyz(src)
//! ```
//!
//! Alpha is straight (unpremultiplied) and never touched by the color math.

use glam::{DMat3, DVec3};

use super::color_space::ColorSpace;
use super::transfer::{TransferFn, TransferFunction};
use crate::color::Color;
use crate::error::XformError;

/// A transform bound to one source and one destination color space.
///
/// Immutable once built and free of interior state, so every method is
/// reentrant and the transform may be shared across threads.
#[derive(Debug, Clone)]
pub struct ColorSpaceXform {
    src_transfer: TransferFn,
    dst_transfer: TransferFn,
    matrix: DMat3,
    identity: bool,
}

impl ColorSpaceXform {
    /// Build the transform, failing when either space cannot be described
    /// numerically (degenerate primaries, invalid curve).
    pub fn new(src: &ColorSpace, dst: &ColorSpace) -> Result<Self, XformError> {
        src.transfer.validate()?;
        dst.transfer.validate()?;

        let src_to_xyz = src.primaries.to_xyz_d65()?;
        let dst_to_xyz = dst.primaries.to_xyz_d65()?;

        Ok(Self {
            src_transfer: src.transfer,
            dst_transfer: dst.transfer,
            matrix: dst_to_xyz.inverse() * src_to_xyz,
            identity: src == dst,
        })
    }

    /// True when source and destination are the same space. Identity
    /// transforms return their input bit-for-bit.
    pub fn is_identity(&self) -> bool {
        self.identity
    }

    /// The linear-light gamut matrix.
    pub fn matrix(&self) -> DMat3 {
        self.matrix
    }

    /// Convert one encoded RGB triplet in `[0, 1]`.
    pub fn apply_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        if self.identity {
            return rgb;
        }
        let linear = DVec3::new(
            self.src_transfer.to_linear(rgb[0]) as f64,
            self.src_transfer.to_linear(rgb[1]) as f64,
            self.src_transfer.to_linear(rgb[2]) as f64,
        );
        let out = self.matrix * linear;
        [
            self.dst_transfer.to_encoded(out.x as f32),
            self.dst_transfer.to_encoded(out.y as f32),
            self.dst_transfer.to_encoded(out.z as f32),
        ]
    }

    /// Convert one RGBA8 pixel, clamping out-of-gamut results.
    pub fn apply_rgba8(&self, px: [u8; 4]) -> [u8; 4] {
        if self.identity {
            return px;
        }
        let [r, g, b] = self.apply_rgb([unorm(px[0]), unorm(px[1]), unorm(px[2])]);
        [to_u8(r), to_u8(g), to_u8(b), px[3]]
    }

    pub fn apply_color(&self, color: Color) -> Color {
        Color::from_rgba8(self.apply_rgba8(color.to_rgba8()))
    }

    /// Batch form of [`apply_color`](Self::apply_color).
    ///
    /// # Panics
    /// If `dst` and `src` differ in length.
    pub fn apply_colors(&self, dst: &mut [Color], src: &[Color]) {
        assert_eq!(
            dst.len(),
            src.len(),
            "color batch length mismatch: {} destination slots for {} colors",
            dst.len(),
            src.len()
        );
        for (out, &color) in dst.iter_mut().zip(src) {
            *out = self.apply_color(color);
        }
    }

    /// Convert a tightly packed RGBA8 buffer in place.
    pub fn apply_rgba8_buffer(&self, bytes: &mut [u8]) -> Result<(), XformError> {
        if bytes.len() % 4 != 0 {
            return Err(XformError::PixelBuffer { len: bytes.len() });
        }
        if self.identity {
            return Ok(());
        }
        let pixels: &mut [[u8; 4]] = bytemuck::cast_slice_mut(bytes);
        for px in pixels {
            *px = self.apply_rgba8(*px);
        }
        Ok(())
    }
}

#[inline]
fn unorm(v: u8) -> f32 {
    v as f32 / 255.0
}

#[inline]
fn to_u8(v: f32) -> u8 {
    // NaN clamps to 0 through the `as` cast.
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
