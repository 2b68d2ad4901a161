use tincture_core::Color;

use super::ColorSpaceXformer;

impl ColorSpaceXformer {
    /// Convert one sRGB color. Alpha passes through.
    pub fn apply_color(&self, color: Color) -> Color {
        self.from_srgb.apply_color(color)
    }

    /// Convert a batch of sRGB colors with the same per-element result as
    /// [`apply_color`](Self::apply_color).
    pub fn apply_colors(&self, colors: &[Color]) -> Vec<Color> {
        let mut xformed = vec![Color::TRANSPARENT; colors.len()];
        self.apply_colors_into(&mut xformed, colors);
        xformed
    }

    /// # Panics
    /// If `dst` and `src` differ in length.
    pub fn apply_colors_into(&self, dst: &mut [Color], src: &[Color]) {
        self.from_srgb.apply_colors(dst, src);
    }
}
