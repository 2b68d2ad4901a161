use crate::color_filter::ColorFilter;
use crate::paint::Paint;

use super::ColorSpaceXformer;

impl ColorSpaceXformer {
    /// Return a copy of `paint` with its colors in the destination space.
    ///
    /// - flat color: converted unless its RGB is zero (every space shares
    ///   the black point, so black stays bit-for-bit black)
    /// - shader: retargeted; if that fails the original shader is kept
    /// - color filter: only solid-recolor filters are rebuilt
    /// - looper: asked to retarget itself through this xformer
    /// - image filter: left as is
    pub fn apply_paint(&self, paint: &Paint) -> Paint {
        let mut dst = paint.clone();

        if !paint.color.is_black() {
            dst.color = self.apply_color(paint.color);
        }

        if let Some(shader) = &paint.shader {
            match self.apply_shader(shader) {
                Some(xformed) => dst.shader = Some(xformed),
                None => tracing::warn!(
                    "{} shader kept in its source space",
                    shader.kind_name()
                ),
            }
        }

        if let Some((color, mode)) = paint.color_filter.as_ref().and_then(|cf| cf.as_color_mode()) {
            dst.color_filter = Some(ColorFilter::mode(self.apply_color(color), mode));
        }

        if let Some(looper) = &paint.looper {
            dst.looper = Some(looper.make_color_space(self));
        }

        // Image filters are not retargeted.
        dst
    }
}
