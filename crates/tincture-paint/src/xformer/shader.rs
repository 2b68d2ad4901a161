//! Recursive shader retargeting.
//!
//! Dispatch order, first match wins:
//! 1. constant color → color shader with the converted color
//! 2. image-backed → image shader over the retargeted image
//! 3. composite → composite of the two retargeted children
//! 4. gradient → same geometry with all stops converted in one batch
//! 5. anything else → the input `Arc`, unchanged

use std::sync::Arc;

use glam::Affine2;

use crate::shader::gradient::{GradientGeometry, GradientInfo, GradientKind};
use crate::shader::Shader;

use super::ColorSpaceXformer;

impl ColorSpaceXformer {
    /// Rebuild `shader` for the destination space.
    ///
    /// Returns `None` only when an embedded image cannot be retargeted;
    /// composites fail as a whole when either child fails. Gradients always
    /// rebuild, a one-stop gradient as a flat color. Unrecognized shaders are
    /// returned as-is (same `Arc`), which is not a failure.
    ///
    /// # Panics
    /// If a shader answers the gradient query with [`GradientKind::None`] or
    /// [`GradientKind::Color`] after declining the constant-color query, or
    /// reports no stops, or a different number of colors and offsets.
    pub fn apply_shader(&self, shader: &Arc<Shader>) -> Option<Arc<Shader>> {
        let local_matrix = shader.local_matrix();

        if let Some(color) = shader.as_constant_color() {
            return Some(Shader::color(self.apply_color(color), local_matrix));
        }

        if let Some(rec) = shader.as_image() {
            let image = self.apply_image(&rec.image)?;
            return Some(Shader::image(image, rec.tile_x, rec.tile_y, rec.local_matrix));
        }

        if let Some(rec) = shader.as_compose() {
            let (Some(a), Some(b)) = (self.apply_shader(&rec.a), self.apply_shader(&rec.b)) else {
                tracing::warn!("compose shader not retargeted: a child failed");
                return None;
            };
            return Some(Shader::compose(a, b, rec.mode, local_matrix));
        }

        if let Some(info) = shader.as_gradient() {
            return Some(self.apply_gradient(info, local_matrix));
        }

        tracing::trace!("{} shader passed through unconverted", shader.kind_name());
        Some(Arc::clone(shader))
    }

    fn apply_gradient(&self, info: GradientInfo, local_matrix: Affine2) -> Arc<Shader> {
        let geometry = match info.kind {
            GradientKind::None | GradientKind::Color => {
                unreachable!("{:?} gradient reached the gradient branch", info.kind)
            }
            GradientKind::Linear { start, end } => GradientGeometry::Linear { start, end },
            GradientKind::Radial { center, radius } => GradientGeometry::Radial { center, radius },
            GradientKind::Sweep { center } => GradientGeometry::Sweep { center },
            GradientKind::Conical {
                start,
                start_radius,
                end,
                end_radius,
            } => GradientGeometry::TwoPointConical {
                start,
                start_radius,
                end,
                end_radius,
            },
        };

        if info.colors.len() == 1 {
            tracing::debug!("one-stop gradient rebuilt as a color shader");
        }
        Shader::rebuild_gradient(
            geometry,
            self.apply_colors(&info.colors),
            info.offsets,
            info.tile_mode,
            info.flags,
            local_matrix,
        )
    }
}
