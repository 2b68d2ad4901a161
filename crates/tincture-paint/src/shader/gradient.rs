//! Gradient shaders: an ordered color ramp laid over one of four geometries.
//!
//! Stops keep the order and offsets the caller gave them. Offsets are not
//! sorted, clamped, or deduplicated here; hard stops (two stops at the same
//! offset) are meaningful.

use std::sync::Arc;

use bitflags::bitflags;
use glam::{Affine2, Vec2};
use tincture_core::Color;

use super::{Shader, TileMode};

bitflags! {
    /// Rendering flags carried through conversion untouched.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct GradientFlags: u32 {
        /// Interpolate between stops in premultiplied space.
        const INTERPOLATE_COLORS_IN_PREMUL = 1 << 0;
    }
}

/// Gradient geometry, in the shader's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientGeometry {
    Linear { start: Vec2, end: Vec2 },
    Radial { center: Vec2, radius: f32 },
    Sweep { center: Vec2 },
    TwoPointConical {
        start: Vec2,
        start_radius: f32,
        end: Vec2,
        end_radius: f32,
    },
}

impl GradientGeometry {
    fn is_valid(&self) -> bool {
        match *self {
            Self::Linear { start, end } => start.is_finite() && end.is_finite(),
            Self::Radial { center, radius } => center.is_finite() && radius.is_finite() && radius >= 0.0,
            Self::Sweep { center } => center.is_finite(),
            Self::TwoPointConical {
                start,
                start_radius,
                end,
                end_radius,
            } => {
                start.is_finite()
                    && end.is_finite()
                    && start_radius.is_finite()
                    && end_radius.is_finite()
                    && start_radius >= 0.0
                    && end_radius >= 0.0
            }
        }
    }
}

/// What kind of gradient a shader reports itself as.
///
/// `None` and `Color` describe shaders that are not true gradients: `Color`
/// is a flat color answering the gradient query with a single stop.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum GradientKind {
    #[default]
    None,
    Color,
    Linear { start: Vec2, end: Vec2 },
    Radial { center: Vec2, radius: f32 },
    Sweep { center: Vec2 },
    Conical {
        start: Vec2,
        start_radius: f32,
        end: Vec2,
        end_radius: f32,
    },
}

impl From<GradientGeometry> for GradientKind {
    fn from(geometry: GradientGeometry) -> Self {
        match geometry {
            GradientGeometry::Linear { start, end } => Self::Linear { start, end },
            GradientGeometry::Radial { center, radius } => Self::Radial { center, radius },
            GradientGeometry::Sweep { center } => Self::Sweep { center },
            GradientGeometry::TwoPointConical {
                start,
                start_radius,
                end,
                end_radius,
            } => Self::Conical {
                start,
                start_radius,
                end,
                end_radius,
            },
        }
    }
}

/// Answer to "are you a gradient?".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradientInfo {
    pub kind: GradientKind,
    pub colors: Vec<Color>,
    pub offsets: Vec<f32>,
    pub tile_mode: TileMode,
    pub flags: GradientFlags,
}

/// Payload of [`Shader::Gradient`].
///
/// Only the builders on [`Shader`] create one, so it always holds at least
/// two stops with one offset per color.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    geometry: GradientGeometry,
    colors: Vec<Color>,
    offsets: Vec<f32>,
    tile_mode: TileMode,
    flags: GradientFlags,
    local_matrix: Affine2,
}

impl Gradient {
    pub fn geometry(&self) -> GradientGeometry {
        self.geometry
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }

    pub fn tile_mode(&self) -> TileMode {
        self.tile_mode
    }

    pub fn flags(&self) -> GradientFlags {
        self.flags
    }

    pub fn local_matrix(&self) -> Affine2 {
        self.local_matrix
    }

    pub fn info(&self) -> GradientInfo {
        GradientInfo {
            kind: self.geometry.into(),
            colors: self.colors.clone(),
            offsets: self.offsets.clone(),
            tile_mode: self.tile_mode,
            flags: self.flags,
        }
    }
}

impl Shader {
    /// Build a gradient shader.
    ///
    /// `offsets` of `None` spaces the stops evenly over `[0, 1]`. Returns
    /// `None` for fewer than two stops, mismatched offset count, non-finite
    /// offsets, or invalid geometry.
    pub fn gradient(
        geometry: GradientGeometry,
        colors: &[Color],
        offsets: Option<&[f32]>,
        tile_mode: TileMode,
        flags: GradientFlags,
        local_matrix: Affine2,
    ) -> Option<Arc<Self>> {
        if colors.len() < 2 || !geometry.is_valid() {
            return None;
        }
        let offsets = match offsets {
            Some(offsets) if offsets.len() != colors.len() => return None,
            Some(offsets) if !offsets.iter().all(|t| t.is_finite()) => return None,
            Some(offsets) => offsets.to_vec(),
            None => {
                let last = (colors.len() - 1) as f32;
                (0..colors.len()).map(|i| i as f32 / last).collect()
            }
        };

        Some(Arc::new(Self::Gradient(Gradient {
            geometry,
            colors: colors.to_vec(),
            offsets,
            tile_mode,
            flags,
            local_matrix,
        })))
    }

    /// Rebuild a gradient from stops another gradient already reported.
    ///
    /// Skips the builder checks: geometry and offsets are carried over as
    /// they were. A single stop collapses to a flat color shader.
    ///
    /// # Panics
    /// If `colors` is empty or its length differs from `offsets`.
    pub(crate) fn rebuild_gradient(
        geometry: GradientGeometry,
        colors: Vec<Color>,
        offsets: Vec<f32>,
        tile_mode: TileMode,
        flags: GradientFlags,
        local_matrix: Affine2,
    ) -> Arc<Self> {
        assert_eq!(
            colors.len(),
            offsets.len(),
            "gradient reported {} colors but {} offsets",
            colors.len(),
            offsets.len()
        );
        if let [color] = colors[..] {
            return Self::color(color, local_matrix);
        }
        assert!(!colors.is_empty(), "gradient reported no stops");

        Arc::new(Self::Gradient(Gradient {
            geometry,
            colors,
            offsets,
            tile_mode,
            flags,
            local_matrix,
        }))
    }

    pub fn linear_gradient(
        points: [Vec2; 2],
        colors: &[Color],
        offsets: Option<&[f32]>,
        tile_mode: TileMode,
        flags: GradientFlags,
        local_matrix: Affine2,
    ) -> Option<Arc<Self>> {
        let geometry = GradientGeometry::Linear {
            start: points[0],
            end: points[1],
        };
        Self::gradient(geometry, colors, offsets, tile_mode, flags, local_matrix)
    }

    pub fn radial_gradient(
        center: Vec2,
        radius: f32,
        colors: &[Color],
        offsets: Option<&[f32]>,
        tile_mode: TileMode,
        flags: GradientFlags,
        local_matrix: Affine2,
    ) -> Option<Arc<Self>> {
        let geometry = GradientGeometry::Radial { center, radius };
        Self::gradient(geometry, colors, offsets, tile_mode, flags, local_matrix)
    }

    pub fn sweep_gradient(
        center: Vec2,
        colors: &[Color],
        offsets: Option<&[f32]>,
        tile_mode: TileMode,
        flags: GradientFlags,
        local_matrix: Affine2,
    ) -> Option<Arc<Self>> {
        let geometry = GradientGeometry::Sweep { center };
        Self::gradient(geometry, colors, offsets, tile_mode, flags, local_matrix)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn two_point_conical_gradient(
        start: Vec2,
        start_radius: f32,
        end: Vec2,
        end_radius: f32,
        colors: &[Color],
        offsets: Option<&[f32]>,
        tile_mode: TileMode,
        flags: GradientFlags,
        local_matrix: Affine2,
    ) -> Option<Arc<Self>> {
        let geometry = GradientGeometry::TwoPointConical {
            start,
            start_radius,
            end,
            end_radius,
        };
        Self::gradient(geometry, colors, offsets, tile_mode, flags, local_matrix)
    }
}
