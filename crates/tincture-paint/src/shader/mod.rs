//! Shaders: per-pixel color sources that paints draw with.
//!
//! The built-in variants are a closed set. [`Shader::Custom`] admits shaders
//! defined elsewhere; they describe themselves through the [`CustomShader`]
//! introspection queries, and any query they decline is answered "no".

pub mod gradient;

use std::fmt;
use std::sync::Arc;

use glam::Affine2;
use tincture_core::{Color, Image};

use crate::blend::BlendMode;
use gradient::{Gradient, GradientInfo, GradientKind};

/// How a shader samples outside its natural bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TileMode {
    /// Replicate the edge color.
    #[default]
    Clamp,
    /// Repeat the pattern.
    Repeat,
    /// Repeat the pattern, mirroring every other tile.
    Mirror,
    /// Transparent outside the bounds.
    Decal,
}

/// Answer to "are you image-backed?".
#[derive(Debug, Clone)]
pub struct ImageRec {
    pub image: Arc<Image>,
    pub tile_x: TileMode,
    pub tile_y: TileMode,
    pub local_matrix: Affine2,
}

/// Answer to "are you a composite?".
#[derive(Debug, Clone)]
pub struct ComposeRec {
    pub a: Arc<Shader>,
    pub b: Arc<Shader>,
    pub mode: BlendMode,
}

/// Introspection contract for shaders outside the built-in set.
///
/// Every query defaults to "no". A custom shader that answers no to all of
/// them is left untouched by color-space conversion.
pub trait CustomShader: fmt::Debug + Send + Sync {
    fn local_matrix(&self) -> Affine2 {
        Affine2::IDENTITY
    }

    /// A single color equivalent, if the shader is constant.
    fn as_constant_color(&self) -> Option<Color> {
        None
    }

    fn as_image(&self) -> Option<ImageRec> {
        None
    }

    fn as_compose(&self) -> Option<ComposeRec> {
        None
    }

    fn as_gradient(&self) -> Option<GradientInfo> {
        None
    }
}

/// An immutable shading tree node. Shared by reference as `Arc<Shader>`.
#[derive(Debug, Clone)]
pub enum Shader {
    /// Flat color.
    Color { color: Color, local_matrix: Affine2 },
    /// Samples an image.
    Image {
        image: Arc<Image>,
        tile_x: TileMode,
        tile_y: TileMode,
        local_matrix: Affine2,
    },
    /// Blends shader `a` (source) over shader `b` (destination).
    Compose {
        a: Arc<Shader>,
        b: Arc<Shader>,
        mode: BlendMode,
        local_matrix: Affine2,
    },
    Gradient(Gradient),
    Custom(Arc<dyn CustomShader>),
}

impl Shader {
    pub fn color(color: Color, local_matrix: Affine2) -> Arc<Self> {
        Arc::new(Self::Color { color, local_matrix })
    }

    pub fn image(
        image: Arc<Image>,
        tile_x: TileMode,
        tile_y: TileMode,
        local_matrix: Affine2,
    ) -> Arc<Self> {
        Arc::new(Self::Image {
            image,
            tile_x,
            tile_y,
            local_matrix,
        })
    }

    pub fn compose(a: Arc<Shader>, b: Arc<Shader>, mode: BlendMode, local_matrix: Affine2) -> Arc<Self> {
        Arc::new(Self::Compose {
            a,
            b,
            mode,
            local_matrix,
        })
    }

    pub fn custom(shader: Arc<dyn CustomShader>) -> Arc<Self> {
        Arc::new(Self::Custom(shader))
    }

    /// Short variant name for logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Color { .. } => "color",
            Self::Image { .. } => "image",
            Self::Compose { .. } => "compose",
            Self::Gradient(_) => "gradient",
            Self::Custom(_) => "custom",
        }
    }

    pub fn local_matrix(&self) -> Affine2 {
        match self {
            Self::Color { local_matrix, .. }
            | Self::Image { local_matrix, .. }
            | Self::Compose { local_matrix, .. } => *local_matrix,
            Self::Gradient(gradient) => gradient.local_matrix(),
            Self::Custom(custom) => custom.local_matrix(),
        }
    }

    pub fn as_constant_color(&self) -> Option<Color> {
        match self {
            Self::Color { color, .. } => Some(*color),
            Self::Custom(custom) => custom.as_constant_color(),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<ImageRec> {
        match self {
            Self::Image {
                image,
                tile_x,
                tile_y,
                local_matrix,
            } => Some(ImageRec {
                image: Arc::clone(image),
                tile_x: *tile_x,
                tile_y: *tile_y,
                local_matrix: *local_matrix,
            }),
            Self::Custom(custom) => custom.as_image(),
            _ => None,
        }
    }

    pub fn as_compose(&self) -> Option<ComposeRec> {
        match self {
            Self::Compose { a, b, mode, .. } => Some(ComposeRec {
                a: Arc::clone(a),
                b: Arc::clone(b),
                mode: *mode,
            }),
            Self::Custom(custom) => custom.as_compose(),
            _ => None,
        }
    }

    /// Gradient description, with stops in their original order.
    ///
    /// Flat colors report themselves as the one-stop [`GradientKind::Color`].
    pub fn as_gradient(&self) -> Option<GradientInfo> {
        match self {
            Self::Color { color, .. } => Some(GradientInfo {
                kind: GradientKind::Color,
                colors: vec![*color],
                offsets: vec![0.0],
                ..GradientInfo::default()
            }),
            Self::Gradient(gradient) => Some(gradient.info()),
            Self::Custom(custom) => custom.as_gradient(),
            _ => None,
        }
    }
}
