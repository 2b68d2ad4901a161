//! Color filters: per-color transforms applied after shading.

use std::fmt;
use std::sync::Arc;

use tincture_core::Color;

use crate::blend::BlendMode;

/// Introspection contract for color filters outside the built-in set.
pub trait CustomColorFilter: fmt::Debug + Send + Sync {
    /// The color and blend rule, if this filter is a solid recolor.
    fn as_color_mode(&self) -> Option<(Color, BlendMode)> {
        None
    }
}

/// An immutable color filter. Shared by reference as `Arc<ColorFilter>`.
#[derive(Debug, Clone)]
pub enum ColorFilter {
    /// Blend a fixed color over every drawn color.
    Mode { color: Color, mode: BlendMode },
    /// Row-major 4x5 matrix over unpremultiplied RGBA in `[0, 1]`, with the
    /// fifth column as a bias.
    Matrix([f32; 20]),
    /// Apply `inner`, then `outer`.
    Compose {
        outer: Arc<ColorFilter>,
        inner: Arc<ColorFilter>,
    },
    Custom(Arc<dyn CustomColorFilter>),
}

impl ColorFilter {
    pub fn mode(color: Color, mode: BlendMode) -> Arc<Self> {
        Arc::new(Self::Mode { color, mode })
    }

    pub fn matrix(rows: [f32; 20]) -> Arc<Self> {
        Arc::new(Self::Matrix(rows))
    }

    pub fn compose(outer: Arc<ColorFilter>, inner: Arc<ColorFilter>) -> Arc<Self> {
        Arc::new(Self::Compose { outer, inner })
    }

    pub fn custom(filter: Arc<dyn CustomColorFilter>) -> Arc<Self> {
        Arc::new(Self::Custom(filter))
    }

    /// Answer to "are you a solid recolor?".
    pub fn as_color_mode(&self) -> Option<(Color, BlendMode)> {
        match self {
            Self::Mode { color, mode } => Some((*color, *mode)),
            Self::Custom(custom) => custom.as_color_mode(),
            Self::Matrix(_) | Self::Compose { .. } => None,
        }
    }
}
