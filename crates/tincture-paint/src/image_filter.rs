//! Image filters: whole-layer effects applied to a paint's output.
//!
//! Color-space conversion leaves these untouched, including the shadow color
//! of [`ImageFilter::DropShadow`].

use std::sync::Arc;

use glam::Vec2;
use tincture_core::Color;

/// An immutable image filter node. `input` of `None` means the source layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageFilter {
    Blur {
        sigma: Vec2,
        input: Option<Arc<ImageFilter>>,
    },
    Offset {
        offset: Vec2,
        input: Option<Arc<ImageFilter>>,
    },
    DropShadow {
        offset: Vec2,
        sigma: Vec2,
        color: Color,
        input: Option<Arc<ImageFilter>>,
    },
}
