//! Drawing style record.

use std::sync::Arc;

use tincture_core::Color;

use crate::blend::BlendMode;
use crate::color_filter::ColorFilter;
use crate::image_filter::ImageFilter;
use crate::looper::DrawLooper;
use crate::shader::Shader;

/// Geometry coverage mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
    StrokeAndFill,
}

/// Everything that determines how geometry is drawn, apart from the geometry.
///
/// A value type: cloning shares the effect nodes, which are immutable.
#[derive(Debug, Clone)]
pub struct Paint {
    /// Flat color, used when there is no shader. Alpha also modulates shaders.
    pub color: Color,
    pub style: PaintStyle,
    /// Stroke width; 0.0 draws hairlines.
    pub stroke_width: f32,
    pub anti_alias: bool,
    pub blend_mode: BlendMode,
    pub shader: Option<Arc<Shader>>,
    pub color_filter: Option<Arc<ColorFilter>>,
    pub image_filter: Option<Arc<ImageFilter>>,
    pub looper: Option<Arc<dyn DrawLooper>>,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
            anti_alias: false,
            blend_mode: BlendMode::SrcOver,
            shader: None,
            color_filter: None,
            image_filter: None,
            looper: None,
        }
    }
}

impl Paint {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn with_shader(mut self, shader: Arc<Shader>) -> Self {
        self.shader = Some(shader);
        self
    }

    pub fn with_color_filter(mut self, filter: Arc<ColorFilter>) -> Self {
        self.color_filter = Some(filter);
        self
    }

    pub fn with_image_filter(mut self, filter: Arc<ImageFilter>) -> Self {
        self.image_filter = Some(filter);
        self
    }

    pub fn with_looper(mut self, looper: Arc<dyn DrawLooper>) -> Self {
        self.looper = Some(looper);
        self
    }
}
