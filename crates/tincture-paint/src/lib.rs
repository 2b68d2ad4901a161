//! Tincture Paint — drawing-effect model and color-space retargeting.
//!
//! Shaders, color filters, image filters, draw loopers and paints, plus the
//! [`ColorSpaceXformer`] that rebuilds them for a destination color space.

pub mod blend;
pub mod color_filter;
pub mod config;
pub mod image_filter;
pub mod looper;
pub mod paint;
pub mod shader;
pub mod xformer;

// Re-exports for convenience.
pub use blend::BlendMode;
pub use color_filter::{ColorFilter, CustomColorFilter};
pub use config::{ConfigError, XformerConfig};
pub use image_filter::ImageFilter;
pub use looper::{DrawLooper, Layer, LayerDrawLooper, ShadowLooper};
pub use paint::{Paint, PaintStyle};
pub use shader::gradient::{GradientFlags, GradientGeometry, GradientInfo, GradientKind};
pub use shader::{ComposeRec, CustomShader, ImageRec, Shader, TileMode};
pub use xformer::ColorSpaceXformer;
