//! Draw loopers: issue one draw several times with per-pass variations.

use std::fmt;
use std::sync::Arc;

use glam::Vec2;
use tincture_core::Color;

use crate::paint::Paint;
use crate::xformer::ColorSpaceXformer;

/// A looper owns paints or colors of its own, so it retargets itself.
pub trait DrawLooper: fmt::Debug + Send + Sync {
    /// Return an equivalent looper whose colors are in `xformer`'s
    /// destination space. Nested paints go back through the same xformer.
    fn make_color_space(&self, xformer: &ColorSpaceXformer) -> Arc<dyn DrawLooper>;
}

/// One pass of a [`LayerDrawLooper`].
#[derive(Debug, Clone)]
pub struct Layer {
    /// Translation applied to the geometry for this pass.
    pub offset: Vec2,
    /// Paint used for this pass in place of the caller's paint.
    pub paint: Paint,
}

/// Draws once per layer, bottom layer first.
#[derive(Debug, Clone, Default)]
pub struct LayerDrawLooper {
    layers: Vec<Layer>,
}

impl LayerDrawLooper {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Concrete form of [`DrawLooper::make_color_space`].
    pub fn converted(&self, xformer: &ColorSpaceXformer) -> Self {
        let layers = self
            .layers
            .iter()
            .map(|layer| Layer {
                offset: layer.offset,
                paint: xformer.apply_paint(&layer.paint),
            })
            .collect();
        Self { layers }
    }
}

impl DrawLooper for LayerDrawLooper {
    fn make_color_space(&self, xformer: &ColorSpaceXformer) -> Arc<dyn DrawLooper> {
        Arc::new(self.converted(xformer))
    }
}

/// Draws a blurred, offset copy in `color` beneath the original.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowLooper {
    pub offset: Vec2,
    pub sigma: f32,
    pub color: Color,
}

impl ShadowLooper {
    pub fn converted(&self, xformer: &ColorSpaceXformer) -> Self {
        Self {
            color: xformer.apply_color(self.color),
            ..*self
        }
    }
}

impl DrawLooper for ShadowLooper {
    fn make_color_space(&self, xformer: &ColorSpaceXformer) -> Arc<dyn DrawLooper> {
        Arc::new(self.converted(xformer))
    }
}
