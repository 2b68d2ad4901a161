//! Retargets colors, images, shaders and paints from sRGB to a destination
//! color space.
//!
//! Every `apply_*` method returns new objects and leaves its input alone.
//! Two outputs deliberately share their input: shaders that could not be
//! recognized come back as the same `Arc`, and black paint colors are kept
//! bit-for-bit.
//!
//! # Concurrency
//! A xformer holds only immutable state and is `Send + Sync`. Concurrent
//! `apply_*` calls on one instance are sound because the underlying
//! [`ColorSpaceXform`] is reentrant; any replacement transform must be too.

mod color;
mod image;
mod paint;
mod shader;

use std::sync::Arc;

use tincture_core::{ColorSpace, ColorSpaceXform};

use crate::config::XformerConfig;

/// Converter bound to one destination color space for its whole lifetime.
#[derive(Debug, Clone)]
pub struct ColorSpaceXformer {
    dst: Arc<ColorSpace>,
    from_srgb: ColorSpaceXform,
}

impl ColorSpaceXformer {
    /// Build a xformer converting from sRGB into `dst`.
    ///
    /// Returns `None` when no numeric transform into `dst` exists; callers
    /// should treat that as "conversion unavailable" and skip retargeting.
    pub fn make(dst: Arc<ColorSpace>) -> Option<Self> {
        match ColorSpaceXform::new(&ColorSpace::srgb(), &dst) {
            Ok(from_srgb) => {
                tracing::debug!("color space xformer created for {:?}", dst);
                Some(Self { dst, from_srgb })
            }
            Err(e) => {
                tracing::warn!("cannot convert into {:?}: {e}", dst);
                None
            }
        }
    }

    /// Build a xformer for the destination named in `config`.
    ///
    /// Same failure rule as [`ColorSpaceXformer::make`]: `None` when the
    /// configured space has no numeric transform.
    pub fn from_config(config: &XformerConfig) -> Option<Self> {
        tracing::debug!("destination from config: {}", config.destination.label());
        Self::make(config.destination.color_space())
    }

    /// The destination space every output is tagged with.
    pub fn dst(&self) -> &Arc<ColorSpace> {
        &self.dst
    }
}
