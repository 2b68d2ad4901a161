//! Tincture Core — color science layer for color-space retargeting.
//!
//! This crate contains packed colors, color space descriptions, the numeric
//! source→destination transform, and the immutable image type. No drawing
//! or effect-tree dependencies.

pub mod color;
pub mod color_management;
pub mod error;
pub mod image;

// Re-exports for convenience.
pub use color::Color;
pub use color_management::color_space::{ColorSpace, ColorSpaceId, Primaries};
pub use color_management::transfer::TransferFn;
pub use color_management::xform::ColorSpaceXform;
pub use error::XformError;
pub use crate::image::{EncodedGenerator, Image, ImageGenerator};
