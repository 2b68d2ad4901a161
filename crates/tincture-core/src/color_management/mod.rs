//! Color management — color space descriptions, transfer functions, and the
//! numeric transform between two spaces.

pub mod chromatic;
pub mod color_space;
pub mod transfer;
pub mod xform;
