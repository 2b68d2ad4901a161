//! Bradford chromatic adaptation between white points.
//!
//! # Reference
//! - Lindbloom, Bruce J. — Bradford chromatic adaptation

use glam::{DMat3, DVec3};

/// CIE xy of the D65 standard illuminant.
pub const D65: [f32; 2] = [0.3127, 0.3290];

/// Bradford cone response matrix, row-major.
const M: [[f64; 3]; 3] = [
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
];

/// Inverse Bradford cone response matrix, row-major.
const M_INV: [[f64; 3]; 3] = [
    [0.9869929055, -0.1470542564, 0.1599626517],
    [0.4323052697, 0.5183602715, 0.0492912282],
    [-0.0085286646, 0.0400428217, 0.9684866958],
];

fn row_major(rows: [[f64; 3]; 3]) -> DMat3 {
    // glam matrices are column-major.
    DMat3::from_cols_array_2d(&rows).transpose()
}

/// Convert a chromaticity to XYZ with `Y = 1`.
///
/// Callers must have rejected `y == 0` already.
pub fn xy_to_xyz(xy: [f32; 2]) -> DVec3 {
    let x = xy[0] as f64;
    let y = xy[1] as f64;
    DVec3::new(x / y, 1.0, (1.0 - x - y) / y)
}

/// Compute `M_INV * diag(dst_cone / src_cone) * M`.
pub fn bradford(src_white: DVec3, dst_white: DVec3) -> DMat3 {
    let m = row_major(M);
    let src_cone = m * src_white;
    let dst_cone = m * dst_white;
    let scale = DMat3::from_diagonal(dst_cone / src_cone);
    row_major(M_INV) * scale * m
}

/// Adaptation matrix taking XYZ relative to `white` into XYZ relative to D65.
pub fn adapt_to_d65(white: DVec3) -> DMat3 {
    bradford(white, xy_to_xyz(D65))
}
