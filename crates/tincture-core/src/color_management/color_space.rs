//! Color space descriptions: primaries plus a transfer curve.

use std::sync::Arc;

use glam::DMat3;
use serde::{Deserialize, Serialize};

use super::chromatic::{self, D65};
use super::transfer::TransferFn;
use crate::error::XformError;

/// CIE xy chromaticities of the three primaries and the white point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Primaries {
    pub red: [f32; 2],
    pub green: [f32; 2],
    pub blue: [f32; 2],
    pub white: [f32; 2],
}

impl Primaries {
    /// ITU-R BT.709 / sRGB.
    pub const SRGB: Self = Self {
        red: [0.64, 0.33],
        green: [0.30, 0.60],
        blue: [0.15, 0.06],
        white: D65,
    };

    /// Display P3 (DCI-P3 primaries, D65 white).
    pub const DISPLAY_P3: Self = Self {
        red: [0.680, 0.320],
        green: [0.265, 0.690],
        blue: [0.150, 0.060],
        white: D65,
    };

    /// ITU-R BT.2020.
    pub const REC2020: Self = Self {
        red: [0.708, 0.292],
        green: [0.170, 0.797],
        blue: [0.131, 0.046],
        white: D65,
    };

    /// Adobe RGB (1998).
    pub const ADOBE_RGB: Self = Self {
        red: [0.64, 0.33],
        green: [0.21, 0.71],
        blue: [0.15, 0.06],
        white: D65,
    };

    /// ACES AP1 (ACEScg), ACES white (~D60).
    pub const ACES_AP1: Self = Self {
        red: [0.713, 0.293],
        green: [0.165, 0.830],
        blue: [0.128, 0.044],
        white: [0.32168, 0.33767],
    };

    /// ACES AP0 (ACES2065-1), ACES white (~D60).
    pub const ACES_AP0: Self = Self {
        red: [0.7347, 0.2653],
        green: [0.0, 1.0],
        blue: [0.0001, -0.0770],
        white: [0.32168, 0.33767],
    };

    /// Derive the RGB → XYZ matrix, adapted to a D65 white.
    ///
    /// ```text
    /// P = [xyz(r) xyz(g) xyz(b)]      (columns, Y = 1)
    /// S = P⁻¹ · xyz(w)
    /// M = bradford(w → D65) · P · diag(S)
    /// ```
    ///
    /// Fails when a chromaticity is non-finite or has `y == 0`, or when the
    /// primaries do not span a color volume.
    pub fn to_xyz_d65(&self) -> Result<DMat3, XformError> {
        let xyz = |xy: [f32; 2], what: &'static str| {
            if !xy[0].is_finite() || !xy[1].is_finite() || xy[1] == 0.0 {
                return Err(XformError::DegeneratePrimaries(what));
            }
            Ok(chromatic::xy_to_xyz(xy))
        };

        let p = DMat3::from_cols(
            xyz(self.red, "red chromaticity")?,
            xyz(self.green, "green chromaticity")?,
            xyz(self.blue, "blue chromaticity")?,
        );
        let white = xyz(self.white, "white chromaticity")?;

        if !is_invertible(&p) {
            return Err(XformError::DegeneratePrimaries("primaries are collinear"));
        }
        let scale = p.inverse() * white;
        let m = chromatic::adapt_to_d65(white) * p * DMat3::from_diagonal(scale);

        if !is_invertible(&m) {
            return Err(XformError::DegeneratePrimaries("white point lies on the gamut boundary"));
        }
        Ok(m)
    }
}

fn is_invertible(m: &DMat3) -> bool {
    let det = m.determinant();
    det.is_finite() && det.abs() > 1e-10
}

/// An immutable color space. Shared by reference as `Arc<ColorSpace>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSpace {
    pub primaries: Primaries,
    pub transfer: TransferFn,
}

impl ColorSpace {
    pub fn new(primaries: Primaries, transfer: TransferFn) -> Arc<Self> {
        Arc::new(Self { primaries, transfer })
    }

    /// The reference space: untagged colors and images are read as sRGB.
    pub fn srgb() -> Arc<Self> {
        Self::new(Primaries::SRGB, TransferFn::Srgb)
    }

    pub fn srgb_linear() -> Arc<Self> {
        Self::new(Primaries::SRGB, TransferFn::Linear)
    }

    pub fn display_p3() -> Arc<Self> {
        Self::new(Primaries::DISPLAY_P3, TransferFn::Srgb)
    }

    pub fn rec2020() -> Arc<Self> {
        Self::new(Primaries::REC2020, TransferFn::Rec709)
    }

    pub fn adobe_rgb() -> Arc<Self> {
        Self::new(Primaries::ADOBE_RGB, TransferFn::Gamma(TransferFn::ADOBE_RGB_GAMMA))
    }

    pub fn is_srgb(&self) -> bool {
        self.primaries == Primaries::SRGB && self.transfer == TransferFn::Srgb
    }
}

/// Identifies a color space in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColorSpaceId {
    /// sRGB (Rec. 709 primaries, sRGB transfer).
    Srgb,
    /// Linear sRGB (Rec. 709 primaries, linear).
    LinearSrgb,
    /// Display P3 (P3 primaries, sRGB transfer).
    DisplayP3,
    /// ITU-R BT.2020 (wide gamut, BT.709 curve).
    Rec2020,
    /// Adobe RGB (1998).
    AdobeRgb,
    /// ACEScg (AP1 primaries, linear).
    AcesCg,
    /// ACES 2065-1 (AP0 primaries, linear).
    Aces2065_1,
    /// Explicit primaries and curve.
    Custom {
        primaries: Primaries,
        transfer: TransferFn,
    },
}

impl ColorSpaceId {
    /// Human-readable label for logs and status text.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Srgb => "sRGB",
            Self::LinearSrgb => "Linear sRGB",
            Self::DisplayP3 => "Display P3",
            Self::Rec2020 => "Rec.2020",
            Self::AdobeRgb => "Adobe RGB",
            Self::AcesCg => "ACEScg",
            Self::Aces2065_1 => "ACES2065-1",
            Self::Custom { .. } => "Custom",
        }
    }

    /// Built-in named color spaces.
    pub fn all() -> &'static [Self] {
        const ALL: [ColorSpaceId; 7] = [
            ColorSpaceId::Srgb,
            ColorSpaceId::LinearSrgb,
            ColorSpaceId::DisplayP3,
            ColorSpaceId::Rec2020,
            ColorSpaceId::AdobeRgb,
            ColorSpaceId::AcesCg,
            ColorSpaceId::Aces2065_1,
        ];
        &ALL
    }

    /// Look up a built-in space by label, ignoring case, spaces, dots and dashes.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalize = |s: &str| {
            s.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .map(|c| c.to_ascii_lowercase())
                .collect::<String>()
        };
        let wanted = normalize(name);
        Self::all()
            .iter()
            .find(|id| normalize(id.label()) == wanted)
            .copied()
    }

    pub fn color_space(&self) -> Arc<ColorSpace> {
        match *self {
            Self::Srgb => ColorSpace::srgb(),
            Self::LinearSrgb => ColorSpace::srgb_linear(),
            Self::DisplayP3 => ColorSpace::display_p3(),
            Self::Rec2020 => ColorSpace::rec2020(),
            Self::AdobeRgb => ColorSpace::adobe_rgb(),
            Self::AcesCg => ColorSpace::new(Primaries::ACES_AP1, TransferFn::Linear),
            Self::Aces2065_1 => ColorSpace::new(Primaries::ACES_AP0, TransferFn::Linear),
            Self::Custom { primaries, transfer } => ColorSpace::new(primaries, transfer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_matrix_matches_published_values() {
        // IEC 61966-2-1 RGB → XYZ (D65), first row.
        let m = Primaries::SRGB.to_xyz_d65().unwrap();
        let row0 = m.row(0);
        assert!((row0.x - 0.4124).abs() < 1e-3, "{row0:?}");
        assert!((row0.y - 0.3576).abs() < 1e-3, "{row0:?}");
        assert!((row0.z - 0.1805).abs() < 1e-3, "{row0:?}");
    }

    #[test]
    fn test_all_builtin_spaces_have_matrices() {
        for id in ColorSpaceId::all() {
            let space = id.color_space();
            assert!(space.primaries.to_xyz_d65().is_ok(), "{}", id.label());
        }
    }

    #[test]
    fn test_collinear_primaries_rejected() {
        let bad = Primaries {
            red: [0.2, 0.2],
            green: [0.3, 0.3],
            blue: [0.4, 0.4],
            white: D65,
        };
        assert!(matches!(
            bad.to_xyz_d65(),
            Err(XformError::DegeneratePrimaries(_))
        ));
    }

    #[test]
    fn test_zero_y_rejected() {
        let bad = Primaries {
            blue: [0.15, 0.0],
            ..Primaries::SRGB
        };
        assert!(bad.to_xyz_d65().is_err());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ColorSpaceId::from_name("display-p3"), Some(ColorSpaceId::DisplayP3));
        assert_eq!(ColorSpaceId::from_name("REC2020"), Some(ColorSpaceId::Rec2020));
        assert_eq!(ColorSpaceId::from_name("acescg"), Some(ColorSpaceId::AcesCg));
        assert_eq!(ColorSpaceId::from_name("linear srgb"), Some(ColorSpaceId::LinearSrgb));
        assert_eq!(ColorSpaceId::from_name("cmyk"), None);
    }

    #[test]
    fn test_is_srgb() {
        assert!(ColorSpace::srgb().is_srgb());
        assert!(!ColorSpace::srgb_linear().is_srgb());
        assert!(!ColorSpace::display_p3().is_srgb());
    }
}
