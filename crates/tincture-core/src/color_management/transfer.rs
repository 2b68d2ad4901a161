//! Transfer function (OETF/EOTF) implementations.
//!
//! Transfer functions convert between non-linear (encoded) and linear light
//! values. Every curve here maps 0.0 to 0.0, which is what lets converters
//! leave black untouched.

use serde::{Deserialize, Serialize};

use crate::error::XformError;

/// A transfer function that converts between linear and non-linear encodings.
pub trait TransferFunction: Send + Sync {
    /// Convert from non-linear (encoded) to linear light.
    fn to_linear(&self, encoded: f32) -> f32;

    /// Convert from linear light to non-linear (encoded).
    fn to_encoded(&self, linear: f32) -> f32;
}

/// The transfer curve half of a [`ColorSpace`](super::color_space::ColorSpace).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TransferFn {
    /// No encoding; values are linear light.
    Linear,
    /// IEC 61966-2-1 piecewise curve.
    Srgb,
    /// ITU-R BT.709 / BT.2020 camera curve.
    Rec709,
    /// Pure power curve, `linear = encoded ^ gamma`.
    Gamma(f32),
}

impl TransferFn {
    /// Adobe RGB (1998) exponent, 563/256.
    pub const ADOBE_RGB_GAMMA: f32 = 2.199_218_8;

    /// Reject curves that cannot be inverted.
    pub fn validate(&self) -> Result<(), XformError> {
        match *self {
            Self::Gamma(g) if !g.is_finite() || g <= 0.0 => {
                Err(XformError::InvalidTransfer(format!("gamma {g} is not a positive finite exponent")))
            }
            _ => Ok(()),
        }
    }
}

impl TransferFunction for TransferFn {
    fn to_linear(&self, encoded: f32) -> f32 {
        match *self {
            Self::Linear => encoded,
            Self::Srgb => SrgbTransfer.to_linear(encoded),
            Self::Rec709 => Rec709Transfer.to_linear(encoded),
            Self::Gamma(g) => GammaTransfer(g).to_linear(encoded),
        }
    }

    fn to_encoded(&self, linear: f32) -> f32 {
        match *self {
            Self::Linear => linear,
            Self::Srgb => SrgbTransfer.to_encoded(linear),
            Self::Rec709 => Rec709Transfer.to_encoded(linear),
            Self::Gamma(g) => GammaTransfer(g).to_encoded(linear),
        }
    }
}

// ---------------------------------------------------------------------------
// sRGB (IEC 61966-2-1)
// ---------------------------------------------------------------------------

/// sRGB transfer function per IEC 61966-2-1.
///
/// ```text
/// to_linear:   V <= 0.04045 → V / 12.92
///              V >  0.04045 → ((V + 0.055) / 1.055) ^ 2.4
///
/// from_linear: L <= 0.0031308 → L × 12.92
///              L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SrgbTransfer;

impl TransferFunction for SrgbTransfer {
    fn to_linear(&self, encoded: f32) -> f32 {
        if encoded <= 0.04045 {
            encoded / 12.92
        } else {
            ((encoded + 0.055) / 1.055).powf(2.4)
        }
    }

    fn to_encoded(&self, linear: f32) -> f32 {
        if linear <= 0.0031308 {
            linear * 12.92
        } else {
            1.055 * linear.powf(1.0 / 2.4) - 0.055
        }
    }
}

// ---------------------------------------------------------------------------
// Rec. 709
// ---------------------------------------------------------------------------

/// BT.709 transfer function, also used by BT.2020 at 10-bit precision.
///
/// ```text
/// to_linear:   V <  0.081 → V / 4.5
///              V >= 0.081 → ((V + 0.099) / 1.099) ^ (1 / 0.45)
///
/// from_linear: L <  0.018 → 4.5 × L
///              L >= 0.018 → 1.099 × L^0.45 − 0.099
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Rec709Transfer;

impl Rec709Transfer {
    const ALPHA: f32 = 1.099;
    const BETA: f32 = 0.018;
    const BETA_ENCODED: f32 = 0.081;
}

impl TransferFunction for Rec709Transfer {
    fn to_linear(&self, encoded: f32) -> f32 {
        if encoded < Self::BETA_ENCODED {
            encoded / 4.5
        } else {
            ((encoded + (Self::ALPHA - 1.0)) / Self::ALPHA).powf(1.0 / 0.45)
        }
    }

    fn to_encoded(&self, linear: f32) -> f32 {
        if linear < Self::BETA {
            4.5 * linear
        } else {
            Self::ALPHA * linear.powf(0.45) - (Self::ALPHA - 1.0)
        }
    }
}

// ---------------------------------------------------------------------------
// Pure gamma
// ---------------------------------------------------------------------------

/// Power-law transfer function. Negative inputs clamp to zero.
#[derive(Debug, Clone, Copy)]
pub struct GammaTransfer(pub f32);

impl TransferFunction for GammaTransfer {
    fn to_linear(&self, encoded: f32) -> f32 {
        encoded.max(0.0).powf(self.0)
    }

    fn to_encoded(&self, linear: f32) -> f32 {
        linear.max(0.0).powf(1.0 / self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn assert_roundtrip(tf: &dyn TransferFunction, name: &str) {
        for i in 0..=20 {
            let v = i as f32 / 20.0;
            let back = tf.to_encoded(tf.to_linear(v));
            assert!(
                (back - v).abs() < EPSILON,
                "{name}: {v} round-tripped to {back}"
            );
        }
    }

    #[test]
    fn test_all_curves_roundtrip() {
        assert_roundtrip(&TransferFn::Linear, "linear");
        assert_roundtrip(&TransferFn::Srgb, "srgb");
        assert_roundtrip(&TransferFn::Rec709, "rec709");
        assert_roundtrip(&TransferFn::Gamma(2.2), "gamma 2.2");
        assert_roundtrip(&TransferFn::Gamma(TransferFn::ADOBE_RGB_GAMMA), "adobe");
    }

    #[test]
    fn test_all_curves_preserve_black_and_white() {
        for tf in [
            TransferFn::Linear,
            TransferFn::Srgb,
            TransferFn::Rec709,
            TransferFn::Gamma(1.8),
        ] {
            assert_eq!(tf.to_linear(0.0), 0.0);
            assert_eq!(tf.to_encoded(0.0), 0.0);
            assert!((tf.to_linear(1.0) - 1.0).abs() < EPSILON);
            assert!((tf.to_encoded(1.0) - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_srgb_matches_palette() {
        use palette::{LinSrgb, Srgb};

        for i in 0..=10 {
            let v = i as f32 / 10.0;
            let reference: LinSrgb<f32> = Srgb::new(v, v, v).into_linear();
            let ours = SrgbTransfer.to_linear(v);
            assert!(
                (reference.red - ours).abs() < EPSILON,
                "sRGB decode of {v}: palette {} vs {ours}",
                reference.red
            );
        }
    }

    #[test]
    fn test_gamma_validation() {
        assert!(TransferFn::Gamma(2.2).validate().is_ok());
        assert!(TransferFn::Gamma(0.0).validate().is_err());
        assert!(TransferFn::Gamma(-1.0).validate().is_err());
        assert!(TransferFn::Gamma(f32::NAN).validate().is_err());
        assert!(TransferFn::Srgb.validate().is_ok());
    }
}
