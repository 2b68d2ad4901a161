//! Converter configuration.

use serde::{Deserialize, Serialize};
use tincture_core::ColorSpaceId;

/// Environment variable naming the destination space, e.g. `display-p3`.
pub const DST_SPACE_ENV: &str = "TINCTURE_DST_SPACE";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown color space name: {0}")]
    UnknownColorSpace(String),
}

/// Configuration for building a [`ColorSpaceXformer`](crate::ColorSpaceXformer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XformerConfig {
    /// Color space every converted object is retargeted into.
    #[serde(default = "XformerConfig::default_destination")]
    pub destination: ColorSpaceId,
}

impl Default for XformerConfig {
    fn default() -> Self {
        Self {
            destination: Self::default_destination(),
        }
    }
}

impl XformerConfig {
    fn default_destination() -> ColorSpaceId {
        ColorSpaceId::DisplayP3
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the destination from `TINCTURE_DST_SPACE`, defaulting when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(std::env::var(DST_SPACE_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Result<Self, ConfigError> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => Ok(Self::default()),
            Some(name) => ColorSpaceId::from_name(name)
                .map(|destination| Self { destination })
                .ok_or_else(|| ConfigError::UnknownColorSpace(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tincture_core::{Primaries, TransferFn};

    #[test]
    fn test_default_is_display_p3() {
        assert_eq!(XformerConfig::default().destination, ColorSpaceId::DisplayP3);
        assert_eq!(XformerConfig::from_json("{}").unwrap(), XformerConfig::default());
    }

    #[test]
    fn test_named_destination() {
        let config = XformerConfig::from_json(r#"{ "destination": "Rec2020" }"#).unwrap();
        assert_eq!(config.destination, ColorSpaceId::Rec2020);
    }

    #[test]
    fn test_custom_destination() {
        let json = r#"{
            "destination": {
                "Custom": {
                    "primaries": {
                        "red": [0.64, 0.33],
                        "green": [0.3, 0.6],
                        "blue": [0.15, 0.06],
                        "white": [0.3127, 0.329]
                    },
                    "transfer": { "Gamma": 2.2 }
                }
            }
        }"#;
        let config = XformerConfig::from_json(json).unwrap();
        assert_eq!(
            config.destination,
            ColorSpaceId::Custom {
                primaries: Primaries::SRGB,
                transfer: TransferFn::Gamma(2.2),
            }
        );
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            XformerConfig::from_json(r#"{ "destination": "CMYK" }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_env_value() {
        assert_eq!(XformerConfig::from_env_value(None).unwrap(), XformerConfig::default());
        assert_eq!(XformerConfig::from_env_value(Some("  ")).unwrap(), XformerConfig::default());
        assert_eq!(
            XformerConfig::from_env_value(Some("adobe-rgb")).unwrap().destination,
            ColorSpaceId::AdobeRgb
        );
        assert!(matches!(
            XformerConfig::from_env_value(Some("cmyk")),
            Err(ConfigError::UnknownColorSpace(name)) if name == "cmyk"
        ));
    }
}
