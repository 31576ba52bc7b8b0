use serde::{Deserialize, Serialize};

use crate::geometry::Extent;
use crate::history::ColorPolicy;
use crate::mapper::CanvasSize;

/// How forgiving the `.dat` reader is with malformed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Reject the whole file on the first malformed line.
    #[default]
    Strict,
    /// Accept what older files contain; bad numbers become NaN.
    Lenient,
}

/// Settings for a drawing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Size of the canvas before any viewport fitting.
    pub canvas: CanvasSize,
    /// Extent restored on every reset.
    pub default_extent: Extent,
    pub parse_mode: ParseMode,
    pub color_policy: ColorPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            default_extent: Extent::default(),
            parse_mode: ParseMode::Strict,
            color_policy: ColorPolicy::Uniform,
        }
    }
}

impl SessionConfig {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.canvas, CanvasSize::new(640.0, 480.0));
        assert_eq!(config.default_extent, Extent::new(0.0, 640.0, 0.0, 480.0));
        assert_eq!(config.parse_mode, ParseMode::Strict);
        assert_eq!(config.color_policy, ColorPolicy::Uniform);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config =
            SessionConfig::from_json(r#"{ "parse_mode": "lenient", "color_policy": "per_polyline" }"#)
                .unwrap();
        assert_eq!(config.parse_mode, ParseMode::Lenient);
        assert_eq!(config.color_policy, ColorPolicy::PerPolyline);
        assert_eq!(config.canvas, CanvasSize::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = SessionConfig::default();
        config.canvas = CanvasSize::new(800.0, 600.0);
        let json = config.to_json().unwrap();
        assert_eq!(SessionConfig::from_json(&json).unwrap(), config);
    }
}
