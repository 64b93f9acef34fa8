//! Render configuration, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compositor::ZeroIndexPolicy;
use crate::error::BmfResult;
use crate::png::PngConfig;

/// Which canvas the renderer allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasKind {
    /// 8-bit RGBA with a transparent background.
    #[default]
    Rgba,
    /// 8-bit palette image mirroring the font palette.
    Indexed,
}

/// PNG compression preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompressionLevel {
    Fast,
    #[default]
    Default,
    Best,
}

impl CompressionLevel {
    pub fn png_config(self) -> PngConfig {
        match self {
            CompressionLevel::Fast => PngConfig::fast(),
            CompressionLevel::Default => PngConfig::default(),
            CompressionLevel::Best => PngConfig::best_compression(),
        }
    }
}

/// Options for [`crate::render::render_text`].
///
/// ```json
/// { "letter_gap": 1, "zero_index": "opaque", "canvas": "indexed", "compression": "best" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Overrides the font's letter gap when set.
    pub letter_gap: Option<i32>,
    pub zero_index: ZeroIndexPolicy,
    pub canvas: CanvasKind,
    pub compression: CompressionLevel,
}

impl RenderConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> BmfResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration file.
    pub fn load(path: &Path) -> BmfResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> BmfResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BmfError;

    #[test]
    fn test_defaults_from_empty_object() {
        let config = RenderConfig::from_json("{}").unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.zero_index, ZeroIndexPolicy::Transparent);
        assert_eq!(config.canvas, CanvasKind::Rgba);
    }

    #[test]
    fn test_parse_all_fields() {
        let config = RenderConfig::from_json(
            r#"{"letter_gap": -1, "zero_index": "opaque", "canvas": "indexed", "compression": "best"}"#,
        )
        .unwrap();
        assert_eq!(config.letter_gap, Some(-1));
        assert_eq!(config.zero_index, ZeroIndexPolicy::Opaque);
        assert_eq!(config.canvas, CanvasKind::Indexed);
        assert_eq!(config.compression, CompressionLevel::Best);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = RenderConfig::from_json(r#"{"gap": 1}"#).unwrap_err();
        assert!(matches!(err, BmfError::Config(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = RenderConfig {
            letter_gap: Some(2),
            compression: CompressionLevel::Fast,
            ..Default::default()
        };
        let back = RenderConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }
}
