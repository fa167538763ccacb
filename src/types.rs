use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Default bound on tree depth for the transformer
pub const DEFAULT_MAX_DEPTH: usize = 48;

/// Largest depth bound a parsed response can reach
///
/// The JSON parser stops at 128 nested values and every node level costs two
/// (the node object and its `children` array), with room left for the
/// response envelope and nested paint/color objects.
pub const MAX_SUPPORTED_DEPTH: usize = 56;

/// Format of the bytes handed to the converter, detected from magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Plain JSON text
    Json,
    /// Gzip-compressed JSON
    Gzip,
    /// Zstandard-compressed JSON
    Zstd,
    /// ZIP archive of JSON responses
    Zip,
}

/// Options controlling the tree transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// Maximum nesting depth (the root is depth 0)
    pub max_depth: usize,
}

impl TransformOptions {
    /// Create options with the given depth bound
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

/// Geometry and auto-layout properties of a node
///
/// Every field is optional and skipped when absent, so an empty
/// `LayoutInfo` serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_align_items: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_align_items: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_align: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_grow: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clips_content: Option<JsonValue>,
}

impl LayoutInfo {
    /// True when no layout field was found
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A solid paint resolved to 0-255 channels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Paint opacity, carried through as found on the paint
    pub a: JsonValue,
}

/// Visual properties of a node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_name: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height_px: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_horizontal: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_vertical: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<JsonValue>>,
}

impl StyleInfo {
    /// True when no style field was found
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_layout_serializes_to_empty_object() {
        let value = serde_json::to_value(LayoutInfo::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_layout_field_names_are_camel_case() {
        let layout = LayoutInfo {
            primary_axis_align_items: Some(json!("CENTER")),
            padding_left: Some(json!(8)),
            clips_content: Some(json!(true)),
            ..Default::default()
        };

        let value = serde_json::to_value(layout).unwrap();
        assert_eq!(
            value,
            json!({
                "primaryAxisAlignItems": "CENTER",
                "paddingLeft": 8,
                "clipsContent": true
            })
        );
    }

    #[test]
    fn test_style_field_names() {
        let style = StyleInfo {
            stroke_weight: Some(json!(2)),
            line_height_px: Some(json!(20.5)),
            text_align_horizontal: Some(json!("LEFT")),
            ..Default::default()
        };

        let value = serde_json::to_value(style).unwrap();
        assert_eq!(
            value,
            json!({
                "strokeWeight": 2,
                "lineHeightPx": 20.5,
                "textAlignHorizontal": "LEFT"
            })
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(LayoutInfo::default().is_empty());
        assert!(StyleInfo::default().is_empty());

        let style = StyleInfo {
            font_size: Some(json!(12)),
            ..Default::default()
        };
        assert!(!style.is_empty());
    }

    #[test]
    fn test_default_options() {
        assert_eq!(TransformOptions::default().max_depth, DEFAULT_MAX_DEPTH);
    }
}
