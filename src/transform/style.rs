use crate::types::{Rgba, StyleInfo};
use serde_json::{Map, Value as JsonValue};

/// Extract fill, stroke, typography and effects from a node
///
/// Four independent checks, each of which may contribute nothing:
/// - `fill`: the first entry of `fills`, when it is a `SOLID` paint with a color
/// - `stroke` / `strokeWeight`: the same rule over `strokes`, plus the weight
/// - typography fields, copied as found
/// - `effects`: entries not explicitly marked `"visible": false`
///
/// # Examples
/// ```
/// use fig2layout::transform::extract_style_info;
/// use serde_json::json;
///
/// let node = json!({
///     "fills": [{"type": "SOLID", "color": {"r": 1.0, "g": 0.0, "b": 0.0}}],
///     "fontSize": 14
/// });
/// let style = extract_style_info(node.as_object().unwrap());
/// assert_eq!(style.fill.unwrap().r, 255);
/// assert_eq!(style.font_size, Some(json!(14)));
/// ```
pub fn extract_style_info(node: &Map<String, JsonValue>) -> StyleInfo {
    let typography = |key: &str| node.get(key).cloned();

    StyleInfo {
        fill: first_solid_paint(node.get("fills")),
        stroke: first_solid_paint(node.get("strokes")),
        stroke_weight: stroke_weight(node),
        font_name: typography("fontName"),
        font_size: typography("fontSize"),
        line_height_px: typography("lineHeightPx"),
        letter_spacing: typography("letterSpacing"),
        text_align_horizontal: typography("textAlignHorizontal"),
        text_align_vertical: typography("textAlignVertical"),
        effects: visible_effects(node.get("effects")),
    }
}

/// Resolve the first paint of a paint list, if it is a solid color
///
/// Only the first entry is authoritative: a gradient or image paint in first
/// position hides any solid paint that follows it.
fn first_solid_paint(paints: Option<&JsonValue>) -> Option<Rgba> {
    let paint = paints?.as_array()?.first()?.as_object()?;

    if paint.get("type").and_then(|v| v.as_str()) != Some("SOLID") {
        return None;
    }

    let color = paint.get("color")?.as_object()?;
    let r = color.get("r")?.as_f64()?;
    let g = color.get("g")?.as_f64()?;
    let b = color.get("b")?.as_f64()?;

    let a = paint
        .get("opacity")
        .cloned()
        .unwrap_or_else(|| JsonValue::from(1.0));

    Some(Rgba {
        r: channel_to_byte(r),
        g: channel_to_byte(g),
        b: channel_to_byte(b),
        a,
    })
}

/// Stroke weight, reported only for nodes that have at least one stroke
///
/// The weight is independent of the solid check: an image or gradient
/// stroke still carries it. Nodes with `"strokes": []` carry a default
/// weight that draws nothing and is left out.
fn stroke_weight(node: &Map<String, JsonValue>) -> Option<JsonValue> {
    let has_strokes = node
        .get("strokes")
        .and_then(|v| v.as_array())
        .is_some_and(|strokes| !strokes.is_empty());

    if has_strokes {
        node.get("strokeWeight").cloned()
    } else {
        None
    }
}

/// Convert a channel in range 0.0-1.0 to 0-255
///
/// Clamps the input and rounds half away from zero, so 0.5 maps to 128.
fn channel_to_byte(value: f64) -> u8 {
    let clamped = value.clamp(0.0, 1.0);
    (clamped * 255.0).round() as u8
}

/// Keep effects that are visible, preserving order
///
/// An effect object without a `visible` field counts as visible; entries that
/// are not objects are dropped. Returns `None` when nothing remains.
fn visible_effects(effects: Option<&JsonValue>) -> Option<Vec<JsonValue>> {
    let visible: Vec<JsonValue> = effects?
        .as_array()?
        .iter()
        .filter(|effect| is_visible(effect))
        .cloned()
        .collect();

    if visible.is_empty() {
        None
    } else {
        Some(visible)
    }
}

fn is_visible(effect: &JsonValue) -> bool {
    let Some(effect) = effect.as_object() else {
        return false;
    };

    match effect.get("visible") {
        None => true,
        Some(JsonValue::Bool(visible)) => *visible,
        Some(_) => false,
    }
}
