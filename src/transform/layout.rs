use crate::types::LayoutInfo;
use serde_json::{Map, Value as JsonValue};

/// Extract position, size and auto-layout properties from a node
///
/// `x`, `y`, `width` and `height` come from `absoluteBoundingBox`; the
/// remaining fields are copied verbatim from the node. Missing and null
/// values are left out, so a node without geometry yields an empty
/// `LayoutInfo`.
///
/// # Examples
/// ```
/// use fig2layout::transform::extract_layout_info;
/// use serde_json::json;
///
/// let node = json!({
///     "absoluteBoundingBox": {"x": 10, "y": 20, "width": 100, "height": 50},
///     "layoutMode": "HORIZONTAL"
/// });
/// let layout = extract_layout_info(node.as_object().unwrap());
/// assert_eq!(layout.width, Some(json!(100)));
/// assert_eq!(layout.layout_mode, Some(json!("HORIZONTAL")));
/// ```
pub fn extract_layout_info(node: &Map<String, JsonValue>) -> LayoutInfo {
    let bounds = node.get("absoluteBoundingBox").and_then(|v| v.as_object());
    let bound = |key: &str| bounds.and_then(|b| non_null(b, key));
    let field = |key: &str| non_null(node, key);

    LayoutInfo {
        x: bound("x"),
        y: bound("y"),
        width: bound("width"),
        height: bound("height"),
        layout_mode: field("layoutMode"),
        primary_axis_align_items: field("primaryAxisAlignItems"),
        counter_axis_align_items: field("counterAxisAlignItems"),
        item_spacing: field("itemSpacing"),
        padding_left: field("paddingLeft"),
        padding_right: field("paddingRight"),
        padding_top: field("paddingTop"),
        padding_bottom: field("paddingBottom"),
        layout_align: field("layoutAlign"),
        layout_grow: field("layoutGrow"),
        constraints: field("constraints"),
        clips_content: field("clipsContent"),
    }
}

/// Clone a value out of a map unless it is missing or null
fn non_null(map: &Map<String, JsonValue>, key: &str) -> Option<JsonValue> {
    map.get(key).filter(|v| !v.is_null()).cloned()
}
