//! # fig2layout
//!
//! A library for turning Figma API node trees into simplified layout/style
//! trees.
//!
//! ## Example
//!
//! ```
//! use fig2layout::transform_node_tree;
//! use serde_json::json;
//!
//! let node = json!({
//!     "id": "1:1",
//!     "type": "FRAME",
//!     "absoluteBoundingBox": {"x": 0, "y": 0, "width": 100, "height": 50},
//!     "fills": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0}, "opacity": 1}]
//! });
//!
//! let out = transform_node_tree(&node).unwrap();
//! assert_eq!(out["layout"]["width"], json!(100));
//! assert_eq!(out["styles"]["fill"], json!({"r": 0, "g": 0, "b": 0, "a": 1}));
//! assert!(out.get("id").is_none());
//! ```

pub mod api;
pub mod error;
pub mod input;
pub mod transform;
pub mod types;

// Re-export commonly used items
pub use error::{LayoutError, Result};
pub use transform::{transform_node_tree, transform_node_tree_with};
pub use types::{InputFormat, LayoutInfo, Rgba, StyleInfo, TransformOptions};

use serde_json::error::Category;
use serde_json::Value as JsonValue;

/// Convert a saved API response to a layout/style tree
///
/// Decompresses the input if needed, parses it, selects the document (the
/// node's document when `node_id` is given, the file's document otherwise)
/// and transforms it. Bounds above `types::MAX_SUPPORTED_DEPTH` are
/// limited by the JSON parser: documents nested past it fail with
/// `DepthExceeded` as well.
///
/// # Arguments
/// * `bytes` - Raw contents of a JSON, gzip or Zstandard response file
/// * `node_id` - Node to select from a nodes response
/// * `options` - Transformation options
///
/// # Examples
/// ```
/// use fig2layout::{convert, TransformOptions};
///
/// let bytes = br#"{"document": {"id": "0:0", "type": "DOCUMENT"}}"#;
/// let json = convert(bytes, None, &TransformOptions::default()).unwrap();
/// assert_eq!(json["type"], "DOCUMENT");
/// ```
pub fn convert(bytes: &[u8], node_id: Option<&str>, options: &TransformOptions) -> Result<JsonValue> {
    let response = parse_response(bytes, options.max_depth)?;
    let document = api::select_document(&response, node_id)?;
    transform_node_tree_with(document, options)
}

/// Convert a saved API response to the selected document, untransformed
///
/// Same selection as [`convert`], useful for comparing raw and simplified
/// output side by side.
pub fn convert_raw(bytes: &[u8], node_id: Option<&str>) -> Result<JsonValue> {
    let response = parse_response(bytes, types::MAX_SUPPORTED_DEPTH)?;
    let document = api::select_document(&response, node_id)?;
    Ok(document.clone())
}

/// Parse a response, reporting nesting past the parser's limit as `DepthExceeded`
fn parse_response(bytes: &[u8], max_depth: usize) -> Result<JsonValue> {
    let text = input::decompress_input(bytes)?;

    serde_json::from_slice(&text).map_err(|e| {
        // serde_json has no dedicated category for its nesting limit
        if e.classify() == Category::Syntax && e.to_string().starts_with("recursion limit exceeded") {
            LayoutError::DepthExceeded { max_depth }
        } else {
            LayoutError::from(e)
        }
    })
}
