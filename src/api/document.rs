use crate::error::{LayoutError, Result};
use serde_json::Value as JsonValue;

/// Convert a node ID from its URL form to its API form
///
/// Design URLs carry node IDs as `12-34` while the API expects `12:34`.
///
/// # Examples
/// ```
/// use fig2layout::api::normalize_node_id;
///
/// assert_eq!(normalize_node_id("12-34"), "12:34");
/// assert_eq!(normalize_node_id("12:34"), "12:34");
/// ```
pub fn normalize_node_id(node_id: &str) -> String {
    node_id.replace('-', ":")
}

/// Select the document node to transform from an API response
///
/// - With a node ID, `response` is expected to be a `/files/:key/nodes`
///   response and the node's `document` is returned.
/// - Without one, `response` is expected to be a `/files/:key` response and
///   its top-level `document` is returned. A bare node (an object with a
///   `type` and neither `document` nor `nodes`) is returned as is.
///
/// # Arguments
/// * `response` - Parsed API response
/// * `node_id` - Node to select, in URL or API form
///
/// # Returns
/// * `Ok(&JsonValue)` - The selected document node
/// * `Err(LayoutError)` - `NodeNotFound` or `MissingDocument`
pub fn select_document<'a>(response: &'a JsonValue, node_id: Option<&str>) -> Result<&'a JsonValue> {
    match node_id {
        Some(raw_id) => {
            let node_id = normalize_node_id(raw_id);
            let nodes = response.get("nodes").and_then(|v| v.as_object());

            let entry = nodes.and_then(|n| n.get(&node_id)).ok_or_else(|| {
                LayoutError::NodeNotFound {
                    node_id: node_id.clone(),
                    available: nodes
                        .map(|n| n.keys().cloned().collect())
                        .unwrap_or_default(),
                }
            })?;

            entry
                .get("document")
                .filter(|doc| is_present(doc))
                .ok_or_else(|| LayoutError::MissingDocument(format!("node '{}'", node_id)))
        }
        None => {
            if let Some(document) = response.get("document") {
                if is_present(document) {
                    return Ok(document);
                }
            } else if is_bare_node(response) {
                return Ok(response);
            }

            Err(LayoutError::MissingDocument(
                "file-level response".to_string(),
            ))
        }
    }
}

/// Collect every node ID in a raw tree, in document order
///
/// The transformer drops `id`, so callers that need IDs for a follow-up
/// image export collect them from the raw tree first.
pub fn collect_node_ids(tree: &JsonValue) -> Vec<String> {
    let mut ids = Vec::new();
    let mut stack = vec![tree];

    while let Some(node) = stack.pop() {
        if let Some(id) = node.get("id").and_then(|v| v.as_str()) {
            ids.push(id.to_string());
        }

        if let Some(children) = node.get("children").and_then(|v| v.as_array()) {
            stack.extend(children.iter().rev());
        }
    }

    ids
}

/// A document counts as missing when it is null, empty, zero or false
fn is_present(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(flag) => *flag,
        JsonValue::Number(n) => n.as_f64() != Some(0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(items) => !items.is_empty(),
        JsonValue::Object(map) => !map.is_empty(),
    }
}

fn is_bare_node(value: &JsonValue) -> bool {
    value.get("type").is_some() && value.get("nodes").is_none()
}
