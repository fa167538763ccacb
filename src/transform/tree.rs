use crate::error::{LayoutError, Result};
use crate::transform::prune::kept_fields;
use crate::transform::{extract_layout_info, extract_style_info};
use crate::types::TransformOptions;
use log::debug;
use serde_json::{Map, Value as JsonValue};

/// Pending work on the traversal stack
enum Frame<'a> {
    /// Transform this node, found at the given depth
    Enter(&'a JsonValue, usize),
    /// All children of this node are done: collect the last `child_count`
    /// results into its `children` field
    Exit {
        node: Map<String, JsonValue>,
        child_count: usize,
    },
}

/// Transform a node tree into a simplified layout/style tree
///
/// Uses the default `TransformOptions`. See [`transform_node_tree_with`].
///
/// # Examples
/// ```
/// use fig2layout::transform::transform_node_tree;
/// use serde_json::json;
///
/// let node = json!({
///     "id": "1:1",
///     "type": "FRAME",
///     "children": [{"id": "1:2", "type": "TEXT", "fontSize": 14}]
/// });
/// let out = transform_node_tree(&node).unwrap();
/// assert_eq!(out, json!({
///     "type": "FRAME",
///     "layout": {},
///     "styles": {},
///     "children": [{"type": "TEXT", "layout": {}, "styles": {"fontSize": 14}}]
/// }));
/// ```
pub fn transform_node_tree(node: &JsonValue) -> Result<JsonValue> {
    transform_node_tree_with(node, &TransformOptions::default())
}

/// Transform a node tree with explicit options
///
/// Each node is pruned, then gets a `layout` and a `styles` entry; a
/// non-empty `children` array is transformed in order, an empty or missing
/// one is left out. Values that are not objects become `{}`.
///
/// The tree is walked with an explicit stack, so deep documents cannot
/// overflow the call stack. A node nested deeper than
/// `options.max_depth` (the root being depth 0) fails with
/// `LayoutError::DepthExceeded`.
///
/// # Arguments
/// * `node` - Root node, usually the `document` of an API response
/// * `options` - Traversal options
///
/// # Returns
/// * `Ok(JsonValue)` - The transformed tree, sharing nothing with the input
/// * `Err(LayoutError)` - If the depth bound is exceeded
pub fn transform_node_tree_with(node: &JsonValue, options: &TransformOptions) -> Result<JsonValue> {
    let mut stack = vec![Frame::Enter(node, 0)];
    let mut results: Vec<JsonValue> = Vec::new();
    let mut node_count = 0usize;

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(value, depth) => {
                if depth > options.max_depth {
                    return Err(LayoutError::DepthExceeded {
                        max_depth: options.max_depth,
                    });
                }

                let Some(source) = value.as_object() else {
                    results.push(JsonValue::Object(Map::new()));
                    continue;
                };

                node_count += 1;
                let children = non_empty_children(source);
                let node = transform_single_node(source, children.is_some())?;

                match children {
                    Some(children) => {
                        stack.push(Frame::Exit {
                            node,
                            child_count: children.len(),
                        });
                        // Reversed so the first child is popped first
                        for child in children.iter().rev() {
                            stack.push(Frame::Enter(child, depth + 1));
                        }
                    }
                    None => results.push(JsonValue::Object(node)),
                }
            }
            Frame::Exit {
                mut node,
                child_count,
            } => {
                let children = results.split_off(results.len() - child_count);
                node.insert("children".to_string(), JsonValue::Array(children));
                results.push(JsonValue::Object(node));
            }
        }
    }

    debug!("Transformed {} nodes", node_count);

    Ok(results
        .pop()
        .unwrap_or_else(|| JsonValue::Object(Map::new())))
}

/// Prune a node and attach its layout and style info
///
/// The raw `children` value is never copied. When the node has children a
/// null placeholder keeps the key in its source position until the
/// transformed children replace it; otherwise the key is left out.
fn transform_single_node(
    source: &Map<String, JsonValue>,
    has_children: bool,
) -> Result<Map<String, JsonValue>> {
    let mut node: Map<String, JsonValue> = kept_fields(source)
        .filter_map(|(key, value)| match key.as_str() {
            "children" if has_children => Some((key.clone(), JsonValue::Null)),
            "children" => None,
            _ => Some((key.clone(), value.clone())),
        })
        .collect();

    node.insert(
        "layout".to_string(),
        serde_json::to_value(extract_layout_info(source))?,
    );
    node.insert(
        "styles".to_string(),
        serde_json::to_value(extract_style_info(source))?,
    );

    Ok(node)
}

fn non_empty_children(source: &Map<String, JsonValue>) -> Option<&Vec<JsonValue>> {
    source
        .get("children")
        .and_then(|v| v.as_array())
        .filter(|children| !children.is_empty())
}
