use serde_json::{Map, Value as JsonValue};

/// Fields dropped from every node
///
/// Identifiers, plugin storage, component linkage, render caches, mask and
/// visibility bookkeeping, prototype transitions, layout grids and style
/// override tables. `styles` is dropped here so the extracted style info can
/// take its place.
pub const IGNORED_FIELDS: [&str; 15] = [
    "id",
    "pluginData",
    "sharedPluginData",
    "componentId",
    "absoluteRenderBounds",
    "isMask",
    "isMaskOutline",
    "transitionNodeID",
    "visible",
    "layoutGrids",
    "styles",
    "characterStyleOverrides",
    "styleOverrideTable",
    "overrideValues",
    "componentPropertyReferences",
];

/// Check whether a key belongs to the ignore-list (case-sensitive)
pub fn is_ignored_field(key: &str) -> bool {
    IGNORED_FIELDS.contains(&key)
}

/// Copy a node without its internal, non-semantic fields
///
/// Only the top level of the node is filtered. Nested values (including
/// `children`) are cloned as they are; the assembler replaces `children`
/// afterwards.
///
/// # Examples
/// ```
/// use fig2layout::transform::prune_node;
/// use serde_json::json;
///
/// let node = json!({"id": "1:2", "name": "Button", "visible": true});
/// let pruned = prune_node(node.as_object().unwrap());
/// assert_eq!(serde_json::Value::Object(pruned), json!({"name": "Button"}));
/// ```
pub fn prune_node(node: &Map<String, JsonValue>) -> Map<String, JsonValue> {
    kept_fields(node)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Borrow the fields that survive pruning, in source order
pub(crate) fn kept_fields(
    node: &Map<String, JsonValue>,
) -> impl Iterator<Item = (&String, &JsonValue)> {
    node.iter().filter(|(key, _)| !is_ignored_field(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn prune(value: JsonValue) -> JsonValue {
        JsonValue::Object(prune_node(value.as_object().unwrap()))
    }

    #[test]
    fn test_prune_removes_every_ignored_field() {
        let mut node = Map::new();
        for key in IGNORED_FIELDS {
            node.insert(key.to_string(), json!("x"));
        }
        node.insert("name".to_string(), json!("Frame"));

        let pruned = prune_node(&node);

        assert_eq!(pruned.len(), 1);
        assert_eq!(pruned.get("name"), Some(&json!("Frame")));
    }

    #[test]
    fn test_prune_preserves_other_fields() {
        let pruned = prune(json!({
            "id": "1:1",
            "name": "Card",
            "type": "FRAME",
            "opacity": 0.5,
            "fills": [{"type": "SOLID"}],
            "children": [{"id": "1:2"}]
        }));

        assert_eq!(
            pruned,
            json!({
                "name": "Card",
                "type": "FRAME",
                "opacity": 0.5,
                "fills": [{"type": "SOLID"}],
                "children": [{"id": "1:2"}]
            })
        );
    }

    #[test]
    fn test_prune_is_case_sensitive() {
        let pruned = prune(json!({"ID": "1:1", "Visible": false, "id": "1:1"}));

        assert_eq!(pruned, json!({"ID": "1:1", "Visible": false}));
    }

    #[test]
    fn test_prune_is_idempotent() {
        let once = prune(json!({
            "id": "1:1",
            "styles": {"fill": "S:abc"},
            "pluginData": {},
            "name": "Text",
            "characters": "Hello"
        }));
        let twice = prune(once.clone());

        assert_eq!(once, twice);
        assert!(once.as_object().unwrap().keys().all(|k| !is_ignored_field(k)));
    }

    #[test]
    fn test_prune_empty_node() {
        assert_eq!(prune(json!({})), json!({}));
    }

    #[test]
    fn test_prune_does_not_touch_nested_fields() {
        let pruned = prune(json!({"constraints": {"id": "kept", "visible": true}}));

        assert_eq!(pruned["constraints"]["id"], json!("kept"));
    }
}
