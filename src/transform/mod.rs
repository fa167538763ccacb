/// Node tree transformation
///
/// Turns a raw design-document node into a simplified layout/style node:
///
/// - `prune`: Drop identifiers, plugin data and other internal fields
/// - `layout`: Extract position, size and auto-layout properties
/// - `style`: Resolve solid fill/stroke colors, typography and visible effects
/// - `tree`: Apply the three above to every node, preserving the hierarchy
pub mod layout;
pub mod prune;
pub mod style;
pub mod tree;

// Re-export commonly used functions
pub use layout::extract_layout_info;
pub use prune::{is_ignored_field, prune_node, IGNORED_FIELDS};
pub use style::extract_style_info;
pub use tree::{transform_node_tree, transform_node_tree_with};
