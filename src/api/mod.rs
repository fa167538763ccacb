/// Helpers around design API responses
///
/// Pure functions used before and after the tree transformation. No network
/// access happens here; responses are handed in already parsed.
///
/// - `document`: Node ID normalization, document selection, ID collection
/// - `images`: Image export request validation and response resolution
pub mod document;
pub mod images;

// Re-export commonly used items
pub use document::{collect_node_ids, normalize_node_id, select_document};
pub use images::{
    image_query_params, parse_image_requests, resolve_image_urls, ImageEntry, ImageFormat,
    ImageRequest,
};
