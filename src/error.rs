use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Tree depth exceeds the maximum of {max_depth} levels")]
    DepthExceeded { max_depth: usize },

    #[error("Node ID '{node_id}' not found in response. Available nodes: {available:?}")]
    NodeNotFound {
        node_id: String,
        available: Vec<String>,
    },

    #[error("Document field missing from {0}")]
    MissingDocument(String),

    #[error("Invalid format '{0}'. Use 'png' or 'svg'.")]
    InvalidImageFormat(String),

    #[error("Invalid 'nodes' format. Expected a list of dicts like {{nodeId: str, fileName: str}}")]
    InvalidImageNodes,

    #[error("Decompression failed: {0}")]
    Decompression(String),

    #[error("No JSON files found in ZIP archive")]
    NoJsonInZip,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("ZIP library error: {0}")]
    ZipLibraryError(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
