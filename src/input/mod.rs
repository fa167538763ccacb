pub mod archive;
pub mod compression;
pub mod header;

// Re-export commonly used items
pub use archive::{
    extract_zip_to_directory, find_json_files, layout_output_path, raw_output_path,
};
pub use compression::decompress_input;
pub use header::{detect_input_format, is_zip_container};
