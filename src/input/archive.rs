use crate::error::{LayoutError, Result};
use log::debug;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Suffix of transformed output files
pub const LAYOUT_SUFFIX: &str = "layout.json";

/// Suffix of raw (untransformed) output files
pub const RAW_SUFFIX: &str = "raw.json";

/// Extract a ZIP archive of API responses into a directory
///
/// # Arguments
/// * `bytes` - Raw ZIP file bytes
/// * `dir` - Destination directory, created if missing
///
/// # Examples
/// ```no_run
/// use fig2layout::input::extract_zip_to_directory;
///
/// let zip_bytes = std::fs::read("responses.zip").unwrap();
/// extract_zip_to_directory(&zip_bytes, std::path::Path::new("out")).unwrap();
/// ```
pub fn extract_zip_to_directory(bytes: &[u8], dir: &Path) -> Result<()> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    debug!("Extracting {} ZIP entries to {}", archive.len(), dir.display());

    fs::create_dir_all(dir)?;
    archive.extract(dir)?;
    Ok(())
}

/// Recursively find all JSON response files in a directory
///
/// Files produced by a previous conversion (`*.layout.json`, `*.raw.json`)
/// are skipped. Results are sorted by path.
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - Paths of the JSON files found
/// * `Err(LayoutError)` - If the directory cannot be read, or holds no JSON file
pub fn find_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut json_files = Vec::new();

    fn visit_dir(dir: &Path, json_files: &mut Vec<PathBuf>) -> Result<()> {
        if dir.is_dir() {
            for entry in fs::read_dir(dir)? {
                let path = entry?.path();

                if path.is_dir() {
                    visit_dir(&path, json_files)?;
                } else if is_response_file(&path) {
                    json_files.push(path);
                }
            }
        }
        Ok(())
    }

    visit_dir(dir, &mut json_files)?;

    if json_files.is_empty() {
        return Err(LayoutError::NoJsonInZip);
    }

    json_files.sort();
    Ok(json_files)
}

/// Path of the transformed output written next to an input file
///
/// `design.json` becomes `design.layout.json`.
pub fn layout_output_path(input: &Path) -> PathBuf {
    input.with_extension(LAYOUT_SUFFIX)
}

/// Path of the raw output written next to an input file
pub fn raw_output_path(input: &Path) -> PathBuf {
    input.with_extension(RAW_SUFFIX)
}

fn is_response_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
        return false;
    };

    name.ends_with(".json")
        && !name.ends_with(&format!(".{}", LAYOUT_SUFFIX))
        && !name.ends_with(&format!(".{}", RAW_SUFFIX))
}
