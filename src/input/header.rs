use crate::types::InputFormat;

/// Gzip magic signature
const GZIP_MAGIC: &[u8; 2] = &[0x1f, 0x8b];

/// Zstandard frame magic number (0xFD2FB528, little-endian)
const ZSTD_MAGIC: &[u8; 4] = &[0x28, 0xb5, 0x2f, 0xfd];

/// ZIP magic signature (first two bytes)
const ZIP_MAGIC: &[u8; 2] = b"PK";

/// Detect the format of an input file from its magic bytes
///
/// Anything that is not gzip, Zstandard or ZIP is treated as JSON text and
/// left for the JSON parser to reject.
///
/// # Examples
/// ```
/// use fig2layout::input::detect_input_format;
/// use fig2layout::InputFormat;
///
/// assert_eq!(detect_input_format(b"{\"document\": {}}"), InputFormat::Json);
/// assert_eq!(detect_input_format(&[0x1f, 0x8b, 0x08]), InputFormat::Gzip);
/// ```
pub fn detect_input_format(bytes: &[u8]) -> InputFormat {
    if bytes.starts_with(GZIP_MAGIC) {
        InputFormat::Gzip
    } else if bytes.starts_with(ZSTD_MAGIC) {
        InputFormat::Zstd
    } else if is_zip_container(bytes) {
        InputFormat::Zip
    } else {
        InputFormat::Json
    }
}

/// Check if the file is a ZIP container
///
/// Exported API responses are sometimes bundled in a ZIP archive. This
/// checks for the ZIP magic signature "PK" (0x50 0x4B).
pub fn is_zip_container(bytes: &[u8]) -> bool {
    bytes.starts_with(ZIP_MAGIC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_json() {
        assert_eq!(detect_input_format(b"{}"), InputFormat::Json);
        assert_eq!(detect_input_format(b"  [1, 2]"), InputFormat::Json);
        assert_eq!(detect_input_format(b""), InputFormat::Json);
    }

    #[test]
    fn test_detect_gzip() {
        assert_eq!(detect_input_format(&[0x1f, 0x8b, 0x08, 0x00]), InputFormat::Gzip);
    }

    #[test]
    fn test_detect_zstd() {
        assert_eq!(detect_input_format(&[0x28, 0xb5, 0x2f, 0xfd, 0x00]), InputFormat::Zstd);
    }

    #[test]
    fn test_detect_zip() {
        assert_eq!(detect_input_format(b"PK\x03\x04"), InputFormat::Zip);
        assert!(is_zip_container(b"PK\x03\x04"));
        assert!(!is_zip_container(b"P"));
    }
}
