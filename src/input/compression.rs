use crate::error::{LayoutError, Result};
use crate::input::header::detect_input_format;
use crate::types::InputFormat;
use flate2::read::GzDecoder;
use log::debug;
use std::io::Read;

/// Decode input bytes to JSON text bytes
///
/// Gzip and Zstandard input is decompressed; plain JSON is returned as-is.
/// ZIP archives hold several files and are handled by `input::archive`.
///
/// # Arguments
/// * `bytes` - Raw input file bytes
///
/// # Returns
/// * `Ok(Vec<u8>)` - Uncompressed bytes
/// * `Err(LayoutError)` - If decompression fails or the input is a ZIP archive
///
/// # Examples
/// ```
/// use fig2layout::input::decompress_input;
///
/// let plain = br#"{"document": {}}"#;
/// assert_eq!(decompress_input(plain).unwrap(), plain.to_vec());
/// ```
pub fn decompress_input(bytes: &[u8]) -> Result<Vec<u8>> {
    let format = detect_input_format(bytes);
    debug!("Detected input format: {:?}", format);

    match format {
        InputFormat::Json => Ok(bytes.to_vec()),
        InputFormat::Gzip => decompress_gzip(bytes),
        InputFormat::Zstd => decompress_zstd(bytes),
        InputFormat::Zip => Err(LayoutError::Decompression(
            "ZIP archives must be extracted, not decompressed".to_string(),
        )),
    }
}

/// Decompress gzip data
fn decompress_gzip(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(bytes);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| LayoutError::Decompression(format!("gzip decompression failed: {}", e)))?;
    Ok(decompressed)
}

/// Decompress data using Zstandard
fn decompress_zstd(bytes: &[u8]) -> Result<Vec<u8>> {
    zstd::decode_all(bytes)
        .map_err(|e| LayoutError::Decompression(format!("Zstandard decompression failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const SAMPLE: &[u8] = br#"{"document": {"id": "0:0", "type": "DOCUMENT"}}"#;

    #[test]
    fn test_plain_json_passthrough() {
        assert_eq!(decompress_input(SAMPLE).unwrap(), SAMPLE);
    }

    #[test]
    fn test_decompress_gzip() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(SAMPLE).unwrap();
        let compressed = encoder.finish().unwrap();

        assert_eq!(decompress_input(&compressed).unwrap(), SAMPLE);
    }

    #[test]
    fn test_decompress_zstd() {
        let compressed = zstd::encode_all(SAMPLE, 3).unwrap();

        assert_eq!(decompress_input(&compressed).unwrap(), SAMPLE);
    }

    #[test]
    fn test_decompress_truncated_gzip() {
        let result = decompress_input(&[0x1f, 0x8b, 0x08, 0x00, 0x01]);
        assert!(matches!(result, Err(LayoutError::Decompression(_))));
    }

    #[test]
    fn test_zip_is_rejected() {
        let result = decompress_input(b"PK\x03\x04rest");
        assert!(matches!(result, Err(LayoutError::Decompression(_))));
    }
}
