use crate::error::{LayoutError, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;

/// Export format for rendered node images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = LayoutError;

    /// Parse a format name, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            _ => Err(LayoutError::InvalidImageFormat(s.to_string())),
        }
    }
}

/// One node to export as an image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    pub node_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl ImageRequest {
    /// File name to save the image under, `<nodeId>.<format>` by default
    pub fn file_name_or_default(&self, format: ImageFormat) -> String {
        self.file_name
            .clone()
            .unwrap_or_else(|| format!("{}.{}", self.node_id, format))
    }
}

/// Result of resolving one image request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEntry {
    pub file_name: String,
    pub format: ImageFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Parse a list of image requests
///
/// Expects an array of objects, each with a string `nodeId` and an optional
/// string `fileName`.
///
/// # Examples
/// ```
/// use fig2layout::api::parse_image_requests;
/// use serde_json::json;
///
/// let requests = parse_image_requests(&json!([{"nodeId": "1:2", "fileName": "logo.png"}])).unwrap();
/// assert_eq!(requests[0].node_id, "1:2");
/// ```
pub fn parse_image_requests(nodes: &JsonValue) -> Result<Vec<ImageRequest>> {
    let entries = nodes.as_array().ok_or(LayoutError::InvalidImageNodes)?;

    entries
        .iter()
        .map(|entry| {
            if entry.get("nodeId").and_then(|v| v.as_str()).is_none() {
                return Err(LayoutError::InvalidImageNodes);
            }
            serde_json::from_value(entry.clone()).map_err(|_| LayoutError::InvalidImageNodes)
        })
        .collect()
}

/// Build the query parameters of an image export call
///
/// Returns `ids` (comma-separated node IDs, in request order) and `format`.
pub fn image_query_params(requests: &[ImageRequest], format: ImageFormat) -> Vec<(String, String)> {
    let ids: Vec<&str> = requests.iter().map(|r| r.node_id.as_str()).collect();

    vec![
        ("ids".to_string(), ids.join(",")),
        ("format".to_string(), format.to_string()),
    ]
}

/// Match an image export response against the requests that produced it
///
/// Each request yields one entry, in order, carrying either the URL found
/// under `images.<nodeId>` or an error when the response has none.
///
/// # Arguments
/// * `requests` - The requests sent
/// * `format` - Format the images were requested in
/// * `response` - Parsed `/images/:key` response
pub fn resolve_image_urls(
    requests: &[ImageRequest],
    format: ImageFormat,
    response: &JsonValue,
) -> Vec<ImageEntry> {
    let images = response.get("images").and_then(|v| v.as_object());

    requests
        .iter()
        .map(|request| {
            let url = images
                .and_then(|map| map.get(&request.node_id))
                .and_then(|v| v.as_str())
                .filter(|url| !url.is_empty());

            let file_name = request.file_name_or_default(format);

            match url {
                Some(url) => ImageEntry {
                    file_name,
                    format,
                    url: Some(url.to_string()),
                    error: None,
                },
                None => {
                    warn!("No image URL returned for node {}", request.node_id);
                    ImageEntry {
                        file_name,
                        format,
                        url: None,
                        error: Some(format!("No image URL found for nodeId: {}", request.node_id)),
                    }
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_image_format_from_str() {
        assert_eq!("png".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
        assert_eq!(" SVG ".parse::<ImageFormat>().unwrap(), ImageFormat::Svg);

        match "jpg".parse::<ImageFormat>() {
            Err(LayoutError::InvalidImageFormat(format)) => assert_eq!(format, "jpg"),
            other => panic!("Expected InvalidImageFormat error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_image_requests() {
        let requests = parse_image_requests(&json!([
            {"nodeId": "1:2", "fileName": "hero.png"},
            {"nodeId": "3:4"}
        ]))
        .unwrap();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].file_name.as_deref(), Some("hero.png"));
        assert_eq!(requests[1].file_name, None);
    }

    #[test]
    fn test_parse_image_requests_invalid() {
        assert!(matches!(
            parse_image_requests(&json!({"nodeId": "1:2"})),
            Err(LayoutError::InvalidImageNodes)
        ));
        assert!(matches!(
            parse_image_requests(&json!([{"fileName": "a.png"}])),
            Err(LayoutError::InvalidImageNodes)
        ));
        assert!(matches!(
            parse_image_requests(&json!(["1:2"])),
            Err(LayoutError::InvalidImageNodes)
        ));
        assert!(matches!(
            parse_image_requests(&json!([{"nodeId": 12}])),
            Err(LayoutError::InvalidImageNodes)
        ));
    }

    #[test]
    fn test_image_query_params() {
        let requests = parse_image_requests(&json!([{"nodeId": "1:2"}, {"nodeId": "3:4"}])).unwrap();

        let params = image_query_params(&requests, ImageFormat::Svg);

        assert_eq!(
            params,
            vec![
                ("ids".to_string(), "1:2,3:4".to_string()),
                ("format".to_string(), "svg".to_string())
            ]
        );
    }

    #[test]
    fn test_resolve_image_urls() {
        let requests = parse_image_requests(&json!([
            {"nodeId": "1:2", "fileName": "hero.png"},
            {"nodeId": "3:4"},
            {"nodeId": "5:6"}
        ]))
        .unwrap();
        let response = json!({
            "err": null,
            "images": {"1:2": "https://example.com/a.png", "3:4": null}
        });

        let entries = resolve_image_urls(&requests, ImageFormat::Png, &response);

        assert_eq!(
            serde_json::to_value(&entries).unwrap(),
            json!([
                {"fileName": "hero.png", "format": "png", "url": "https://example.com/a.png"},
                {"fileName": "3:4.png", "format": "png", "error": "No image URL found for nodeId: 3:4"},
                {"fileName": "5:6.png", "format": "png", "error": "No image URL found for nodeId: 5:6"}
            ])
        );
    }

    #[test]
    fn test_resolve_image_urls_without_images_map() {
        let requests = parse_image_requests(&json!([{"nodeId": "1:2"}])).unwrap();

        let entries = resolve_image_urls(&requests, ImageFormat::Svg, &json!({"status": 400}));

        assert_eq!(entries.len(), 1);
        assert!(entries[0].url.is_none());
        assert_eq!(entries[0].file_name, "1:2.svg");
    }
}
