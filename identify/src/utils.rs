use serde_json::json;

use crate::models::PROMPT;

/// Splits a `data:` URI into its metadata prefix and base64 payload.
///
/// Returns `None` when the comma separator is missing or the payload is
/// blank, in which case the image must not be sent anywhere.
pub fn split_data_uri(data_uri: &str) -> Option<(&str, &str)> {
    let (metadata, payload) = data_uri.split_once(',')?;
    let payload = payload.trim();

    if payload.is_empty() {
        return None;
    }

    Some((metadata, payload))
}

/// Mime type embedded in the metadata segment, e.g. `data:image/png;base64`.
/// Cameras hand us jpeg when nothing says otherwise.
pub fn mime_type(metadata: &str) -> &str {
    metadata
        .strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .filter(|mime| !mime.is_empty())
        .unwrap_or("image/jpeg")
}

pub fn build_payload(mime_type: &str, base64_image: &str) -> serde_json::Value {
    json!({
        "contents": [{
            "parts": [
                {
                    "inlineData": {
                        "mimeType": mime_type,
                        "data": base64_image
                    }
                },
                { "text": PROMPT }
            ]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "type": { "type": "STRING" },
                    "material": { "type": "STRING" },
                    "description": { "type": "STRING" },
                    "sortingSteps": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" }
                    },
                    "environmentalImpact": { "type": "STRING" },
                    "points": { "type": "NUMBER" }
                },
                "required": [
                    "type",
                    "material",
                    "description",
                    "sortingSteps",
                    "environmentalImpact",
                    "points"
                ]
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{mime_type, split_data_uri};

    #[test]
    fn test_basic() {
        assert_eq!(
            split_data_uri("data:image/jpeg;base64,AAAA"),
            Some(("data:image/jpeg;base64", "AAAA"))
        );
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(split_data_uri("data:image/jpeg;base64"), None);
        assert_eq!(split_data_uri(""), None);
    }

    #[test]
    fn test_blank_payload() {
        assert_eq!(split_data_uri("data:image/jpeg;base64,"), None);
        assert_eq!(split_data_uri("data:image/jpeg;base64,   "), None);
    }

    #[test]
    fn test_payload_kept_verbatim_after_first_comma() {
        assert_eq!(
            split_data_uri("data:image/png;base64,aGVsbG8=,extra"),
            Some(("data:image/png;base64", "aGVsbG8=,extra"))
        );
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(mime_type("data:image/png;base64"), "image/png");
        assert_eq!(mime_type("data:image/webp;base64"), "image/webp");
    }

    #[test]
    fn test_mime_type_fallback() {
        assert_eq!(mime_type("data:;base64"), "image/jpeg");
        assert_eq!(mime_type("garbage"), "image/jpeg");
    }
}
