//! JSON body serialization utilities.

use bytes::Bytes;

use crate::Result;

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use notarize_core::to_json;
/// use serde_json::json;
///
/// let bytes = to_json(&json!({"url": "https://example.com/hook"})).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"url":"https://example.com/hook"}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so a failure names the exact field that
/// did not deserialize (e.g., "signerInfo.address.city").
///
/// # Errors
///
/// Returns an error if JSON deserialization fails.
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_json_serialize() {
        #[derive(serde::Serialize)]
        struct Hook {
            url: String,
            header: Option<String>,
        }

        let hook = Hook {
            url: "https://example.com/hook".to_owned(),
            header: None,
        };

        let bytes = to_json(&hook).expect("serialize");
        assert_eq!(
            bytes.as_ref(),
            br#"{"url":"https://example.com/hook","header":null}"#
        );
    }

    #[test]
    fn from_json_deserialize() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Hook {
            url: String,
        }

        let bytes = br#"{"url":"https://example.com/hook"}"#;
        let hook: Hook = from_json(bytes).expect("deserialize");
        assert_eq!(hook.url, "https://example.com/hook");
    }

    #[test]
    fn from_json_syntax_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Hook {
            #[allow(dead_code)]
            url: String,
        }

        let result: Result<Hook> = from_json(b"not json");
        let err = result.expect_err("should fail");
        assert!(err.to_string().contains("JSON deserialization error"));
    }

    #[test]
    fn from_json_missing_field_error_with_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Address {
            #[allow(dead_code)]
            city: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct Signer {
            #[allow(dead_code)]
            address: Address,
        }

        let result: Result<Signer> = from_json(br#"{"address":{}}"#);
        let err = result.expect_err("should fail");
        let msg = err.to_string();
        assert!(msg.contains("address"), "expected path in error: {msg}");
        assert!(msg.contains("city"), "expected field in error: {msg}");
    }
}
