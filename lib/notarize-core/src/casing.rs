//! Key transcoding between caller naming and wire naming.
//!
//! The SDK speaks camelCase to callers while the Notarize API speaks
//! snake_case on the wire. [`to_wire`] rewrites keys on outbound request
//! bodies and [`to_caller`] rewrites keys on decoded response payloads.
//! Both recurse through nested objects and arrays; only key spelling is
//! touched, never values.
//!
//! # Example
//!
//! ```
//! use notarize_core::casing;
//! use serde_json::json;
//!
//! let body = json!({"transactionName": "Deed", "signerInfo": {"firstName": "Ann"}});
//! let wire = casing::to_wire(body.clone());
//! assert_eq!(wire, json!({"transaction_name": "Deed", "signer_info": {"first_name": "Ann"}}));
//! assert_eq!(casing::to_caller(wire), body);
//! ```

use serde_json::Value;

/// Rewrite a camelCase key as snake_case.
///
/// Each ASCII uppercase letter closes a word: an underscore is inserted
/// and the letter is lowered. Digits do not open a new word, so keys
/// like `line1` pass through unchanged.
#[must_use]
pub fn camel_to_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Rewrite a snake_case key as camelCase.
///
/// An underscore followed by a lowercase letter is removed and the
/// letter is uppercased. Leading underscores and underscores not
/// followed by a lowercase letter are preserved, so this is the exact
/// inverse of [`camel_to_snake`] for valid camelCase keys.
#[must_use]
pub fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' && !out.is_empty() {
            if let Some(next) = chars.peek().copied() {
                if next.is_ascii_lowercase() {
                    chars.next();
                    out.push(next.to_ascii_uppercase());
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Convert every key of a structured value to wire naming (snake_case).
///
/// Recurses through nested objects and each element of nested arrays.
/// Scalars and non-object array elements pass through unchanged.
#[must_use]
pub fn to_wire(value: Value) -> Value {
    rekey(value, camel_to_snake)
}

/// Convert every key of a structured value to caller naming (camelCase).
///
/// The inverse of [`to_wire`], with the same recursion semantics.
#[must_use]
pub fn to_caller(value: Value) -> Value {
    rekey(value, snake_to_camel)
}

fn rekey<F>(value: Value, f: F) -> Value
where
    F: Fn(&str) -> String + Copy,
{
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, inner)| (f(&key), rekey(inner, f)))
                .collect(),
        ),
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|inner| rekey(inner, f)).collect())
        }
        scalar => scalar,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn camel_to_snake_keys() {
        assert_eq!(camel_to_snake("transactionName"), "transaction_name");
        assert_eq!(camel_to_snake("requireSecondaryPhotoId"), "require_secondary_photo_id");
        assert_eq!(camel_to_snake("line1"), "line1");
        assert_eq!(camel_to_snake("email"), "email");
    }

    #[test]
    fn snake_to_camel_keys() {
        assert_eq!(snake_to_camel("transaction_name"), "transactionName");
        assert_eq!(snake_to_camel("require_secondary_photo_id"), "requireSecondaryPhotoId");
        assert_eq!(snake_to_camel("line1"), "line1");
        assert_eq!(snake_to_camel("email"), "email");
    }

    #[test]
    fn to_wire_rewrites_nested_objects() {
        let value = json!({
            "messageToSigner": "please sign",
            "signerInfo": {
                "firstName": "Ann",
                "address": {"zipCode": "02134"}
            }
        });

        let wire = to_wire(value);
        assert_eq!(
            wire,
            json!({
                "message_to_signer": "please sign",
                "signer_info": {
                    "first_name": "Ann",
                    "address": {"zip_code": "02134"}
                }
            })
        );
    }

    #[test]
    fn to_wire_recurses_through_arrays_of_objects() {
        let value = json!({
            "signers": [
                {"firstName": "Ann", "phone": [{"countryCode": "1"}]},
                {"firstName": "Bob"}
            ]
        });

        let wire = to_wire(value);
        assert_eq!(
            wire,
            json!({
                "signers": [
                    {"first_name": "Ann", "phone": [{"country_code": "1"}]},
                    {"first_name": "Bob"}
                ]
            })
        );
    }

    #[test]
    fn scalar_array_elements_pass_through() {
        let value = json!({"allowedActions": ["sign", "annotate"], "bundlePosition": 3});
        let wire = to_wire(value);
        assert_eq!(
            wire,
            json!({"allowed_actions": ["sign", "annotate"], "bundle_position": 3})
        );
    }

    #[test]
    fn values_are_never_rewritten() {
        // Value strings that look like keys must come out untouched.
        let value = json!({"trackingId": "someCamelValue"});
        assert_eq!(to_wire(value), json!({"tracking_id": "someCamelValue"}));
    }

    #[test]
    fn round_trip_reproduces_caller_value() {
        let value = json!({
            "transactionName": "Deed of Trust",
            "documents": [
                {
                    "trackingId": "d-1",
                    "signingDestinations": [
                        {"pageNumber": 1, "fontSize": 12, "x": 10, "y": 20}
                    ]
                }
            ],
            "signerInfo": {
                "dob": "1980-01-01",
                "address": {"line1": "1 Main St", "zipCode": "02134"}
            },
            "draft": true
        });

        assert_eq!(to_caller(to_wire(value.clone())), value);
    }

    #[test]
    fn single_word_keys_unchanged_in_both_directions() {
        let value = json!({"status": "sent", "draft": false});
        assert_eq!(to_wire(value.clone()), value);
        assert_eq!(to_caller(value.clone()), value);
    }
}
