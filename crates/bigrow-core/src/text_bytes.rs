//! Serde helpers for byte fields that also accept text.
//!
//! Patterns and range bounds are bytes on the wire, but are usually written
//! as text in JSON filter descriptions. Text is taken as its UTF-8 bytes; an
//! array of integers in `0..=255` is taken verbatim.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrBytes {
    Text(String),
    Bytes(Vec<u8>),
}

impl From<TextOrBytes> for Vec<u8> {
    fn from(value: TextOrBytes) -> Self {
        match value {
            TextOrBytes::Text(text) => text.into_bytes(),
            TextOrBytes::Bytes(bytes) => bytes,
        }
    }
}

/// Deserialize a byte field from text or a byte array.
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    TextOrBytes::deserialize(deserializer).map(Vec::from)
}

/// Deserialize an optional byte field from null, text or a byte array.
pub(crate) fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<TextOrBytes>::deserialize(deserializer).map(|value| value.map(Vec::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Field {
        #[serde(deserialize_with = "deserialize")]
        value: Vec<u8>,
        #[serde(default, deserialize_with = "deserialize_option")]
        bound: Option<Vec<u8>>,
    }

    #[test]
    fn test_text_is_utf8_bytes() {
        let field: Field = serde_json::from_value(json!({ "value": "é", "bound": "c" })).unwrap();
        assert_eq!(field.value, "é".as_bytes());
        assert_eq!(field.bound, Some(b"c".to_vec()));
    }

    #[test]
    fn test_byte_array_is_verbatim() {
        let field: Field = serde_json::from_value(json!({ "value": [0, 255] })).unwrap();
        assert_eq!(field.value, vec![0, 255]);
        assert_eq!(field.bound, None);
    }

    #[test]
    fn test_null_bound() {
        let field: Field = serde_json::from_value(json!({ "value": "", "bound": null })).unwrap();
        assert_eq!(field.bound, None);
    }

    #[test]
    fn test_rejects_other_types() {
        assert!(serde_json::from_value::<Field>(json!({ "value": 42 })).is_err());
        assert!(serde_json::from_value::<Field>(json!({ "value": [256] })).is_err());
    }
}
