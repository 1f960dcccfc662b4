//! Row key type.

use std::fmt;

use bytes::Bytes;
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

/// The key identifying a row.
///
/// Keys are raw bytes on the wire. Text keys are normalized to their UTF-8
/// encoding when the key is built, so `RowKey::from("k")` and
/// `RowKey::from(b"k")` are equal.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowKey(Bytes);

impl RowKey {
    /// Create a key from anything convertible into a key.
    pub fn new(key: impl Into<RowKey>) -> Self {
        key.into()
    }

    /// Build a key from a dynamically typed JSON value.
    ///
    /// Accepts a string (UTF-8 encoded) or an array of integers in `0..=255`.
    /// Anything else is a [`Error::TypeConstraint`].
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::String(text) => Ok(Self::from(text.as_str())),
            JsonValue::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_u64()
                        .and_then(|n| u8::try_from(n).ok())
                        .ok_or_else(|| type_error(item))
                })
                .collect::<Result<Vec<u8>>>()
                .map(Self::from),
            other => Err(type_error(other)),
        }
    }

    /// The key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the key in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy the key into an owned byte vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

fn type_error(value: &JsonValue) -> Error {
    let actual = match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    };
    Error::TypeConstraint {
        expected: "text or a byte sequence",
        actual: actual.to_string(),
    }
}

impl fmt::Debug for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(text) => write!(f, "RowKey({:?})", text),
            Err(_) => write!(f, "RowKey({:02x?})", self.0.as_ref()),
        }
    }
}

impl AsRef<[u8]> for RowKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Bytes> for RowKey {
    fn from(key: Bytes) -> Self {
        Self(key)
    }
}

impl From<Vec<u8>> for RowKey {
    fn from(key: Vec<u8>) -> Self {
        Self(Bytes::from(key))
    }
}

impl From<&[u8]> for RowKey {
    fn from(key: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(key))
    }
}

impl<const N: usize> From<&[u8; N]> for RowKey {
    fn from(key: &[u8; N]) -> Self {
        Self(Bytes::copy_from_slice(key))
    }
}

impl From<String> for RowKey {
    fn from(key: String) -> Self {
        Self(Bytes::from(key.into_bytes()))
    }
}

impl From<&str> for RowKey {
    fn from(key: &str) -> Self {
        Self(Bytes::copy_from_slice(key.as_bytes()))
    }
}

impl From<RowKey> for Vec<u8> {
    fn from(key: RowKey) -> Self {
        key.0.to_vec()
    }
}
