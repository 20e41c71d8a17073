use crate::errors::DecodeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// An integer or a size-with-unit string, held as text
///
/// `300`, `"300"` and `"300MiB"` are all valid `cache-files-maxsize` values.
/// Decoding takes the token's JSON text with every `"` removed and never
/// fails. Numbers keep their digits as written, so `1.50` stays `1.50`.
/// Encoding always writes a JSON string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntString(pub String);

impl IntString {
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        Ok(IntString(value.to_string().replace('"', "")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for IntString {
    fn from(text: &str) -> Self {
        IntString(text.to_string())
    }
}

impl fmt::Display for IntString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for IntString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for IntString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        super::deserialize_via_value(deserializer, IntString::from_value)
    }
}
