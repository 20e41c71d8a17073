use crate::errors::DecodeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use smallvec::{smallvec, SmallVec};

const ADAPTER: &str = "string or strings";

/// A string or an array of strings, held as a list
///
/// `"license": "MIT"` and `"license": ["MIT"]` decode to the same value.
/// Encoding always produces an array, even for one element, so writers get
/// one predictable shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StringOrStrings(pub SmallVec<[String; 1]>);

impl StringOrStrings {
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::String(single) => Ok(StringOrStrings(smallvec![single.clone()])),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_owned))
                .collect::<Option<SmallVec<_>>>()
                .map(StringOrStrings)
                .ok_or_else(|| DecodeError::shape_mismatch(ADAPTER, value)),
            _ => Err(DecodeError::shape_mismatch(ADAPTER, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for StringOrStrings {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        StringOrStrings(iter.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for StringOrStrings {
    fn from(single: &str) -> Self {
        StringOrStrings(smallvec![single.to_string()])
    }
}

impl Serialize for StringOrStrings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for StringOrStrings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        super::deserialize_via_value(deserializer, StringOrStrings::from_value)
    }
}
