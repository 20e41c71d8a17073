use crate::errors::DecodeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

const ADAPTER: &str = "value or map";

/// A single string or a string-to-string map
///
/// Used by `preferred-install`, which is either one of `source`, `dist`,
/// `auto` or a map of package pattern to preference.
///
/// An empty [`ValueOrMap::Value`] encodes as the (empty) map, `{}`, and a
/// wire `""` decodes to the empty map.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueOrMap {
    Value(String),
    Map(BTreeMap<String, String>),
}

impl Default for ValueOrMap {
    fn default() -> Self {
        ValueOrMap::Map(BTreeMap::new())
    }
}

impl ValueOrMap {
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::String(scalar) if scalar.is_empty() => Ok(Self::default()),
            Value::String(scalar) => Ok(ValueOrMap::Value(scalar.clone())),
            Value::Object(entries) => entries
                .iter()
                .map(|(key, entry)| entry.as_str().map(|s| (key.clone(), s.to_owned())))
                .collect::<Option<BTreeMap<_, _>>>()
                .map(ValueOrMap::Map)
                .ok_or_else(|| DecodeError::shape_mismatch(ADAPTER, value)),
            _ => Err(DecodeError::shape_mismatch(ADAPTER, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ValueOrMap::Value(scalar) => scalar.is_empty(),
            ValueOrMap::Map(map) => map.is_empty(),
        }
    }

    /// Scalar payload when one is set
    pub fn as_value(&self) -> Option<&str> {
        match self {
            ValueOrMap::Value(scalar) if !scalar.is_empty() => Some(scalar.as_str()),
            _ => None,
        }
    }

    /// Lookup in the map form; always `None` for the scalar form
    pub fn get(&self, key: &str) -> Option<&str> {
        match self {
            ValueOrMap::Map(map) => map.get(key).map(String::as_str),
            ValueOrMap::Value(_) => None,
        }
    }
}

impl From<&str> for ValueOrMap {
    fn from(scalar: &str) -> Self {
        ValueOrMap::Value(scalar.to_string())
    }
}

impl Serialize for ValueOrMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ValueOrMap::Value(scalar) if !scalar.is_empty() => serializer.serialize_str(scalar),
            ValueOrMap::Value(_) => BTreeMap::<String, String>::new().serialize(serializer),
            ValueOrMap::Map(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ValueOrMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        super::deserialize_via_value(deserializer, ValueOrMap::from_value)
    }
}
