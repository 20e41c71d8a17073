use crate::errors::DecodeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

const ADAPTER: &str = "psr mapping";

/// PSR-0 / PSR-4 autoload mapping: namespace prefix to one or more paths
///
/// ```json
/// "psr-4": {
///     "Monolog\\": "src/",
///     "Vendor\\Namespace\\": ["src/", "lib/"]
/// }
/// ```
///
/// Both value forms decode to a list; encoding always writes lists. Any
/// value that is not a string or an array of strings fails the whole map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Psr(pub BTreeMap<String, Vec<String>>);

impl Psr {
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let entries = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(entries) => entries,
            _ => return Err(DecodeError::shape_mismatch(ADAPTER, value)),
        };

        let mut mapping = BTreeMap::new();
        for (prefix, paths) in entries {
            let paths = match paths {
                Value::String(path) => vec![path.clone()],
                Value::Array(items) => items
                    .iter()
                    .map(|item| item.as_str().map(str::to_owned))
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(|| {
                        DecodeError::new(
                            ADAPTER,
                            "non-string array element",
                            entry_fragment(prefix, paths),
                        )
                    })?,
                _ => {
                    return Err(DecodeError::new(
                        ADAPTER,
                        "unsupported value shape",
                        entry_fragment(prefix, paths),
                    ))
                }
            };
            mapping.insert(prefix.clone(), paths);
        }

        Ok(Psr(mapping))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, prefix: &str) -> Option<&[String]> {
        self.0.get(prefix).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(prefix, paths)| (prefix.as_str(), paths.as_slice()))
    }
}

/// `"Prefix\\": value` as it appeared in the source document
fn entry_fragment(prefix: &str, value: &Value) -> String {
    format!("{}: {}", Value::from(prefix), value)
}

impl Serialize for Psr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Psr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        super::deserialize_via_value(deserializer, Psr::from_value)
    }
}
