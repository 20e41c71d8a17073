use super::Bool;
use crate::errors::DecodeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

const ADAPTER: &str = "bool or string";

/// A flag that may instead carry a keyword, e.g. `"discard-changes": "stash"`
/// or `"abandoned": "vendor/replacement"`.
///
/// Decoding tries [`Bool`] first, so `"1"` and `"False"` are booleans, and
/// only then takes any other string verbatim. An empty string means no
/// string was chosen: it encodes as `false`, and `""` or `null` on the wire
/// decode to `Bool(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BoolOrString {
    Bool(bool),
    String(String),
}

impl Default for BoolOrString {
    fn default() -> Self {
        BoolOrString::Bool(false)
    }
}

impl BoolOrString {
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        if let Ok(flag) = Bool::from_value(value) {
            return Ok(BoolOrString::Bool(flag.get()));
        }

        match value {
            Value::Null => Ok(Self::default()),
            Value::String(text) if text.is_empty() => Ok(Self::default()),
            Value::String(text) => Ok(BoolOrString::String(text.clone())),
            _ => Err(DecodeError::shape_mismatch(ADAPTER, value)),
        }
    }

    /// Whether this encodes as `false`
    pub fn is_empty(&self) -> bool {
        match self {
            BoolOrString::Bool(flag) => !flag,
            BoolOrString::String(text) => text.is_empty(),
        }
    }

    /// Non-empty string payload, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            BoolOrString::String(text) if !text.is_empty() => Some(text.as_str()),
            _ => None,
        }
    }
}

impl From<bool> for BoolOrString {
    fn from(flag: bool) -> Self {
        BoolOrString::Bool(flag)
    }
}

impl From<&str> for BoolOrString {
    fn from(text: &str) -> Self {
        BoolOrString::String(text.to_string())
    }
}

impl Serialize for BoolOrString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BoolOrString::String(text) if !text.is_empty() => serializer.serialize_str(text),
            BoolOrString::String(_) => Bool(false).serialize(serializer),
            BoolOrString::Bool(flag) => Bool(*flag).serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for BoolOrString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        super::deserialize_via_value(deserializer, BoolOrString::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_boolean_spellings_win_over_string() {
        let cases = [
            (json!(true), true),
            (json!("True"), true),
            (json!(1), true),
            (json!("1"), true),
            (json!(false), false),
            (json!("False"), false),
            (json!(0), false),
            (json!("0"), false),
        ];
        for (wire, expected) in cases {
            assert_eq!(
                BoolOrString::from_value(&wire),
                Ok(BoolOrString::Bool(expected)),
                "wire {wire}"
            );
        }
    }

    #[test]
    fn test_other_strings_are_kept() {
        assert_eq!(
            BoolOrString::from_value(&json!("prompt")),
            Ok(BoolOrString::String("prompt".to_string()))
        );
    }

    #[test]
    fn test_rejects_arrays() {
        let err = BoolOrString::from_value(&json!(["error"]));
        assert!(err.is_err_and(|e| e.adapter == ADAPTER && e.fragment == "[\"error\"]"));
    }

    #[test]
    fn test_encode_prefers_non_empty_string() {
        let encode = |v: &BoolOrString| serde_json::to_string(v).ok();
        assert_eq!(encode(&BoolOrString::Bool(true)).as_deref(), Some("true"));
        assert_eq!(encode(&BoolOrString::Bool(false)).as_deref(), Some("false"));
        assert_eq!(encode(&BoolOrString::from("prompt")).as_deref(), Some("\"prompt\""));
        assert_eq!(encode(&BoolOrString::from("")).as_deref(), Some("false"));
    }

    #[test]
    fn test_empty_string_and_null_decode_as_false() {
        assert_eq!(BoolOrString::from_value(&json!("")), Ok(BoolOrString::Bool(false)));
        assert_eq!(BoolOrString::from_value(&Value::Null), Ok(BoolOrString::Bool(false)));
    }

    #[test]
    fn test_canonical_round_trip() {
        for wire in [json!(""), json!("stash"), json!("True"), json!(0)] {
            let decoded = BoolOrString::from_value(&wire);
            let reencoded = decoded
                .clone()
                .ok()
                .and_then(|v| serde_json::to_value(v).ok())
                .map(|v| BoolOrString::from_value(&v));
            assert_eq!(reencoded, Some(decoded), "wire {wire}");
        }
    }

    #[test]
    fn test_empty_string_payload_reads_unset() {
        let value = BoolOrString::from("");
        assert!(value.is_empty());
        assert_eq!(value.as_str(), None);
    }
}
