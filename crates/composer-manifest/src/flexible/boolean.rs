use crate::errors::DecodeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

const ADAPTER: &str = "bool";

/// Boolean that also accepts the textual and numeric spellings found in the wild
///
/// Accepted (case-sensitive): `true`, `"true"`, `"True"`, `1`, `"1"` and the
/// matching false forms. Always written back as a plain JSON boolean, so the
/// original spelling is not preserved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bool(pub bool);

impl Bool {
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let parsed = match value {
            Value::Bool(flag) => Some(*flag),
            Value::Number(number) => parse_token(&number.to_string()),
            Value::String(token) => parse_token(token),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        };

        parsed.map(Bool).ok_or_else(|| {
            DecodeError::new(ADAPTER, "unrecognized boolean literal", value.to_string())
        })
    }

    pub fn get(self) -> bool {
        self.0
    }

    pub fn is_false(&self) -> bool {
        !self.0
    }
}

fn parse_token(token: &str) -> Option<bool> {
    match token {
        "true" | "True" | "1" => Some(true),
        "false" | "False" | "0" => Some(false),
        _ => None,
    }
}

impl From<bool> for Bool {
    fn from(flag: bool) -> Self {
        Bool(flag)
    }
}

impl From<Bool> for bool {
    fn from(flag: Bool) -> Self {
        flag.0
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.0)
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        super::deserialize_via_value(deserializer, Bool::from_value)
    }
}
