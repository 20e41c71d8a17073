//! Adapters for manifest fields with more than one accepted wire shape
//!
//! Composer tolerates several spellings for many fields: a license may be a
//! string or a list, a boolean may arrive as `"1"`, a repository list may be
//! keyed by name. Each adapter here decodes every accepted shape into one
//! canonical in-memory form and always encodes that form back out.
//!
//! Decoding buffers the input into a [`serde_json::Value`] and tries the
//! accepted shapes in order; the first match wins. A wire `null` decodes to
//! the adapter's zero value, except for [`Bool`], which rejects it, and
//! [`IntString`], which keeps it as the text `null`.

pub mod bool_or_string;
pub mod boolean;
pub mod int_string;
pub mod psr;
pub mod repositories;
pub mod string_or_strings;
pub mod value_or_map;

pub use bool_or_string::BoolOrString;
pub use boolean::Bool;
pub use int_string::IntString;
pub use psr::Psr;
pub use repositories::Repositories;
pub use string_or_strings::StringOrStrings;
pub use value_or_map::ValueOrMap;

use crate::errors::DecodeError;
use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

/// Buffer any self-describing input into a generic value and run `decode` on it.
pub(crate) fn deserialize_via_value<'de, D, T>(
    deserializer: D,
    decode: fn(&Value) -> Result<T, DecodeError>,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    decode(&value).map_err(de::Error::custom)
}
