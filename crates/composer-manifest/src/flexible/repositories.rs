use crate::errors::DecodeError;
use crate::types::Repository;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

const ADAPTER: &str = "repositories";

/// Repository list, given either as an array or as an object keyed by name
///
/// ```json
/// "repositories": [{"type": "composer", "url": "https://composer.example.com/"}]
/// "repositories": {"example": {"type": "composer", "url": "https://composer.example.com/"}}
/// ```
///
/// Object keys are discarded. The order of entries decoded from the object
/// form is whatever the generic object yields and must not be relied on.
/// Encoding always writes an array in stored order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Repositories(pub Vec<Repository>);

impl Repositories {
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Array(entries) => entries.iter().map(decode_entry).collect::<Result<_, _>>().map(Repositories),
            Value::Object(entries) => {
                debug!(
                    "Repositories given as an object; discarding {} keys",
                    entries.len()
                );
                entries
                    .values()
                    .map(decode_entry)
                    .collect::<Result<_, _>>()
                    .map(Repositories)
            }
            _ => Err(DecodeError::shape_mismatch(ADAPTER, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Repository> {
        self.0.iter()
    }
}

fn decode_entry(entry: &Value) -> Result<Repository, DecodeError> {
    Repository::deserialize(entry).map_err(|err| {
        DecodeError::new(
            ADAPTER,
            format!("invalid repository entry ({err})"),
            entry.to_string(),
        )
    })
}

impl Serialize for Repositories {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for Repositories {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        super::deserialize_via_value(deserializer, Repositories::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flexible::BoolOrString;
    use serde_json::json;

    fn repository(repo_type: &str) -> Repository {
        Repository {
            repo_type: repo_type.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_array_form_keeps_order() {
        let decoded = Repositories::from_value(&json!([
            {"type": "vcs", "url": "https://git.acme.test/widget"},
            {"type": "path", "url": "../gadget"}
        ]));
        assert!(decoded.is_ok_and(|r| r.iter().map(|e| e.repo_type.as_str()).eq(["vcs", "path"])));
    }

    #[test]
    fn test_array_and_object_forms_agree() {
        let from_array = Repositories::from_value(&json!([{"type": "test"}]));
        let from_object = Repositories::from_value(&json!({"1": {"type": "test"}}));
        assert_eq!(from_array, Ok(Repositories(vec![repository("test")])));
        assert_eq!(from_object, Ok(Repositories(vec![repository("test")])));
    }

    #[test]
    fn test_object_form_content_regardless_of_order() {
        let decoded = Repositories::from_value(&json!({
            "private": {"type": "composer", "url": "https://repo.acme.test"},
            "packagist.org": false,
            "local": {"type": "path", "url": "../lib"}
        }));
        // `false` is how Composer disables packagist; it is not an entry we model
        assert!(decoded.is_err());

        let decoded = Repositories::from_value(&json!({
            "private": {"type": "composer", "url": "https://repo.acme.test"},
            "local": {"type": "path", "url": "../lib"}
        }));
        let mut types: Vec<String> = decoded
            .map(|r| r.0.into_iter().map(|e| e.repo_type).collect())
            .unwrap_or_default();
        types.sort();
        assert_eq!(types, ["composer", "path"]);
    }

    #[test]
    fn test_other_shapes_fail() {
        let err = Repositories::from_value(&json!("Nothing"));
        assert!(err.is_err_and(|e| e.problem == "shape mismatch" && e.fragment == "\"Nothing\""));
        assert!(Repositories::from_value(&json!(12)).is_err());
    }

    #[test]
    fn test_invalid_entry_is_reported_with_its_text() {
        let err = Repositories::from_value(&json!([{"type": "vcs", "canonical": "maybe"}]));
        assert!(err.is_err_and(|e| e.problem.starts_with("invalid repository entry")
            && e.problem.contains("\"maybe\"")
            && e.fragment.contains("\"canonical\":\"maybe\"")));
    }

    #[test]
    fn test_encode_is_always_an_array() {
        let one = Repositories(vec![repository("test")]);
        assert_eq!(
            serde_json::to_string(&one).ok().as_deref(),
            Some("[{\"type\":\"test\"}]")
        );
        assert_eq!(
            serde_json::to_string(&Repositories::default()).ok().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_object_form_round_trips_through_array() {
        let decoded = Repositories::from_value(&json!({
            "svn": {"type": "svn", "url": "https://svn.acme.test", "tags-path": "releases"}
        }));
        let reencoded = decoded.ok().and_then(|r| serde_json::to_value(&r).ok());
        assert_eq!(
            reencoded,
            Some(json!([{"type": "svn", "url": "https://svn.acme.test", "tags-path": "releases"}]))
        );

        let redecoded = reencoded.as_ref().map(Repositories::from_value);
        assert!(redecoded.is_some_and(|r| r.is_ok_and(|r| r.0[0].tags_path
            == Some(BoolOrString::from("releases")))));
    }
}
