//! Manifest operations - parsing, rendering, loading and saving
//!
//! This module provides the document-level entry points: text and value
//! conversions, file I/O with atomic writes, manifest file location, and
//! parallel loading of many manifests.

use crate::errors::ManifestError;
use crate::types::Manifest;
use rayon::prelude::*;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable Composer reads to override the manifest file name
pub const COMPOSER_ENV: &str = "COMPOSER";

/// Manifest file name used when `COMPOSER` is unset
pub const DEFAULT_FILE_NAME: &str = "composer.json";

impl Manifest {
    /// Name of the manifest file, honouring the `COMPOSER` override
    pub fn file_name() -> String {
        Self::file_name_from(std::env::var(COMPOSER_ENV).ok())
    }

    /// Manifest file name for an explicit override; blank overrides are ignored
    pub fn file_name_from(name: Option<String>) -> String {
        name.filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string())
    }

    /// Path of the manifest file inside a project directory
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(Self::file_name())
    }

    /// Parse and decode manifest text
    pub fn from_json_str(content: &str) -> Result<Self, ManifestError> {
        debug!("Decoding manifest from {} bytes of text", content.len());
        Ok(serde_json::from_str(content)?)
    }

    /// Parse and decode manifest bytes
    pub fn from_json_slice(content: &[u8]) -> Result<Self, ManifestError> {
        debug!("Decoding manifest from {} bytes", content.len());
        Ok(serde_json::from_slice(content)?)
    }

    /// Decode an already-parsed value tree
    pub fn from_value(value: Value) -> Result<Self, ManifestError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Encode into a generic value tree
    pub fn to_value(&self) -> Result<Value, ManifestError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Render as pretty JSON with four-space indentation and a trailing newline
    pub fn to_json_string(&self) -> Result<String, ManifestError> {
        let mut buffer = Vec::with_capacity(4 * 1024);
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        buffer.push(b'\n');

        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }

    /// Load and decode a manifest file
    pub fn load_from_path(path: &Path) -> Result<Self, ManifestError> {
        debug!("Reading manifest from: {:?}", path);

        let content = std::fs::read(path)?;
        let manifest = Self::from_json_slice(&content)?;

        info!("Manifest loaded successfully from: {:?}", path);
        Ok(manifest)
    }

    /// Save manifest to a specific path with atomic write
    pub fn save_to_path(&self, path: &Path) -> Result<(), ManifestError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = self.to_json_string()?;
        debug!("Writing {} bytes of manifest to: {:?}", content.len(), path);

        // Atomic write: write to temp file then rename
        let temp_path = path.with_extension("json.tmp");
        let written = write_file(&temp_path, content.as_bytes())
            .and_then(|()| std::fs::rename(&temp_path, path));
        if let Err(err) = written {
            if let Err(cleanup) = std::fs::remove_file(&temp_path) {
                debug!("Could not remove temp file {:?}: {}", temp_path, cleanup);
            }
            return Err(err.into());
        }
        info!("Manifest written successfully to: {:?}", path);
        Ok(())
    }

    /// Whether the package is marked abandoned, with or without a replacement
    pub fn is_abandoned(&self) -> bool {
        !self.abandoned.is_empty()
    }

    /// Package suggested as replacement for an abandoned package
    pub fn replacement_package(&self) -> Option<&str> {
        self.abandoned.as_str()
    }
}

fn write_file(path: &Path, content: &[u8]) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = io::BufWriter::with_capacity(64 * 1024, file);
    writer.write_all(content)?;
    writer.flush()
}

/// Load many manifests in parallel
///
/// Each path is decoded independently; results come back in input order.
pub fn load_all(paths: &[PathBuf]) -> Vec<Result<Manifest, ManifestError>> {
    paths
        .par_iter()
        .map(|path| {
            let result = Manifest::load_from_path(path);
            if let Err(err) = &result {
                warn!("Failed to load manifest {:?}: {}", path, err);
            }
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flexible::{BoolOrString, StringOrStrings};
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
    "name": "acme/widget",
    "license": "MIT",
    "require": {
        "php": ">=8.1"
    }
}"#;

    #[test]
    fn test_from_json_str() {
        let manifest = Manifest::from_json_str(SAMPLE);
        assert!(manifest.is_ok_and(|m| m.name == "acme/widget"
            && m.license == StringOrStrings::from("MIT")
            && m.require.get("php").map(String::as_str) == Some(">=8.1")));
    }

    #[test]
    fn test_from_json_str_reports_bad_field() {
        let err = Manifest::from_json_str(r#"{"license": 12345}"#);
        assert!(err.is_err_and(|e| matches!(e, ManifestError::Json(_))
            && e.to_string().contains("12345")));
    }

    #[test]
    fn test_to_json_string_layout() {
        let manifest = Manifest::from_json_str(SAMPLE).unwrap_or_default();
        let expected = "{\n    \"name\": \"acme/widget\",\n    \"license\": [\n        \"MIT\"\n    ],\n    \"require\": {\n        \"php\": \">=8.1\"\n    }\n}\n";
        assert_eq!(manifest.to_json_string().ok().as_deref(), Some(expected));
    }

    #[test]
    fn test_value_round_trip() {
        let manifest = Manifest::from_json_str(SAMPLE).unwrap_or_default();
        let value = manifest.to_value();
        assert!(value.is_ok());
        let decoded = Manifest::from_value(value.unwrap_or_default());
        assert!(decoded.is_ok_and(|m| m == manifest));
    }

    #[test]
    fn test_save_and_load() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let manifest_path = temp_dir.path().join("nested").join("composer.json");

        let manifest = Manifest {
            name: "acme/widget".to_string(),
            abandoned: BoolOrString::from("acme/gadget"),
            ..Default::default()
        };

        assert!(
            manifest.save_to_path(&manifest_path).is_ok(),
            "Failed to write manifest"
        );
        assert!(!manifest_path.with_extension("json.tmp").exists());

        let loaded = Manifest::load_from_path(&manifest_path);
        assert!(loaded.is_ok(), "Failed to read manifest");
        let loaded = loaded.unwrap_or_default();
        assert_eq!(loaded, manifest);
        assert!(loaded.is_abandoned());
        assert_eq!(loaded.replacement_package(), Some("acme/gadget"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let result = Manifest::load_from_path(&temp_dir.path().join("composer.json"));
        assert!(result.is_err_and(|e| matches!(e, ManifestError::Io(_))));
    }

    #[test]
    fn test_load_all_keeps_input_order() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let good = temp_dir.path().join("good.json");
        let bad = temp_dir.path().join("bad.json");
        assert!(std::fs::write(&good, SAMPLE).is_ok());
        assert!(std::fs::write(&bad, r#"{"prefer-stable": "maybe"}"#).is_ok());

        let results = load_all(&[good, bad, temp_dir.path().join("missing.json")]);
        assert_eq!(results.len(), 3);
        assert!(results[0].as_ref().is_ok_and(|m| m.name == "acme/widget"));
        assert!(results[1].is_err());
        assert!(results[2].is_err());
    }

    #[test]
    fn test_file_name_override() {
        assert_eq!(Manifest::file_name_from(None), DEFAULT_FILE_NAME);
        assert_eq!(
            Manifest::file_name_from(Some("composer-dev.json".to_string())),
            "composer-dev.json"
        );
        assert_eq!(Manifest::file_name_from(Some("  ".to_string())), DEFAULT_FILE_NAME);
        assert_eq!(Manifest::file_name_from(Some(String::new())), DEFAULT_FILE_NAME);
    }

    #[test]
    fn test_path_in_joins_file_name() {
        assert_eq!(
            Manifest::path_in(Path::new("project")),
            Path::new("project").join(Manifest::file_name())
        );
    }

    #[test]
    fn test_failed_save_leaves_no_temp_file() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        // A directory at the target path makes the final rename fail
        let manifest_path = temp_dir.path().join("composer.json");
        assert!(std::fs::create_dir(&manifest_path).is_ok());
        assert!(std::fs::write(manifest_path.join("keep"), "x").is_ok());

        let manifest = Manifest {
            name: "acme/widget".to_string(),
            ..Default::default()
        };
        let result = manifest.save_to_path(&manifest_path);
        assert!(result.is_err_and(|e| matches!(e, ManifestError::Io(_))));
        assert!(!manifest_path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_abandoned_flag_without_replacement() {
        let manifest = Manifest {
            abandoned: BoolOrString::Bool(true),
            ..Default::default()
        };
        assert!(manifest.is_abandoned());
        assert_eq!(manifest.replacement_package(), None);
        assert!(!Manifest::default().is_abandoned());
    }
}
