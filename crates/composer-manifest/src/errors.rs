use serde_json::Value;
use std::borrow::Cow;
use std::io;
use thiserror::Error;

/// A wire value that none of an adapter's accepted shapes could decode.
///
/// `fragment` is the offending JSON text, verbatim, so a manifest author can
/// find the key in their document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot decode {adapter}: {problem} in {fragment}")]
pub struct DecodeError {
    pub adapter: &'static str,
    pub problem: Cow<'static, str>,
    pub fragment: String,
}

impl DecodeError {
    pub fn new(
        adapter: &'static str,
        problem: impl Into<Cow<'static, str>>,
        fragment: impl Into<String>,
    ) -> Self {
        DecodeError {
            adapter,
            problem: problem.into(),
            fragment: fragment.into(),
        }
    }

    /// None of the adapter's shapes matched the value.
    pub fn shape_mismatch(adapter: &'static str, value: &Value) -> Self {
        Self::new(adapter, "shape mismatch", value.to_string())
    }
}

/// Errors that can occur during manifest document operations
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to process manifest JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
