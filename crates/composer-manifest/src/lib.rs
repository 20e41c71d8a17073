//! Composer Manifest Bindings
//!
//! This crate decodes `composer.json` documents into strongly-typed structs and
//! encodes them back. It is meant for tools that read or edit manifests
//! (resolvers, linters, editors) without re-deriving the many alternative
//! shapes Composer accepts for the same field.
//!
//! The flexible fields are handled by the adapters in [`flexible`]; the
//! document layout lives in [`types`] and document-level operations in
//! [`manifest`].

pub mod errors;
pub mod flexible;
pub mod manifest;
pub mod types;

pub use flexible::{Bool, BoolOrString, IntString, Psr, Repositories, StringOrStrings, ValueOrMap};
pub use types::{
    Author, Autoload, Config, Funding, HttpBasicCredentials, InlinePackage, Manifest, Repository,
    Support,
};

pub use errors::{DecodeError, ManifestError};

// Re-export batch loading for convenience
pub use manifest::load_all;
