//! Typed layout of a `composer.json` document
//!
//! Field names follow https://getcomposer.org/schema.json. Every field is
//! optional on the wire: an absent field decodes to the zero value, and zero
//! values are left out when encoding. Fields with several accepted shapes use
//! the adapters in [`crate::flexible`]; boolean fields reject `null`.

use crate::errors::DecodeError;
use crate::flexible::{Bool, BoolOrString, IntString, Psr, Repositories, StringOrStrings, ValueOrMap};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

// =============================================================================
// MANIFEST - Root document
// =============================================================================

/// Root of a `composer.json` manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Manifest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub package_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_dir: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub homepage: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub readme: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub time: Vec<String>,
    #[serde(skip_serializing_if = "StringOrStrings::is_empty")]
    pub license: StringOrStrings,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Author>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub require: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub replace: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub conflict: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub provide: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub require_dev: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub suggest: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Config::is_empty")]
    pub config: Config,
    #[serde(skip_serializing_if = "Autoload::is_empty")]
    pub autoload: Autoload,
    #[serde(skip_serializing_if = "Autoload::is_empty")]
    pub autoload_dev: Autoload,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub archive: BTreeMap<String, ValueOrMap>,
    #[serde(skip_serializing_if = "Repositories::is_empty")]
    pub repositories: Repositories,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub minimum_stability: String,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub prefer_stable: Bool,
    #[serde(skip_serializing_if = "StringOrStrings::is_empty")]
    pub bin: StringOrStrings,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include_path: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub scripts: BTreeMap<String, StringOrStrings>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub scripts_descriptions: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub support: Vec<Support>,
    #[serde(skip_serializing_if = "Funding::is_empty")]
    pub funding: Funding,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub non_feature_branches: Vec<String>,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub default_branch: Bool,
    #[serde(skip_serializing_if = "BoolOrString::is_empty")]
    pub abandoned: BoolOrString,
    #[serde(rename = "_comment", skip_serializing_if = "StringOrStrings::is_empty")]
    pub comment: StringOrStrings,

    /// Free-form `extra` section, kept verbatim and not interpreted
    #[serde(skip_serializing_if = "Value::is_null")]
    pub extra: Value,
}

// =============================================================================
// PLAIN RECORDS
// =============================================================================

/// Entry of `authors`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub homepage: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub role: String,
}

/// Entry of `support`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Support {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub issues: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub wiki: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub irc: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub docs: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rss: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub chat: String,
}

/// `funding` record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Funding {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub funding_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl Funding {
    pub fn is_empty(&self) -> bool {
        self.funding_type.is_empty() && self.url.is_empty()
    }
}

/// One `http-basic` credential, keyed by domain in [`Config::http_basic`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpBasicCredentials {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
}

// =============================================================================
// CONFIG
// =============================================================================

/// `config` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    #[serde(skip_serializing_if = "is_zero")]
    pub process_timeout: u64,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub use_include_path: Bool,
    #[serde(skip_serializing_if = "ValueOrMap::is_empty")]
    pub preferred_install: ValueOrMap,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub notify_on_install: Bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub github_protocols: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub github_oauth: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub gitlab_oauth: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub gitlab_token: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub bearer: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub disable_tls: Bool,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub secure_http: Bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cafile: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub capath: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub http_basic: BTreeMap<String, HttpBasicCredentials>,
    #[serde(skip_serializing_if = "BoolOrString::is_empty")]
    pub store_auths: BoolOrString,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub platform: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vendor_dir: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bin_dir: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub data_dir: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cache_dir: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cache_files_dir: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cache_repo_dir: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cache_vcs_dir: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub cache_ttl: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub cache_files_ttl: u64,
    #[serde(skip_serializing_if = "IntString::is_empty")]
    pub cache_files_maxsize: IntString,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub cache_read_only: Bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bin_compat: String,
    #[serde(skip_serializing_if = "BoolOrString::is_empty")]
    pub discard_changes: BoolOrString,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub autoloader_suffix: String,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub optimize_autoloader: Bool,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub prepend_autoloader: Bool,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub classmap_authoritative: Bool,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub apcu_autoloader: Bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub github_domains: Vec<String>,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub github_expose_hostname: Bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gitlab_domains: Vec<String>,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub use_github_api: Bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub archive_format: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub archive_dir: String,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub htaccess_protect: Bool,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub sort_packages: Bool,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub lock: Bool,
    #[serde(skip_serializing_if = "BoolOrString::is_empty")]
    pub platform_check: BoolOrString,
}

impl Config {
    pub fn is_empty(&self) -> bool {
        *self == Config::default()
    }
}

// =============================================================================
// AUTOLOAD
// =============================================================================

/// `autoload` / `autoload-dev` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Autoload {
    #[serde(rename = "psr-0", skip_serializing_if = "Psr::is_empty")]
    pub psr0: Psr,
    #[serde(rename = "psr-4", skip_serializing_if = "Psr::is_empty")]
    pub psr4: Psr,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classmap: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_from_classmap: Vec<String>,
}

impl Autoload {
    pub fn is_empty(&self) -> bool {
        self.psr0.is_empty()
            && self.psr4.is_empty()
            && self.classmap.is_empty()
            && self.files.is_empty()
            && self.exclude_from_classmap.is_empty()
    }
}

// =============================================================================
// REPOSITORY
// =============================================================================

/// One entry of `repositories`
///
/// The VCS path settings (`trunk-path` and friends) are optional so that an
/// explicit `false` survives a round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Repository {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub repo_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub canonical: Bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub only: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, Value>,
    #[serde(rename = "allow_ssl_downgrade", skip_serializing_if = "Bool::is_false")]
    pub allow_ssl_downgrade: Bool,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub force_lazy_providers: Bool,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub no_api: Bool,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub secure_http: Bool,
    #[serde(skip_serializing_if = "Bool::is_false")]
    pub svn_cache_credentials: Bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trunk_path: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches_path: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_path: Option<BoolOrString>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub package_path: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub depot: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub branch: String,
    #[serde(rename = "unique_perforce_client_name", skip_serializing_if = "String::is_empty")]
    pub unique_perforce_client_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub p4user: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub p4password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vendor_alias: String,
    /// Inline package definitions are not modelled; see [`InlinePackage`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<InlinePackage>,
}

/// Placeholder for the `package` key of a `"type": "package"` repository
///
/// Has no values: decoding a non-null `package` fails with a [`DecodeError`]
/// instead of dropping or misreading the definition, so `package` is always
/// `None` on a decoded [`Repository`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlinePackage {}

impl Serialize for InlinePackage {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        match *self {}
    }
}

impl<'de> Deserialize<'de> for InlinePackage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Err(de::Error::custom(DecodeError::new(
            "repository",
            "inline package definitions are not supported",
            value.to_string(),
        )))
    }
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}
