use quote::format_ident;
use serde::Deserialize;
use std::{fs, io, path::Path};
use syn::{Ident, parse_quote};
use thiserror::Error as ThisError;

pub const DEFAULT_KEY_MARKER: &str = "codable_key";
pub const DEFAULT_CONSTRUCTOR: &str = "new";
pub const DEFAULT_SETTER_PREFIX: &str = "with_";
pub const DEFAULT_RUNTIME_PATH: &str = "::classcodable_core";

// identifiers that have no raw form
const NON_RAW_IDENTS: [&str; 4] = ["Self", "crate", "self", "super"];

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io { path: String, source: io::Error },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("config field '{field}' must not be empty")]
    Empty { field: &'static str },

    #[error("config field '{field}' is not a valid identifier: '{value}'")]
    InvalidIdent { field: &'static str, value: String },

    #[error("config field '{field}' is not a valid path: '{value}'")]
    InvalidPath { field: &'static str, value: String },

    #[error("constructor '{constructor}' could clash with setters prefixed '{prefix}'")]
    SetterClash { constructor: String, prefix: String },
}

///
/// GeneratorConfig
///
/// Naming knobs for generated code. Every field has a default, so an empty
/// TOML document is a valid config.
///
/// ```toml
/// key_marker = "codable_key"
/// constructor = "new"
/// setter_prefix = "with_"
/// runtime_path = "::classcodable_core"
/// ```
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Name of the marker that overrides a field's serialized key.
    pub key_marker: String,

    /// Key enum identifier; `None` derives `<Type>CodingKeys` per type.
    pub keys_ident: Option<String>,

    pub constructor: String,

    /// Prepended to field names to name setters. Must be non-empty, and the
    /// constructor must not start with it.
    pub setter_prefix: String,
    pub runtime_path: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            key_marker: DEFAULT_KEY_MARKER.to_string(),
            keys_ident: None,
            constructor: DEFAULT_CONSTRUCTOR.to_string(),
            setter_prefix: DEFAULT_SETTER_PREFIX.to_string(),
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.resolve()?;

        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&text)
    }

    /// Validate every field and parse the ones used as syntax.
    pub(crate) fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        if self.key_marker.is_empty() {
            return Err(ConfigError::Empty {
                field: "key_marker",
            });
        }

        let keys_ident = self
            .keys_ident
            .as_deref()
            .map(|value| parse_ident("keys_ident", value))
            .transpose()?;
        let constructor = parse_ident("constructor", &self.constructor)?;
        let runtime = syn::parse_str::<syn::Path>(&self.runtime_path).map_err(|_| {
            ConfigError::InvalidPath {
                field: "runtime_path",
                value: self.runtime_path.clone(),
            }
        })?;

        self.validate_setter_prefix()?;

        Ok(ResolvedConfig {
            key_marker: self.key_marker.clone(),
            keys_ident,
            constructor,
            setter_prefix: self.setter_prefix.clone(),
            runtime,
        })
    }

    // Setters are `prefix + field name`. The prefix must be a valid identifier
    // start, must not be able to spell an identifier with no raw form, and the
    // constructor must not be a name any setter could take.
    fn validate_setter_prefix(&self) -> Result<(), ConfigError> {
        let prefix = &self.setter_prefix;
        if prefix.is_empty() {
            return Err(ConfigError::Empty {
                field: "setter_prefix",
            });
        }

        let plain = prefix.chars().all(|c| c == '_' || c.is_alphanumeric());
        let spells_non_raw = NON_RAW_IDENTS
            .iter()
            .any(|word| word.starts_with(prefix.as_str()));
        if !plain || spells_non_raw || parse_ident("setter_prefix", &format!("{prefix}x")).is_err()
        {
            return Err(ConfigError::InvalidIdent {
                field: "setter_prefix",
                value: prefix.clone(),
            });
        }

        if self.constructor.starts_with(prefix.as_str()) {
            return Err(ConfigError::SetterClash {
                constructor: self.constructor.clone(),
                prefix: prefix.clone(),
            });
        }

        Ok(())
    }
}

fn parse_ident(field: &'static str, value: &str) -> Result<Ident, ConfigError> {
    syn::parse_str::<Ident>(value).map_err(|_| ConfigError::InvalidIdent {
        field,
        value: value.to_string(),
    })
}

///
/// ResolvedConfig
///

#[derive(Clone, Debug)]
pub(crate) struct ResolvedConfig {
    pub key_marker: String,
    pub keys_ident: Option<Ident>,
    pub constructor: Ident,
    pub setter_prefix: String,
    pub runtime: syn::Path,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            key_marker: DEFAULT_KEY_MARKER.to_string(),
            keys_ident: None,
            constructor: format_ident!("{DEFAULT_CONSTRUCTOR}"),
            setter_prefix: DEFAULT_SETTER_PREFIX.to_string(),
            runtime: parse_quote!(::classcodable_core),
        }
    }
}

///
/// TESTS
///
