//! Property lookup strategies.
//!
//! Verification settings are plain string properties. Where they come from
//! depends on the embedding: a standalone verifier reads the process
//! environment ([`SystemProperties`]), a build-tool plugin hands over its own
//! project properties ([`FnPropertyLookup`]), and tests or config files use an
//! in-memory map ([`MapPropertyLookup`]).

use std::{
    collections::BTreeMap,
    fmt,
    path::Path,
};
use thiserror::Error;

/// Read-only access to named string properties.
pub trait PropertyLookup: Send + Sync {
    /// Returns true when the property is set to a non-empty value.
    fn has(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_empty())
    }

    /// Returns the raw property value, if set.
    fn get(&self, name: &str) -> Option<String>;
}

/// Errors raised while loading properties from a file.
#[derive(Debug, Error)]
pub enum PropertyError {
    #[error("failed to read properties file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse properties as TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Maps a dotted property name to its environment variable spelling,
/// e.g. `pact.verifier.publishResults` -> `PACT_VERIFIER_PUBLISHRESULTS`.
pub fn env_var_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Process-wide properties backed by the environment.
///
/// The property name is tried verbatim first, then its
/// [`env_var_name`] spelling.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProperties;

impl PropertyLookup for SystemProperties {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name)
            .ok()
            .or_else(|| std::env::var(env_var_name(name)).ok())
    }
}

/// In-memory properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapPropertyLookup {
    properties: BTreeMap<String, String>,
}

impl MapPropertyLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.properties.remove(name)
    }

    /// Loads properties from a TOML document.
    ///
    /// Nested tables become dotted names, so
    ///
    /// ```toml
    /// [pact.verifier]
    /// publishResults = true
    /// ```
    ///
    /// yields `pact.verifier.publishResults = "true"`.
    pub fn from_toml_str(document: &str) -> Result<Self, PropertyError> {
        let table: toml::Table = document.parse()?;
        let mut lookup = Self::new();
        flatten_toml(&table, None, &mut lookup.properties);
        Ok(lookup)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, PropertyError> {
        let document = std::fs::read_to_string(path)?;
        Self::from_toml_str(&document)
    }
}

impl PropertyLookup for MapPropertyLookup {
    fn get(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapPropertyLookup {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn flatten_toml(table: &toml::Table, prefix: Option<&str>, out: &mut BTreeMap<String, String>) {
    for (key, value) in table {
        let name = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };
        match value {
            toml::Value::Table(nested) => flatten_toml(nested, Some(&name), out),
            toml::Value::String(s) => {
                out.insert(name, s.clone());
            }
            other => {
                out.insert(name, other.to_string());
            }
        }
    }
}

type HasFn = Box<dyn Fn(&str) -> bool + Send + Sync>;
type GetFn = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Properties supplied by the caller as a pair of functions.
///
/// Used when an embedding (a build-tool plugin, for instance) owns the
/// property source and only exposes "is it set" / "what is it" callbacks.
pub struct FnPropertyLookup {
    has: HasFn,
    get: GetFn,
}

impl FnPropertyLookup {
    pub fn new<H, G>(has: H, get: G) -> Self
    where
        H: Fn(&str) -> bool + Send + Sync + 'static,
        G: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            has: Box::new(has),
            get: Box::new(get),
        }
    }

    /// Builds a lookup where "has" means "get returns a non-empty value".
    pub fn from_get<G>(get: G) -> Self
    where
        G: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        let get = std::sync::Arc::new(get);
        let has_get = std::sync::Arc::clone(&get);
        Self::new(
            move |name| (*has_get)(name).is_some_and(|value| !value.is_empty()),
            move |name| (*get)(name),
        )
    }

    /// Replaces the "has" function.
    pub fn set_has<H>(&mut self, has: H)
    where
        H: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.has = Box::new(has);
    }

    /// Replaces the "get" function.
    pub fn set_get<G>(&mut self, get: G)
    where
        G: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.get = Box::new(get);
    }
}

impl fmt::Debug for FnPropertyLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPropertyLookup").finish_non_exhaustive()
    }
}

impl PropertyLookup for FnPropertyLookup {
    fn has(&self, name: &str) -> bool {
        (self.has)(name)
    }

    fn get(&self, name: &str) -> Option<String> {
        (self.get)(name)
    }
}
