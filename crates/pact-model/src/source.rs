//! Provenance of a pact.
//!
//! Only [`PactSource::BrokerUrl`] carries what is needed to publish
//! verification results back; every other variant is a dead end for
//! publishing.

use crate::attributes::PactAttributes;
use serde::{
    Deserialize,
    Serialize,
};
use std::{
    collections::BTreeMap,
    fmt,
    path::PathBuf,
};

/// Where a pact was loaded from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PactSource {
    /// A single pact file on disk.
    File { path: PathBuf },
    /// A directory of pact files.
    Directory { path: PathBuf },
    /// A plain URL that is not a pact broker.
    Url { url: String },
    /// A pact fetched from a pact broker.
    BrokerUrl(BrokerUrlSource),
    /// Provenance was not recorded.
    #[default]
    Unknown,
}

impl PactSource {
    /// Returns the broker details when the pact came from a broker.
    pub fn as_broker_url(&self) -> Option<&BrokerUrlSource> {
        match self {
            PactSource::BrokerUrl(source) => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for PactSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PactSource::File { path } => write!(f, "FileSource({})", path.display()),
            PactSource::Directory { path } => write!(f, "DirectorySource({})", path.display()),
            PactSource::Url { url } => write!(f, "UrlSource({url})"),
            PactSource::BrokerUrl(source) => source.fmt(f),
            PactSource::Unknown => f.write_str("UnknownPactSource"),
        }
    }
}

/// A pact fetched from a pact broker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerUrlSource {
    /// URL the pact document was fetched from.
    pub url: String,
    /// Base URL of the broker.
    pub pact_broker_url: String,
    /// Links attached to the pact document by the broker.
    #[serde(default)]
    pub attributes: PactAttributes,
    /// Transport options for talking to the broker (credentials and the like).
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl BrokerUrlSource {
    pub fn new(url: impl Into<String>, pact_broker_url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            pact_broker_url: pact_broker_url.into(),
            attributes: PactAttributes::default(),
            options: BTreeMap::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: PactAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for BrokerUrlSource {
    // Options may hold credentials, so only the URLs are rendered.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BrokerUrlSource(url={}, pactBrokerUrl={})",
            self.url, self.pact_broker_url
        )
    }
}
