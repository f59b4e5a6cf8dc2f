use crate::source::PactSource;
use serde::{
    Deserialize,
    Serialize,
};
use std::fmt;

/// The consumer side of a pact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Consumer {
    pub name: String,
}

impl Consumer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Consumer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The provider side of a pact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
}

impl Provider {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A pact that has been (or is about to be) verified.
///
/// Interactions are not carried here; the verification engine owns them. Only
/// the identity of the pact and its provenance matter when reporting results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pact {
    pub consumer: Consumer,
    pub provider: Provider,
    #[serde(default)]
    pub source: PactSource,
}

impl Pact {
    pub fn new(consumer: impl Into<String>, provider: impl Into<String>, source: PactSource) -> Self {
        Self {
            consumer: Consumer::new(consumer),
            provider: Provider::new(provider),
            source,
        }
    }

    /// Returns true when the pact was fetched from a pact broker.
    pub fn is_from_broker(&self) -> bool {
        matches!(self.source, PactSource::BrokerUrl(_))
    }
}

impl fmt::Display for Pact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pact between {} and {}", self.consumer, self.provider)
    }
}
