//! Opt-in switch for publishing verification results.

use crate::property::PropertyLookup;

/// Property that must be `"true"` (any case) for results to be published.
pub const PUBLISH_RESULTS_PROPERTY: &str = "pact.verifier.publishResults";

/// Answers "should verification results be published?".
///
/// Publishing mutates shared broker state, so anything other than an explicit
/// `"true"` keeps it off. The property is looked up on every call.
#[derive(Clone, Copy)]
pub struct PublishGate<'a> {
    lookup: &'a dyn PropertyLookup,
}

impl<'a> PublishGate<'a> {
    pub fn new(lookup: &'a dyn PropertyLookup) -> Self {
        Self { lookup }
    }

    pub fn is_publishing_disabled(&self) -> bool {
        if !self.lookup.has(PUBLISH_RESULTS_PROPERTY) {
            return true;
        }
        !self
            .lookup
            .get(PUBLISH_RESULTS_PROPERTY)
            .is_some_and(|value| value.to_lowercase() == "true")
    }

    pub fn is_publishing_enabled(&self) -> bool {
        !self.is_publishing_disabled()
    }
}
