use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;
use std::collections::BTreeMap;

/// HAL relation the broker uses to advertise where verification results for a
/// pact should be POSTed.
pub const PUBLISH_VERIFICATION_RESULTS_LINK: &str = "pb:publish-verification-results";

/// Links the broker attached to a pact document, keyed by relation name.
///
/// Each value is normally a HAL link object (`{"href": "...", "title": "..."}`)
/// but arrays and other shapes are kept verbatim so nothing is lost when the
/// attributes are handed back to the broker client.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PactAttributes(BTreeMap<String, Value>);

impl PactAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds attributes from a broker pact document, reading its `_links`.
    pub fn from_pact_document(document: &Value) -> Self {
        document
            .get("_links")
            .and_then(Value::as_object)
            .map(|links| {
                Self(
                    links
                        .iter()
                        .map(|(rel, link)| (rel.clone(), link.clone()))
                        .collect(),
                )
            })
            .unwrap_or_default()
    }

    /// Adds a link with the given `href`.
    pub fn with_link(mut self, rel: impl Into<String>, href: impl Into<String>) -> Self {
        let href: String = href.into();
        self.0.insert(rel.into(), serde_json::json!({ "href": href }));
        self
    }

    pub fn get(&self, rel: &str) -> Option<&Value> {
        self.0.get(rel)
    }

    /// Returns the `href` of the named link, if the link is a HAL link object.
    pub fn href(&self, rel: &str) -> Option<&str> {
        self.0
            .get(rel)
            .and_then(|link| link.get("href"))
            .and_then(Value::as_str)
    }

    pub fn publish_verification_results_href(&self) -> Option<&str> {
        self.href(PUBLISH_VERIFICATION_RESULTS_LINK)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, Value)> for PactAttributes {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
