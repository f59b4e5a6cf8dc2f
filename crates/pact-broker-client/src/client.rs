//! Blocking pact broker client

use crate::{
    BrokerClientError,
    BrokerClientOptions,
    PublishResult,
    PublishVerificationResults,
    Result,
};
use pact_model::PactAttributes;
use reqwest::{
    blocking::Client,
    header::{
        ACCEPT,
        CONTENT_TYPE,
    },
};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;
use url::Url;

const HAL_JSON: &str = "application/hal+json";

/// Body POSTed to the broker's publish-verification-results link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerificationResultRequest<'a> {
    success: bool,
    provider_application_version: &'a str,
}

/// A client bound to a single pact broker.
///
/// ```no_run
/// use pact_broker_client::{
///     PactBrokerClient,
///     PublishVerificationResults,
/// };
/// use pact_model::PactAttributes;
/// use std::collections::BTreeMap;
///
/// let client = PactBrokerClient::new("https://broker.example", &BTreeMap::new()).unwrap();
/// let attributes = PactAttributes::new().with_link(
///     "pb:publish-verification-results",
///     "/pacts/provider/orders-api/consumer/web-app/pact-version/abc/verification-results",
/// );
/// client
///     .publish_verification_results(&attributes, true, "1.2.3")
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct PactBrokerClient {
    client: Client,
    base_url: Url,
    options: BrokerClientOptions,
}

impl PactBrokerClient {
    /// Create a client for the broker at `base_url` using the source's option map.
    pub fn new(base_url: &str, options: &BTreeMap<String, String>) -> Result<Self> {
        let options = BrokerClientOptions::from_map(options)?;
        Self::with_options(base_url, options)
    }

    /// Create a client with already parsed options.
    pub fn with_options(base_url: &str, options: BrokerClientOptions) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url,
            options,
        })
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a link href against the broker base URL; absolute hrefs win.
    fn resolve(&self, href: &str) -> Result<Url> {
        Ok(self.base_url.join(href)?)
    }

    fn post_json<T: Serialize>(&self, url: Url, body: &T) -> Result<()> {
        let request = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, HAL_JSON)
            .json(body);

        let response = self.options.apply(request).send()?;
        let status = response.status();

        if status.is_success() {
            debug!(target: "pact_broker_client", %url, status = status.as_u16(), "Broker accepted request");
            return Ok(());
        }

        let body = response.text().unwrap_or_default();
        Err(BrokerClientError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

impl PublishVerificationResults for PactBrokerClient {
    fn publish_verification_results(
        &self,
        attributes: &PactAttributes,
        passed: bool,
        provider_version: &str,
    ) -> PublishResult {
        let href = attributes
            .publish_verification_results_href()
            .ok_or(BrokerClientError::MissingPublishLink)?;
        let url = self.resolve(href)?;

        debug!(
            target: "pact_broker_client",
            %url,
            passed,
            provider_version,
            "Publishing verification results"
        );

        self.post_json(
            url,
            &VerificationResultRequest {
                success: passed,
                provider_application_version: provider_version,
            },
        )
    }
}
