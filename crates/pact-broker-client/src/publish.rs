use crate::error::BrokerClientError;
use pact_model::PactAttributes;

/// Outcome of a single attempt to hand a verification result to the broker.
pub type PublishResult = std::result::Result<(), BrokerClientError>;

/// Anything that can record a verification result against a broker pact.
///
/// [`crate::PactBrokerClient`] is the real implementation; callers may pass
/// their own (a pre-configured client, or a fake in tests) wherever a client
/// override is accepted.
pub trait PublishVerificationResults: Send + Sync {
    /// Publishes `passed` for `provider_version` using the links in `attributes`.
    fn publish_verification_results(
        &self,
        attributes: &PactAttributes,
        passed: bool,
        provider_version: &str,
    ) -> PublishResult;
}
