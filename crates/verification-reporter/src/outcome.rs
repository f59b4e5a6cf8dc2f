use pact_broker_client::PublishVerificationResults;
use pact_model::Pact;
use std::{
    fmt,
    sync::Arc,
};

/// The result of verifying one pact, ready to be reported.
#[derive(Clone)]
pub struct VerificationOutcome {
    pact: Pact,
    passed: bool,
    provider_version: String,
    broker_client: Option<Arc<dyn PublishVerificationResults>>,
}

impl VerificationOutcome {
    pub fn new(pact: Pact, passed: bool, provider_version: impl Into<String>) -> Self {
        Self {
            pact,
            passed,
            provider_version: provider_version.into(),
            broker_client: None,
        }
    }

    /// Binds a broker client to use instead of one built from the pact source.
    pub fn with_broker_client(mut self, client: Arc<dyn PublishVerificationResults>) -> Self {
        self.broker_client = Some(client);
        self
    }

    pub fn pact(&self) -> &Pact {
        &self.pact
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn provider_version(&self) -> &str {
        &self.provider_version
    }

    pub fn broker_client(&self) -> Option<&dyn PublishVerificationResults> {
        self.broker_client.as_deref()
    }
}

impl fmt::Debug for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationOutcome")
            .field("consumer", &self.pact.consumer.name)
            .field("provider", &self.pact.provider.name)
            .field("passed", &self.passed)
            .field("provider_version", &self.provider_version)
            .field("broker_client", &self.broker_client.is_some())
            .finish()
    }
}
