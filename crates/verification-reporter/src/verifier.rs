//! Verifier-side wiring of the publish gate and the reporter.

use crate::{
    gate::{
        PUBLISH_RESULTS_PROPERTY,
        PublishGate,
    },
    outcome::VerificationOutcome,
    property::{
        PropertyLookup,
        SystemProperties,
    },
    reporter::{
        DefaultVerificationReporter,
        VerificationReporter,
    },
};
use pact_broker_client::PublishVerificationResults;
use pact_model::Pact;
use std::{
    fmt,
    sync::Arc,
};
use tracing::info;

/// Holds the property source and the reporter a provider verification run
/// uses once a pact has been verified.
///
/// Both collaborators are replaceable: embeddings swap the property lookup
/// for their own configuration object, tests swap the reporter for a fake.
pub struct ProviderVerifier {
    property_lookup: Box<dyn PropertyLookup>,
    verification_reporter: Arc<dyn VerificationReporter>,
}

impl Default for ProviderVerifier {
    fn default() -> Self {
        Self {
            property_lookup: Box::new(SystemProperties),
            verification_reporter: Arc::new(DefaultVerificationReporter),
        }
    }
}

impl ProviderVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property_lookup(mut self, lookup: impl PropertyLookup + 'static) -> Self {
        self.set_property_lookup(lookup);
        self
    }

    pub fn with_verification_reporter(mut self, reporter: Arc<dyn VerificationReporter>) -> Self {
        self.verification_reporter = reporter;
        self
    }

    pub fn set_property_lookup(&mut self, lookup: impl PropertyLookup + 'static) {
        self.property_lookup = Box::new(lookup);
    }

    pub fn set_verification_reporter(&mut self, reporter: Arc<dyn VerificationReporter>) {
        self.verification_reporter = reporter;
    }

    pub fn property_lookup(&self) -> &dyn PropertyLookup {
        self.property_lookup.as_ref()
    }

    pub fn verification_reporter(&self) -> &Arc<dyn VerificationReporter> {
        &self.verification_reporter
    }

    /// Returns true unless `pact.verifier.publishResults` is `"true"` in the
    /// configured property source.
    pub fn publishing_results_disabled(&self) -> bool {
        PublishGate::new(self.property_lookup.as_ref()).is_publishing_disabled()
    }

    /// Reports the result of verifying `pact`, if publishing is enabled.
    pub fn report_verification_results(
        &self,
        pact: &Pact,
        passed: bool,
        provider_version: &str,
        client: Option<&dyn PublishVerificationResults>,
    ) {
        if self.publishing_results_disabled() {
            info!(
                consumer = %pact.consumer,
                provider = %pact.provider,
                "Skipping publishing of verification results as it has been disabled ({PUBLISH_RESULTS_PROPERTY} is not 'true')"
            );
            return;
        }
        self.verification_reporter
            .report_results(pact, passed, provider_version, client);
    }

    /// Same as [`Self::report_verification_results`] for a packaged outcome.
    pub fn report_outcome(&self, outcome: &VerificationOutcome) {
        self.report_verification_results(
            outcome.pact(),
            outcome.passed(),
            outcome.provider_version(),
            outcome.broker_client(),
        );
    }
}

impl fmt::Debug for ProviderVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderVerifier")
            .field("publishing_results_disabled", &self.publishing_results_disabled())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{
        FnPropertyLookup,
        MapPropertyLookup,
    };
    use pact_broker_client::PublishResult;
    use pact_model::{
        BrokerUrlSource,
        PactAttributes,
        PactSource,
    };
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use tracing_test::traced_test;

    #[derive(Debug, Clone, PartialEq)]
    struct Reported {
        consumer: String,
        passed: bool,
        provider_version: String,
        with_client: bool,
    }

    #[derive(Default)]
    struct RecordingReporter {
        reported: Mutex<Vec<Reported>>,
    }

    impl RecordingReporter {
        fn reported(&self) -> Vec<Reported> {
            self.reported.lock().unwrap().clone()
        }
    }

    impl VerificationReporter for RecordingReporter {
        fn report_results(
            &self,
            pact: &Pact,
            passed: bool,
            provider_version: &str,
            client: Option<&dyn PublishVerificationResults>,
        ) {
            self.reported.lock().unwrap().push(Reported {
                consumer: pact.consumer.name.clone(),
                passed,
                provider_version: provider_version.to_string(),
                with_client: client.is_some(),
            });
        }
    }

    struct NoopClient;

    impl PublishVerificationResults for NoopClient {
        fn publish_verification_results(
            &self,
            _attributes: &PactAttributes,
            _passed: bool,
            _provider_version: &str,
        ) -> PublishResult {
            Ok(())
        }
    }

    fn enabled() -> MapPropertyLookup {
        MapPropertyLookup::new().with(PUBLISH_RESULTS_PROPERTY, "true")
    }

    fn broker_pact() -> Pact {
        Pact::new(
            "web-app",
            "orders-api",
            PactSource::BrokerUrl(BrokerUrlSource::new(
                "https://broker.example/pacts/1",
                "https://broker.example",
            )),
        )
    }

    #[test]
    fn test_defaults_to_disabled_with_empty_properties() {
        let verifier = ProviderVerifier::new().with_property_lookup(MapPropertyLookup::new());
        assert!(verifier.publishing_results_disabled());
    }

    #[test]
    fn test_property_lookup_can_be_swapped() {
        let mut verifier = ProviderVerifier::new().with_property_lookup(MapPropertyLookup::new());
        assert!(verifier.publishing_results_disabled());

        verifier.set_property_lookup(enabled());
        assert!(!verifier.publishing_results_disabled());

        verifier.set_property_lookup(FnPropertyLookup::from_get(|_| Some("TRUE".to_string())));
        assert!(!verifier.publishing_results_disabled());
    }

    #[test]
    fn test_enabled_forwards_to_reporter() {
        let reporter = Arc::new(RecordingReporter::default());
        let verifier = ProviderVerifier::new()
            .with_property_lookup(enabled())
            .with_verification_reporter(reporter.clone());

        verifier.report_verification_results(&broker_pact(), true, "1.2.3", Some(&NoopClient));

        assert_eq!(
            reporter.reported(),
            vec![Reported {
                consumer: "web-app".to_string(),
                passed: true,
                provider_version: "1.2.3".to_string(),
                with_client: true,
            }]
        );
    }

    #[test]
    #[traced_test]
    fn test_disabled_never_reaches_reporter() {
        let reporter = Arc::new(RecordingReporter::default());
        let verifier = ProviderVerifier::new()
            .with_property_lookup(MapPropertyLookup::new().with(PUBLISH_RESULTS_PROPERTY, "false"))
            .with_verification_reporter(reporter.clone());

        verifier.report_verification_results(&broker_pact(), true, "1.2.3", None);

        assert!(reporter.reported().is_empty());
        assert!(logs_contain(
            "Skipping publishing of verification results as it has been disabled"
        ));
    }

    #[test]
    fn test_reporter_can_be_swapped() {
        let first = Arc::new(RecordingReporter::default());
        let second = Arc::new(RecordingReporter::default());
        let mut verifier = ProviderVerifier::new()
            .with_property_lookup(enabled())
            .with_verification_reporter(first.clone());

        verifier.report_verification_results(&broker_pact(), true, "1.0.0", None);
        verifier.set_verification_reporter(second.clone());
        verifier.report_verification_results(&broker_pact(), false, "1.0.1", None);

        assert_eq!(first.reported().len(), 1);
        assert_eq!(second.reported().len(), 1);
        assert!(!second.reported()[0].passed);
    }

    #[test]
    fn test_report_outcome_carries_bound_client() {
        let reporter = Arc::new(RecordingReporter::default());
        let verifier = ProviderVerifier::new()
            .with_property_lookup(enabled())
            .with_verification_reporter(reporter.clone());

        let outcome = VerificationOutcome::new(broker_pact(), false, "3.1.4")
            .with_broker_client(Arc::new(NoopClient));
        verifier.report_outcome(&outcome);

        assert_eq!(
            reporter.reported(),
            vec![Reported {
                consumer: "web-app".to_string(),
                passed: false,
                provider_version: "3.1.4".to_string(),
                with_client: true,
            }]
        );
    }

    #[test]
    #[traced_test]
    fn test_report_outcome_respects_gate() {
        let reporter = Arc::new(RecordingReporter::default());
        let verifier = ProviderVerifier::new()
            .with_property_lookup(MapPropertyLookup::new())
            .with_verification_reporter(reporter.clone());

        verifier.report_outcome(&VerificationOutcome::new(broker_pact(), true, "1.0.0"));

        assert!(reporter.reported().is_empty());
        logs_assert(|lines: &[&str]| {
            match lines
                .iter()
                .filter(|line| line.contains("Skipping publishing of verification results"))
                .count()
            {
                1 => Ok(()),
                n => Err(format!("expected one disabled log, found {n}")),
            }
        });
    }

    #[test]
    fn test_debug_shows_gate_state() {
        let verifier = ProviderVerifier::new().with_property_lookup(enabled());
        assert!(format!("{verifier:?}").contains("publishing_results_disabled: false"));
    }
}
