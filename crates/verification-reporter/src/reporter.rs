//! Dispatch of verification results to wherever the pact came from.
//!
//! Publishing is a side effect of verification, never part of its outcome:
//! every failure on the way to the broker (bad URL, bad options, transport
//! error, broker rejection, even a panicking client) ends up as a log line and
//! a failure count, and `report_results` returns normally.

use crate::{
    gate::PublishGate,
    property::SystemProperties,
};
use metrics::counter;
use pact_broker_client::{
    BrokerClientError,
    PactBrokerClient,
    PublishResult,
    PublishVerificationResults,
};
use pact_model::{
    BrokerUrlSource,
    Pact,
    PactSource,
};
use std::{
    any::Any,
    thread,
};
use tracing::{
    debug,
    error,
    info,
};

/// Counter of publish attempts, labelled with `status`.
pub const PUBLISH_RESULTS_COUNTER: &str = "pact_verification_results_publish_total";

/// Reports verification results for a pact.
pub trait VerificationReporter: Send + Sync {
    /// Publishes `passed` for `provider_version` if the pact's source supports it.
    ///
    /// `client` replaces the broker client that would otherwise be built from
    /// the pact source. Never fails; problems are logged.
    fn report_results(
        &self,
        pact: &Pact,
        passed: bool,
        provider_version: &str,
        client: Option<&dyn PublishVerificationResults>,
    );

    /// Returns true unless `pact.verifier.publishResults` is set to `"true"` in
    /// the process environment.
    fn publishing_results_disabled(&self) -> bool {
        PublishGate::new(&SystemProperties).is_publishing_disabled()
    }
}

/// Publishes to the pact broker for broker-sourced pacts, skips everything else.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultVerificationReporter;

impl VerificationReporter for DefaultVerificationReporter {
    fn report_results(
        &self,
        pact: &Pact,
        passed: bool,
        provider_version: &str,
        client: Option<&dyn PublishVerificationResults>,
    ) {
        match &pact.source {
            PactSource::BrokerUrl(source) => {
                let result = publish_isolated(source, client, passed, provider_version);
                log_publish_result(pact, passed, &result);
            }
            PactSource::File { .. }
            | PactSource::Directory { .. }
            | PactSource::Url { .. }
            | PactSource::Unknown => {
                info!(
                    consumer = %pact.consumer,
                    provider = %pact.provider,
                    "Skipping publishing verification results for source {}",
                    pact.source
                );
                counter!(PUBLISH_RESULTS_COUNTER, "status" => "skipped").increment(1);
            }
        }
    }
}

/// Reports through [`DefaultVerificationReporter`].
#[deprecated(note = "use a `VerificationReporter`, e.g. `DefaultVerificationReporter`, instead")]
pub fn report_verification_results(
    pact: &Pact,
    passed: bool,
    provider_version: &str,
    client: Option<&dyn PublishVerificationResults>,
) {
    DefaultVerificationReporter.report_results(pact, passed, provider_version, client);
}

/// Publishes on a dedicated thread, turning a panic into a failed publish.
///
/// The broker client is built, used and dropped on that thread, so a blocking
/// client never lives inside the caller's async runtime, if it has one.
fn publish_isolated(
    source: &BrokerUrlSource,
    client: Option<&dyn PublishVerificationResults>,
    passed: bool,
    provider_version: &str,
) -> PublishResult {
    let publish = || match client {
        Some(client) => {
            client.publish_verification_results(&source.attributes, passed, provider_version)
        }
        None => {
            PactBrokerClient::new(&source.pact_broker_url, &source.options).and_then(|client| {
                client.publish_verification_results(&source.attributes, passed, provider_version)
            })
        }
    };

    thread::scope(|scope| {
        let handle = thread::Builder::new()
            .name("pact-publish".to_string())
            .spawn_scoped(scope, publish)
            .map_err(|err| {
                BrokerClientError::Other(format!("failed to spawn publish thread: {err}"))
            })?;
        handle.join().unwrap_or_else(|payload| {
            Err(BrokerClientError::Other(format!(
                "broker client panicked: {}",
                panic_message(payload.as_ref())
            )))
        })
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

fn log_publish_result(pact: &Pact, passed: bool, result: &PublishResult) {
    match result {
        Ok(()) => {
            info!(
                consumer = %pact.consumer,
                provider = %pact.provider,
                "Published verification result of '{passed}' for consumer '{}'",
                pact.consumer
            );
            counter!(PUBLISH_RESULTS_COUNTER, "status" => "success").increment(1);
        }
        Err(err) => {
            error!("Failed to publish verification results - {err}");
            debug!(
                error = ?err,
                consumer = %pact.consumer,
                provider = %pact.provider,
                passed,
                "Verification results publish failure detail"
            );
            counter!(PUBLISH_RESULTS_COUNTER, "status" => "failure").increment(1);
        }
    }
}
