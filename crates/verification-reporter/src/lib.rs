//! `verification-reporter`
//!
//! Decides whether the result of a provider verification run is published,
//! and if so publishes it to the pact broker the pact was fetched from.
//!
//! - [`PublishGate`] keeps publishing off unless `pact.verifier.publishResults`
//!   is `"true"`.
//! - [`DefaultVerificationReporter`] publishes for broker-sourced pacts and
//!   skips every other source. Publish failures are logged, never returned.
//! - [`ProviderVerifier`] composes the two with a replaceable property source
//!   and reporter.
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod gate;
pub mod outcome;
pub mod property;
pub mod reporter;
pub mod verifier;

pub use gate::{
    PUBLISH_RESULTS_PROPERTY,
    PublishGate,
};
pub use outcome::VerificationOutcome;
pub use property::{
    FnPropertyLookup,
    MapPropertyLookup,
    PropertyError,
    PropertyLookup,
    SystemProperties,
};
#[allow(deprecated)]
pub use reporter::report_verification_results;
pub use reporter::{
    DefaultVerificationReporter,
    PUBLISH_RESULTS_COUNTER,
    VerificationReporter,
};
pub use verifier::ProviderVerifier;
